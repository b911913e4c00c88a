// SPDX-License-Identifier: MPL-2.0
//! Gallery scanner module for finding and sorting board images.
//!
//! This module scans a directory for supported image formats, filters
//! them, and sorts them according to the configured sort order. The
//! resulting list seeds the board's [`Carousel`](crate::carousel::Carousel).

use crate::config::SortOrder;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// File extensions the gallery accepts, lowercase.
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Scans a directory for supported images and sorts them.
///
/// Hidden files and subdirectories are skipped. An empty result is not
/// an error; the board renders its empty state instead.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    sort_images(&mut images, sort_order);
    Ok(images)
}

/// Checks if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Sorts image paths according to the specified sort order.
fn sort_images(images: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            images.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
        SortOrder::CreatedDate => {
            images.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_finds_all_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "b.png");
        create_test_image(temp_dir.path(), "c.webp");
        create_test_image(temp_dir.path(), "notes.txt");

        let images = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(images.len(), 3);
    }

    #[test]
    fn scan_directory_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_test_image(temp_dir.path(), "c.jpg");
        let img_a = create_test_image(temp_dir.path(), "a.jpg");
        let img_b = create_test_image(temp_dir.path(), "b.jpg");

        let images = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(images, vec![img_a, img_b, img_c]);
    }

    #[test]
    fn scan_directory_skips_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");
        fs::create_dir(temp_dir.path().join("nested.png")).expect("failed to create subdir");

        let images = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(images.len(), 1);
    }

    #[test]
    fn scan_empty_directory_returns_empty_list() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let images = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");
        assert!(images.is_empty());
    }

    #[test]
    fn scan_missing_directory_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("absent");
        assert!(scan_directory(&missing, SortOrder::Alphabetical).is_err());
    }

    #[test]
    fn is_supported_image_recognizes_extensions() {
        assert!(is_supported_image(Path::new("test.jpg")));
        assert!(is_supported_image(Path::new("test.JPG")));
        assert!(is_supported_image(Path::new("test.jpeg")));
        assert!(is_supported_image(Path::new("test.png")));
        assert!(is_supported_image(Path::new("test.gif")));
        assert!(is_supported_image(Path::new("test.webp")));
    }

    #[test]
    fn is_supported_image_rejects_other_files() {
        assert!(!is_supported_image(Path::new("test.txt")));
        assert!(!is_supported_image(Path::new("test.mp4")));
        assert!(!is_supported_image(Path::new("test")));
    }
}
