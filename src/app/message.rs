// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::schedule::Schedule;
use crate::ui::board;
use crate::ui::settings;
use std::path::PathBuf;

use super::Screen;

/// Runtime flags parsed from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override, e.g. "fr".
    pub lang: Option<String>,
    /// Path to the schedule payload file.
    pub schedule_path: Option<PathBuf>,
    /// Directory of gallery images to rotate through.
    pub gallery_dir: Option<PathBuf>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Board(board::Message),
    Settings(settings::Message),
    SwitchScreen(Screen),
    /// Re-read the schedule payload and rescan the gallery directory.
    Reload,
    /// Result of an asynchronous schedule load.
    ScheduleLoaded(Result<Schedule, Error>),
    /// Result of an asynchronous gallery scan.
    GalleryScanned(Result<Vec<PathBuf>, Error>),
    /// Periodic countdown recomputation (minute cadence).
    CountdownTick,
    /// Periodic slideshow auto-advance.
    SlideshowTick,
}
