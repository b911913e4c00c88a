// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for board navigation operations.
//!
//! Measures the performance of:
//! - Gallery scanning (finding and sorting image files)
//! - Carousel navigation (next/previous/jump)
//! - Countdown recomputation over a full schedule

use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use iced_marquee::carousel::Carousel;
use iced_marquee::config::SortOrder;
use iced_marquee::countdown::{CountdownClock, SessionId};
use iced_marquee::gallery;
use std::collections::BTreeMap;
use std::hint::black_box;
use std::io::Write;

/// Creates a directory of fake gallery images for scanning benchmarks.
fn populate_gallery(dir: &std::path::Path, count: usize) {
    for i in 0..count {
        let path = dir.join(format!("image_{i:04}.png"));
        let mut file = std::fs::File::create(path).expect("failed to create bench file");
        file.write_all(b"fake image data")
            .expect("failed to write bench file");
    }
}

/// Benchmark gallery scanning performance.
fn bench_scan_gallery(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_navigation");

    let temp_dir = tempfile::tempdir().expect("failed to create bench dir");
    populate_gallery(temp_dir.path(), 200);

    group.bench_function("scan_gallery", |b| {
        b.iter(|| {
            let images = gallery::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
                .expect("failed to scan gallery");
            black_box(images);
        });
    });

    group.finish();
}

/// Benchmark carousel navigation operations.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_navigation");

    let mut carousel = Carousel::new();
    carousel.seed((0..200).collect::<Vec<_>>());

    group.bench_function("next", |b| {
        b.iter(|| {
            carousel.next();
            black_box(carousel.current_index());
        });
    });

    group.bench_function("prev", |b| {
        b.iter(|| {
            carousel.prev();
            black_box(carousel.current_index());
        });
    });

    group.bench_function("go_to_far_negative", |b| {
        b.iter(|| {
            carousel.go_to(black_box(-1_000_003));
            black_box(carousel.current_index());
        });
    });

    group.finish();
}

/// Benchmark countdown recomputation over a large schedule.
fn bench_countdown_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_navigation");

    let boot = Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap();
    let targets: BTreeMap<_, _> = (0..500)
        .map(|i| {
            (
                SessionId::new(format!("session-{i}")),
                Some(boot + Duration::minutes(i)),
            )
        })
        .collect();
    let mut clock = CountdownClock::new(targets, boot);

    group.bench_function("tick_500_sessions", |b| {
        let mut minute = 0;
        b.iter(|| {
            minute += 1;
            clock.tick(boot + Duration::seconds(minute));
            black_box(clock.has_pending());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scan_gallery,
    bench_navigate,
    bench_countdown_tick
);
criterion_main!(benches);
