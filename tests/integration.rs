// SPDX-License-Identifier: MPL-2.0
use chrono::{Duration, TimeZone, Utc};
use iced_marquee::carousel::Carousel;
use iced_marquee::config::{self, Config, SortOrder};
use iced_marquee::countdown::{CountdownClock, SessionId, TimeLeft};
use iced_marquee::gallery;
use iced_marquee::i18n::fluent::I18n;
use iced_marquee::schedule::Schedule;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn create_test_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).expect("failed to create test file");
    file.write_all(b"fake image data")
        .expect("failed to write test file");
    path
}

#[test]
fn test_schedule_drives_countdown_to_elapsed() {
    let dir = tempdir().expect("failed to create temp dir");
    let payload_path = dir.path().join("schedule.toml");
    fs::write(
        &payload_path,
        r#"
title = "Launch day"

[[sessions]]
id = "keynote"
title = "Keynote"
starts-at = "2026-09-01T09:00:00Z"

[[sessions]]
id = "workshop"
title = "Workshop"
starts-at = "2026-09-01T10:00:00Z"
"#,
    )
    .expect("failed to write schedule");

    let schedule = Schedule::load_from_path(&payload_path).expect("failed to load schedule");
    let boot = Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap();
    let mut clock = CountdownClock::new(schedule.targets(), boot);

    let keynote = SessionId::new("keynote");
    let workshop = SessionId::new("workshop");

    assert_eq!(
        clock.remaining(&keynote),
        Some(TimeLeft {
            hours: 1,
            minutes: 0
        })
    );
    assert_eq!(
        clock.remaining(&workshop),
        Some(TimeLeft {
            hours: 2,
            minutes: 0
        })
    );

    // An hour of minute ticks: the keynote elapses, the workshop keeps
    // counting down without drift.
    for minute in 1..=60 {
        clock.tick(boot + Duration::minutes(minute));
    }

    assert!(clock.elapsed(&keynote));
    assert_eq!(clock.remaining(&keynote), Some(TimeLeft::default()));
    assert!(!clock.elapsed(&workshop));
    assert_eq!(
        clock.remaining(&workshop),
        Some(TimeLeft {
            hours: 1,
            minutes: 0
        })
    );
}

#[test]
fn test_gallery_scan_seeds_wrapping_carousel() {
    let dir = tempdir().expect("failed to create temp dir");
    create_test_image(dir.path(), "c.png");
    create_test_image(dir.path(), "a.png");
    create_test_image(dir.path(), "b.png");
    create_test_image(dir.path(), "notes.txt");

    let images =
        gallery::scan_directory(dir.path(), SortOrder::Alphabetical).expect("failed to scan");

    let mut carousel = Carousel::new();
    carousel.seed(images);
    assert_eq!(carousel.len(), 3);

    // Wrap backwards onto the last image, then cycle all the way around.
    carousel.prev();
    assert_eq!(carousel.current_index(), Some(2));
    for _ in 0..3 {
        carousel.next();
    }
    assert_eq!(carousel.current_index(), Some(2));

    carousel.go_to(-1);
    assert_eq!(carousel.current_index(), Some(2));
    carousel.go_to(3);
    assert_eq!(carousel.current_index(), Some(0));
}

#[test]
fn test_malformed_timestamp_fails_safe_to_elapsed() {
    let payload = r#"
[[sessions]]
id = "broken"
title = "Broken"
starts-at = "tomorrow-ish"
"#;
    let schedule = Schedule::parse(payload).expect("lenient parse should not fail");
    let now = Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap();
    let clock = CountdownClock::new(schedule.targets(), now);

    let broken = SessionId::new("broken");
    assert!(clock.elapsed(&broken));
    assert_eq!(clock.remaining(&broken), Some(TimeLeft::default()));
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("failed to close temporary directory");
}

#[test]
fn test_countdown_lines_localize() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    let i18n = I18n::new(None, &config);

    let mut args = fluent_bundle::FluentArgs::new();
    args.set("hours", 1);
    args.set("minutes", 30);
    let line = i18n.tr_args("session-starts-in", &args);
    assert!(line.contains("Commence"), "line was: {line}");
}
