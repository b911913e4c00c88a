// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All state transitions funnel through [`update`]; the periodic tick
//! handlers only supply the current wall-clock instant, the actual
//! recomputation lives in the board and its countdown clock.

use super::{App, Message};
use crate::config;
use crate::error::Error;
use crate::ui::board;
use crate::ui::settings;
use crate::ui::state::SlideshowInterval;
use chrono::Utc;
use iced::Task;

/// Applies a message to the application state.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Board(message) => {
            app.board.navigate(message);
            Task::none()
        }
        Message::Settings(message) => handle_settings(app, message),
        Message::SwitchScreen(screen) => {
            app.screen = screen;
            Task::none()
        }
        Message::Reload => app.reload_tasks(),
        Message::ScheduleLoaded(Ok(schedule)) => {
            app.board.apply_schedule(schedule, Utc::now());
            Task::none()
        }
        Message::ScheduleLoaded(Err(error)) => {
            if let Error::Schedule(schedule_error) = error {
                app.board.set_schedule_error(schedule_error);
            }
            Task::none()
        }
        Message::GalleryScanned(Ok(images)) => {
            app.board.seed_gallery(images);
            Task::none()
        }
        Message::GalleryScanned(Err(_)) => {
            app.board.set_gallery_error();
            Task::none()
        }
        Message::CountdownTick => {
            app.board.tick(Utc::now());
            Task::none()
        }
        Message::SlideshowTick => {
            app.board.navigate(board::Message::NextImage);
            Task::none()
        }
    }
}

fn handle_settings(app: &mut App, message: settings::Message) -> Task<Message> {
    match message {
        settings::Message::LanguageSelected(locale) => {
            app.i18n.set_locale(locale);
            persist(app);
            Task::none()
        }
        settings::Message::ThemeModeSelected(mode) => {
            app.theme_mode = mode;
            persist(app);
            Task::none()
        }
        settings::Message::SortOrderSelected(order) => {
            app.sort_order = order;
            persist(app);
            // The gallery order changed on disk terms; rescan to apply it.
            app.scan_gallery_task()
        }
        settings::Message::SlideshowToggled(enabled) => {
            app.slideshow_enabled = enabled;
            persist(app);
            Task::none()
        }
        settings::Message::SlideshowIntervalChanged(secs) => {
            app.slideshow_interval = SlideshowInterval::new(secs);
            persist(app);
            Task::none()
        }
    }
}

/// Persists the current preferences. Settings stay in memory for this
/// run if the disk write fails.
fn persist(app: &App) {
    let _ = config::save(&app.to_config());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Screen;
    use crate::countdown::SessionId;
    use crate::error::ScheduleError;
    use crate::schedule::Schedule;
    use std::path::PathBuf;

    fn future_schedule() -> Schedule {
        Schedule::parse(
            r#"
title = "Test week"

[[sessions]]
id = "a"
title = "Session A"
starts-at = "2099-01-01T09:00:00Z"
"#,
        )
        .expect("failed to parse test schedule")
    }

    #[test]
    fn schedule_loaded_installs_clock() {
        let mut app = App::default();
        let _ = update(&mut app, Message::ScheduleLoaded(Ok(future_schedule())));

        assert!(app.board.has_pending_sessions());
        assert!(!app.board.clock().elapsed(&SessionId::new("a")));
    }

    #[test]
    fn schedule_load_failure_records_error() {
        let mut app = App::default();
        let _ = update(
            &mut app,
            Message::ScheduleLoaded(Err(ScheduleError::IoError("gone".into()).into())),
        );

        assert!(app.board.schedule().is_none());
        assert!(!app.board.has_pending_sessions());
    }

    #[test]
    fn gallery_scan_seeds_carousel() {
        let mut app = App::default();
        let images = vec![PathBuf::from("a.png"), PathBuf::from("b.png")];
        let _ = update(&mut app, Message::GalleryScanned(Ok(images)));

        assert_eq!(app.board.gallery_len(), 2);
        assert_eq!(app.board.current_index(), Some(0));
    }

    #[test]
    fn slideshow_tick_advances_carousel() {
        let mut app = App::default();
        let images = vec![PathBuf::from("a.png"), PathBuf::from("b.png")];
        let _ = update(&mut app, Message::GalleryScanned(Ok(images)));
        let _ = update(&mut app, Message::SlideshowTick);

        assert_eq!(app.board.current_index(), Some(1));

        // Wraps back to the first image.
        let _ = update(&mut app, Message::SlideshowTick);
        assert_eq!(app.board.current_index(), Some(0));
    }

    #[test]
    fn countdown_tick_recomputes_sessions() {
        let mut app = App::default();
        let _ = update(&mut app, Message::ScheduleLoaded(Ok(future_schedule())));
        let _ = update(&mut app, Message::CountdownTick);

        // The target is far in the future; ticking must not elapse it.
        assert!(app.board.has_pending_sessions());
    }

    #[test]
    fn switch_screen_updates_state() {
        let mut app = App::default();
        let _ = update(&mut app, Message::SwitchScreen(Screen::Settings));
        assert_eq!(app.screen, Screen::Settings);
    }

    #[test]
    fn board_navigation_message_moves_carousel() {
        let mut app = App::default();
        let images = vec![
            PathBuf::from("a.png"),
            PathBuf::from("b.png"),
            PathBuf::from("c.png"),
        ];
        let _ = update(&mut app, Message::GalleryScanned(Ok(images)));
        let _ = update(&mut app, Message::Board(board::Message::LastImage));

        assert_eq!(app.board.current_index(), Some(2));
    }
}
