// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the board and
//! settings views.
//!
//! The `App` struct wires together the domains (board, localization,
//! settings) and translates messages into side effects like config
//! persistence or schedule loading. Policy decisions (window sizing,
//! persistence format, localization switching) stay close to the main
//! update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, SortOrder};
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::schedule::Schedule;
use crate::ui::board;
use crate::ui::state::SlideshowInterval;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Root Iced application state that bridges the board, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    board: board::State,
    theme_mode: ThemeMode,
    sort_order: SortOrder,
    slideshow_enabled: bool,
    slideshow_interval: SlideshowInterval,
    /// Schedule payload location, re-read on reload.
    schedule_path: Option<PathBuf>,
    /// Gallery directory, rescanned on reload and on sort-order changes.
    gallery_dir: Option<PathBuf>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("gallery_len", &self.board.gallery_len())
            .field("sessions", &self.board.clock().len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Board,
            board: board::State::new(),
            theme_mode: ThemeMode::default(),
            sort_order: SortOrder::default(),
            slideshow_enabled: config::DEFAULT_SLIDESHOW_ENABLED,
            slideshow_interval: SlideshowInterval::default(),
            schedule_path: None,
            gallery_dir: None,
        }
    }
}

impl App {
    /// Initializes application state and kicks off asynchronous schedule
    /// and gallery loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let loaded_config = config::load();
        let i18n = I18n::new(flags.lang.clone(), &loaded_config);

        let app = App {
            i18n,
            theme_mode: loaded_config.general.theme_mode,
            sort_order: loaded_config.board.sort_order.unwrap_or_default(),
            slideshow_enabled: loaded_config
                .board
                .slideshow_enabled
                .unwrap_or(config::DEFAULT_SLIDESHOW_ENABLED),
            slideshow_interval: SlideshowInterval::new(
                loaded_config
                    .board
                    .slideshow_interval_secs
                    .unwrap_or(config::DEFAULT_SLIDESHOW_INTERVAL_SECS),
            ),
            schedule_path: flags.schedule_path,
            gallery_dir: flags.gallery_dir,
            ..Self::default()
        };

        let task = app.reload_tasks();
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.board.schedule().and_then(Schedule::title) {
            Some(schedule_title) => format!("{schedule_title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn subscription(&self) -> Subscription<Message> {
        let countdown_sub =
            subscription::create_countdown_subscription(self.board.has_pending_sessions());
        let slideshow_sub = subscription::create_slideshow_subscription(
            self.screen,
            self.slideshow_enabled,
            self.board.can_rotate(),
            self.slideshow_interval,
        );
        let keyboard_sub = subscription::create_keyboard_subscription(self.screen);

        Subscription::batch([countdown_sub, slideshow_sub, keyboard_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Builds the tasks that (re)load the schedule payload and rescan the
    /// gallery directory.
    fn reload_tasks(&self) -> Task<Message> {
        Task::batch([self.load_schedule_task(), self.scan_gallery_task()])
    }

    fn load_schedule_task(&self) -> Task<Message> {
        match &self.schedule_path {
            Some(path) => {
                let path = path.clone();
                Task::perform(
                    async move { Schedule::load_from_path(&path) },
                    Message::ScheduleLoaded,
                )
            }
            None => Task::none(),
        }
    }

    fn scan_gallery_task(&self) -> Task<Message> {
        match &self.gallery_dir {
            Some(dir) => {
                let dir = dir.clone();
                let sort_order = self.sort_order;
                Task::perform(
                    async move { gallery::scan_directory(&dir, sort_order) },
                    Message::GalleryScanned,
                )
            }
            None => Task::none(),
        }
    }

    /// Snapshot of the current preferences in config-file form.
    fn to_config(&self) -> config::Config {
        config::Config {
            general: config::GeneralConfig {
                language: Some(self.i18n.current_locale().to_string()),
                theme_mode: self.theme_mode,
            },
            board: config::BoardConfig {
                sort_order: Some(self.sort_order),
                slideshow_enabled: Some(self.slideshow_enabled),
                slideshow_interval_secs: Some(self.slideshow_interval.value()),
            },
        }
    }
}
