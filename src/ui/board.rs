// SPDX-License-Identifier: MPL-2.0
//! Board screen component.
//!
//! The board owns the two pieces of live state: the gallery [`Carousel`]
//! and the session [`CountdownClock`]. The hosting application feeds it
//! loaded data and tick timestamps; the board only derives what to draw.

use crate::carousel::Carousel;
use crate::countdown::{CountdownClock, SessionStatus, TimeLeft};
use crate::error::ScheduleError;
use crate::i18n::fluent::I18n;
use crate::schedule::Schedule;
use chrono::{DateTime, Utc};
use fluent_bundle::FluentArgs;
use iced::alignment::Horizontal;
use iced::widget::{button, container, image, text, Column, Row};
use iced::{Element, Length};
use std::path::PathBuf;

/// Messages emitted by the board's navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Advance to the next image, wrapping after the last.
    NextImage,
    /// Step back to the previous image, wrapping before the first.
    PreviousImage,
    /// Jump straight to the image at the given position.
    JumpToImage(usize),
    /// Jump to the first image.
    FirstImage,
    /// Jump to the last image.
    LastImage,
}

/// Board state: gallery position plus per-session countdowns.
#[derive(Debug, Clone, Default)]
pub struct State {
    carousel: Carousel<PathBuf>,
    schedule: Option<Schedule>,
    clock: CountdownClock,
    schedule_error: Option<ScheduleError>,
    gallery_error: bool,
}

impl State {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the gallery carousel, resetting the position to the first
    /// image. An empty scan clears the gallery; that is not an error.
    pub fn seed_gallery(&mut self, images: Vec<PathBuf>) {
        self.gallery_error = false;
        self.carousel.seed(images);
    }

    /// Records that the gallery directory could not be read.
    pub fn set_gallery_error(&mut self) {
        self.gallery_error = true;
        self.carousel.seed(Vec::new());
    }

    /// Installs a loaded schedule and rebuilds the countdown clock from
    /// its targets as of `now`.
    pub fn apply_schedule(&mut self, schedule: Schedule, now: DateTime<Utc>) {
        self.schedule_error = None;
        self.clock = CountdownClock::new(schedule.targets(), now);
        self.schedule = Some(schedule);
    }

    /// Records a schedule load failure. Any previously loaded schedule
    /// stays on the board.
    pub fn set_schedule_error(&mut self, error: ScheduleError) {
        self.schedule_error = Some(error);
    }

    /// Recomputes every session countdown as of `now`.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.clock.tick(now);
    }

    /// Applies a navigation command to the carousel.
    pub fn navigate(&mut self, message: Message) {
        match message {
            Message::NextImage => self.carousel.next(),
            Message::PreviousImage => self.carousel.prev(),
            Message::JumpToImage(index) => self.carousel.go_to(index as i64),
            Message::FirstImage => self.carousel.go_to(0),
            // -1 wraps to the last index, whatever the gallery size.
            Message::LastImage => self.carousel.go_to(-1),
        }
    }

    /// Returns the loaded schedule, if any.
    #[must_use]
    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// Returns the countdown clock.
    #[must_use]
    pub fn clock(&self) -> &CountdownClock {
        &self.clock
    }

    /// Returns the currently shown image path, if the gallery is non-empty.
    #[must_use]
    pub fn current_image(&self) -> Option<&PathBuf> {
        self.carousel.current()
    }

    /// Returns the current gallery position, if set.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.carousel.current_index()
    }

    /// Returns the number of gallery images.
    #[must_use]
    pub fn gallery_len(&self) -> usize {
        self.carousel.len()
    }

    /// Checks if the slideshow has anything to rotate through.
    #[must_use]
    pub fn can_rotate(&self) -> bool {
        self.carousel.len() > 1
    }

    /// Checks if any session countdown is still pending.
    #[must_use]
    pub fn has_pending_sessions(&self) -> bool {
        self.clock.has_pending()
    }

    /// Renders the board.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut content = Column::new().spacing(24).padding(16);

        content = content.push(self.view_sessions(i18n));
        content = content.push(self.view_gallery(i18n));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_sessions<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let heading = self
            .schedule
            .as_ref()
            .and_then(Schedule::title)
            .map(str::to_string)
            .unwrap_or_else(|| i18n.tr("schedule-untitled"));

        let mut sessions = Column::new()
            .spacing(8)
            .push(text(heading).size(26));

        if let Some(error) = &self.schedule_error {
            sessions = sessions.push(text(i18n.tr(error.i18n_key())).style(text::danger));
        }

        match &self.schedule {
            Some(schedule) => {
                for session in schedule.sessions() {
                    let status_line = match self.clock.status(session.id()) {
                        Some(SessionStatus::Elapsed) => i18n.tr("session-started"),
                        Some(SessionStatus::Pending) => {
                            let left = self
                                .clock
                                .remaining(session.id())
                                .unwrap_or_default();
                            countdown_line(i18n, left)
                        }
                        None => i18n.tr("session-started"),
                    };

                    let banner = Row::new()
                        .spacing(16)
                        .push(text(session.title()).size(18).width(Length::Fill))
                        .push(text(status_line).size(18));
                    sessions = sessions.push(banner);
                }
            }
            None => {
                if self.schedule_error.is_none() {
                    sessions = sessions.push(text(i18n.tr("board-no-schedule")));
                }
            }
        }

        sessions.into()
    }

    fn view_gallery<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        if self.gallery_error {
            return text(i18n.tr("error-gallery-scan")).style(text::danger).into();
        }

        let Some(current) = self.carousel.current() else {
            return text(i18n.tr("board-no-images")).into();
        };

        let picture = container(
            image(image::Handle::from_path(current))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        let mut args = FluentArgs::new();
        args.set("current", self.carousel.current_index().unwrap_or(0) + 1);
        args.set("total", self.carousel.len());
        let position = text(i18n.tr_args("gallery-position", &args));

        let mut dots = Row::new().spacing(4);
        for index in 0..self.carousel.len() {
            let marker = if Some(index) == self.carousel.current_index() {
                "●"
            } else {
                "○"
            };
            dots = dots.push(
                button(text(marker).size(12))
                    .style(button::text)
                    .on_press(Message::JumpToImage(index)),
            );
        }

        let controls = Row::new()
            .spacing(16)
            .push(button(text("‹")).on_press(Message::PreviousImage))
            .push(position)
            .push(dots)
            .push(button(text("›")).on_press(Message::NextImage));

        Column::new()
            .spacing(8)
            .align_x(Horizontal::Center)
            .push(picture)
            .push(controls)
            .into()
    }
}

/// Formats the remaining-time line for a pending session.
fn countdown_line(i18n: &I18n, left: TimeLeft) -> String {
    if left.is_zero() {
        // Pending but under a minute away.
        return i18n.tr("session-starts-soon");
    }
    let mut args = FluentArgs::new();
    args.set("hours", left.hours);
    args.set("minutes", left.minutes);
    i18n.tr_args("session-starts-in", &args)
}
