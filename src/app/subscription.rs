// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Both periodic ticks are conditional: the subscription is only returned
//! while it has work to drive, and dropping back to `Subscription::none()`
//! releases the recurring callback. The countdown clock itself never owns
//! a timer; it is fed through these subscriptions.

use super::{Message, Screen};
use crate::config::DEFAULT_COUNTDOWN_TICK_SECS;
use crate::ui::board;
use crate::ui::state::SlideshowInterval;
use iced::{keyboard, time, Subscription};
use std::time::Duration;

/// Creates the periodic countdown tick.
///
/// Active only while at least one session is still counting down; once
/// every session has elapsed there is nothing left to recompute.
pub fn create_countdown_subscription(has_pending: bool) -> Subscription<Message> {
    if has_pending {
        time::every(Duration::from_secs(DEFAULT_COUNTDOWN_TICK_SECS))
            .map(|_| Message::CountdownTick)
    } else {
        Subscription::none()
    }
}

/// Creates the slideshow auto-advance tick.
///
/// Active only on the board screen, when auto-advance is enabled and the
/// gallery has at least two images to rotate through.
pub fn create_slideshow_subscription(
    screen: Screen,
    enabled: bool,
    can_rotate: bool,
    interval: SlideshowInterval,
) -> Subscription<Message> {
    if screen == Screen::Board && enabled && can_rotate {
        time::every(interval.as_duration()).map(|_| Message::SlideshowTick)
    } else {
        Subscription::none()
    }
}

/// Creates the keyboard navigation subscription for the board screen.
///
/// Left/Right step through the gallery; Home and End jump to the first
/// and last image.
pub fn create_keyboard_subscription(screen: Screen) -> Subscription<Message> {
    if screen != Screen::Board {
        return Subscription::none();
    }

    keyboard::listen().filter_map(|event| {
        use iced::keyboard::key::{Key, Named};
        use iced::keyboard::Event;
        let Event::KeyPressed { key, .. } = event else {
            return None;
        };
        match key.as_ref() {
            Key::Named(Named::ArrowRight) => Some(Message::Board(board::Message::NextImage)),
            Key::Named(Named::ArrowLeft) => Some(Message::Board(board::Message::PreviousImage)),
            Key::Named(Named::Home) => Some(Message::Board(board::Message::FirstImage)),
            Key::Named(Named::End) => Some(Message::Board(board::Message::LastImage)),
            _ => None,
        }
    })
}
