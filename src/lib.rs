// SPDX-License-Identifier: MPL-2.0
//! `iced_marquee` is a small event board built with the Iced GUI framework.
//!
//! It rotates through a gallery of images with wrap-around navigation and
//! shows live countdowns for scheduled sessions, and demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_marquee/0.2.0")]

pub mod app;
pub mod carousel;
pub mod config;
pub mod countdown;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod schedule;
pub mod ui;
