// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and resolution.

use iced::Theme;
use serde::{Deserialize, Serialize};

/// User-selectable theme mode, persisted in the config file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the operating system preference.
    #[default]
    System,
}

impl ThemeMode {
    /// All modes in display order.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Resolves the mode to a concrete Iced theme.
    ///
    /// `System` asks the OS; detection failures fall back to dark, which
    /// suits an always-on board display.
    #[must_use]
    pub fn resolve(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => {
                if let Ok(dark_light::Mode::Light) = dark_light::detect() {
                    Theme::Light
                } else {
                    Theme::Dark
                }
            }
        }
    }

    /// Returns the i18n key for this mode's label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }
}
