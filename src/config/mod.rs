// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[board]` - Gallery sorting and slideshow settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_MARQUEE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_marquee::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedMarquee";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_MARQUEE_CONFIG_DIR";

/// Gallery file sorting order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Board display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardConfig {
    /// Gallery file sorting order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Whether the gallery auto-advances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slideshow_enabled: Option<bool>,

    /// Auto-advance interval in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slideshow_interval_secs: Option<u32>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            sort_order: Some(SortOrder::default()),
            slideshow_enabled: Some(DEFAULT_SLIDESHOW_ENABLED),
            slideshow_interval_secs: Some(DEFAULT_SLIDESHOW_INTERVAL_SECS),
        }
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub board: BoardConfig,
}

/// Returns the config file path, honoring the `ICED_MARQUEE_CONFIG_DIR`
/// environment variable before falling back to the platform default.
fn config_file_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults when no file exists
/// or the file cannot be read.
pub fn load() -> Config {
    config_file_path()
        .filter(|path| path.exists())
        .and_then(|path| load_from_path(&path).ok())
        .unwrap_or_default()
}

/// Persists the configuration to the resolved config path.
///
/// # Errors
///
/// Returns an error if the file or its parent directories cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = config_file_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from an explicit path.
///
/// Unknown keys and invalid TOML degrade to defaults; only an unreadable
/// file is an error.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Saves the configuration to an explicit path, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
