// SPDX-License-Identifier: MPL-2.0
//! Default values and valid ranges for configuration settings.

/// Cadence of the countdown recomputation tick, in seconds.
pub const DEFAULT_COUNTDOWN_TICK_SECS: u64 = 60;

/// Default slideshow auto-advance interval, in seconds.
pub const DEFAULT_SLIDESHOW_INTERVAL_SECS: u32 = 8;

/// Minimum slideshow auto-advance interval, in seconds.
pub const MIN_SLIDESHOW_INTERVAL_SECS: u32 = 2;

/// Maximum slideshow auto-advance interval, in seconds.
pub const MAX_SLIDESHOW_INTERVAL_SECS: u32 = 120;

/// Whether the slideshow auto-advances out of the box.
pub const DEFAULT_SLIDESHOW_ENABLED: bool = false;
