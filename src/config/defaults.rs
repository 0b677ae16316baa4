// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the player overlay. Constants are organized by category.
//!
//! # Categories
//!
//! - **Seek**: Keyboard and double-click seek steps
//! - **Volume**: Volume bounds, step and level thresholds
//! - **Speed**: Playback speed presets
//! - **Chrome**: Controls auto-hide and indicator timing
//! - **Booster**: Gain applied while the volume booster is on
//! - **Storage**: Persisted keys and caption style defaults
//! - **Diagnostics**: Action log capacity

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Seek step for arrow keys (in seconds).
pub const DEFAULT_SEEK_STEP_SECS: f64 = 5.0;

/// Seek step for `j`/`l` and double-click zones (in seconds).
pub const DEFAULT_LONG_SEEK_STEP_SECS: f64 = 10.0;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume adjustment step per key press (5%).
pub const VOLUME_STEP: f32 = 0.05;

/// Levels at or below this are presented as "low".
pub const VOLUME_LOW_THRESHOLD: f32 = 0.33;

/// Levels at or below this are presented as "medium"; above is "high".
pub const VOLUME_MEDIUM_THRESHOLD: f32 = 0.66;

// ==========================================================================
// Playback Speed Defaults
// ==========================================================================

/// Accepted playback speeds, ascending.
pub const PLAYBACK_SPEED_PRESETS: [f64; 8] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0, 4.0, 8.0];

/// Speed used when nothing valid is persisted.
pub const DEFAULT_PLAYBACK_SPEED: f64 = 1.0;

// ==========================================================================
// Chrome/Timeout Defaults
// ==========================================================================

/// Default auto-hide timeout for the controls chrome (in seconds).
pub const DEFAULT_CONTROLS_TIMEOUT_SECS: u32 = 3;

/// Minimum controls timeout (in seconds).
pub const MIN_CONTROLS_TIMEOUT_SECS: u32 = 1;

/// Maximum controls timeout (in seconds).
pub const MAX_CONTROLS_TIMEOUT_SECS: u32 = 30;

/// How long the seek/volume indicator stays visible (in milliseconds).
pub const DEFAULT_INDICATOR_MS: u64 = 600;

// ==========================================================================
// Booster Defaults
// ==========================================================================

/// Gain applied while the booster is active (2.0 = +6 dB).
pub const DEFAULT_BOOSTER_GAIN: f32 = 2.0;

/// Gain applied while the booster is inactive.
pub const NEUTRAL_GAIN: f32 = 1.0;

/// Upper bound accepted from configuration.
pub const MAX_BOOSTER_GAIN: f32 = 4.0;

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// Prefix of every key written to the persistent store.
pub const DEFAULT_STORAGE_KEY_PREFIX: &str = "plr";

/// Setting key for the accent color.
pub const PRIMARY_COLOR_KEY: &str = "primary-color";

/// Setting key for the caption font family.
pub const CAPTION_FONT_FAMILY_KEY: &str = "caption-font-family";

/// Setting key for the caption font size.
pub const CAPTION_FONT_SIZE_KEY: &str = "caption-font-size";

/// Setting key for the caption text color.
pub const CAPTION_FONT_COLOR_KEY: &str = "caption-font-color";

/// Setting key for the composite caption background (color + opacity).
pub const CAPTION_BG_COLOR_KEY: &str = "caption-bg-color";

/// Setting key for ambient mode.
pub const AMBIENT_MODE_KEY: &str = "ambient-mode";

/// Default settings, merged under whatever was persisted.
pub const DEFAULT_SETTINGS: [(&str, &str); 6] = [
    (PRIMARY_COLOR_KEY, "#ff4081"),
    (CAPTION_FONT_FAMILY_KEY, "Arial"),
    (CAPTION_FONT_SIZE_KEY, "22px"),
    (CAPTION_FONT_COLOR_KEY, "#ffffff"),
    (CAPTION_BG_COLOR_KEY, "rgba(0, 0, 0, 0.75)"),
    (AMBIENT_MODE_KEY, "false"),
];

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of actions kept in the diagnostics log.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 500;

/// Minimum diagnostics log capacity.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = 50;

/// Maximum diagnostics log capacity.
pub const MAX_DIAGNOSTICS_CAPACITY: usize = 5000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SEEK_STEP_SECS > 0.0);
    assert!(DEFAULT_LONG_SEEK_STEP_SECS >= DEFAULT_SEEK_STEP_SECS);

    assert!(MIN_VOLUME < MAX_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(VOLUME_LOW_THRESHOLD < VOLUME_MEDIUM_THRESHOLD);

    assert!(MIN_CONTROLS_TIMEOUT_SECS > 0);
    assert!(MAX_CONTROLS_TIMEOUT_SECS >= MIN_CONTROLS_TIMEOUT_SECS);
    assert!(DEFAULT_CONTROLS_TIMEOUT_SECS >= MIN_CONTROLS_TIMEOUT_SECS);
    assert!(DEFAULT_CONTROLS_TIMEOUT_SECS <= MAX_CONTROLS_TIMEOUT_SECS);

    assert!(DEFAULT_BOOSTER_GAIN > NEUTRAL_GAIN);
    assert!(DEFAULT_BOOSTER_GAIN <= MAX_BOOSTER_GAIN);

    assert!(MIN_DIAGNOSTICS_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY <= MAX_DIAGNOSTICS_CAPACITY);
};
