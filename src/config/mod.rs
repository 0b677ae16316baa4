// SPDX-License-Identifier: MPL-2.0
//! This module handles the player's tunable configuration, loaded from and
//! saved to a `settings.toml` file.
//!
//! User preferences edited through the settings menu (caption style, volume,
//! speed) are not stored here; they go through [`crate::settings`].
//!
//! # Examples
//!
//! ```no_run
//! use player_overlay::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.seek_step_secs = Some(15.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.seek_step_secs, Some(15.0));
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub seek_step_secs: Option<f64>,
    #[serde(default)]
    pub long_seek_step_secs: Option<f64>,
    #[serde(default)]
    pub volume_step: Option<f32>,
    #[serde(default)]
    pub booster_gain: Option<f32>,
    #[serde(default)]
    pub controls_timeout_secs: Option<u32>,
    #[serde(default)]
    pub indicator_ms: Option<u64>,
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
    #[serde(default)]
    pub storage_key_prefix: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seek_step_secs: Some(DEFAULT_SEEK_STEP_SECS),
            long_seek_step_secs: Some(DEFAULT_LONG_SEEK_STEP_SECS),
            volume_step: Some(VOLUME_STEP),
            booster_gain: Some(DEFAULT_BOOSTER_GAIN),
            controls_timeout_secs: Some(DEFAULT_CONTROLS_TIMEOUT_SECS),
            indicator_ms: Some(DEFAULT_INDICATOR_MS),
            diagnostics_capacity: Some(DEFAULT_DIAGNOSTICS_CAPACITY),
            storage_key_prefix: None,
        }
    }
}

impl Config {
    /// Arrow-key seek step; non-positive or non-finite values fall back to the default.
    #[must_use]
    pub fn seek_step(&self) -> f64 {
        positive_or(self.seek_step_secs, DEFAULT_SEEK_STEP_SECS)
    }

    /// Seek step for `j`/`l` and double-click zones.
    #[must_use]
    pub fn long_seek_step(&self) -> f64 {
        positive_or(self.long_seek_step_secs, DEFAULT_LONG_SEEK_STEP_SECS)
    }

    #[must_use]
    pub fn volume_step(&self) -> f32 {
        self.volume_step
            .filter(|s| s.is_finite() && *s > 0.0 && *s <= MAX_VOLUME)
            .unwrap_or(VOLUME_STEP)
    }

    #[must_use]
    pub fn booster_gain(&self) -> f32 {
        self.booster_gain
            .filter(|g| g.is_finite() && *g >= NEUTRAL_GAIN)
            .map_or(DEFAULT_BOOSTER_GAIN, |g| g.min(MAX_BOOSTER_GAIN))
    }

    #[must_use]
    pub fn controls_timeout_secs(&self) -> u32 {
        self.controls_timeout_secs
            .unwrap_or(DEFAULT_CONTROLS_TIMEOUT_SECS)
    }

    #[must_use]
    pub fn indicator_duration(&self) -> Duration {
        Duration::from_millis(self.indicator_ms.unwrap_or(DEFAULT_INDICATOR_MS))
    }

    #[must_use]
    pub fn diagnostics_capacity(&self) -> usize {
        self.diagnostics_capacity
            .unwrap_or(DEFAULT_DIAGNOSTICS_CAPACITY)
    }

    /// Prefix used to namespace every persisted key.
    #[must_use]
    pub fn storage_key_prefix(&self) -> &str {
        self.storage_key_prefix
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_STORAGE_KEY_PREFIX)
    }
}

fn positive_or(value: Option<f64>, fallback: f64) -> f64 {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(fallback)
}

fn get_default_config_path() -> Option<PathBuf> {
    crate::paths::get_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Ignoring invalid config at {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
