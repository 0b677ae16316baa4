// SPDX-License-Identifier: MPL-2.0
//! Volume domain type for audio playback.
//!
//! This module provides a type-safe wrapper for volume values,
//! ensuring they are always within the valid range (0.0–1.0).

use crate::config::{
    DEFAULT_VOLUME, MAX_VOLUME, MIN_VOLUME, VOLUME_LOW_THRESHOLD, VOLUME_MEDIUM_THRESHOLD,
};

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use player_overlay::media::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// let too_loud = Volume::new(2.0);
/// assert_eq!(too_loud.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range. `NaN` becomes silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(MIN_VOLUME);
        }
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if the level is exactly silent.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 <= MIN_VOLUME
    }

    /// Increases volume by `step`, clamping to maximum.
    #[must_use]
    pub fn increase(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }

    /// Decreases volume by `step`, clamping to minimum.
    #[must_use]
    pub fn decrease(self, step: f32) -> Self {
        Self::new(self.0 - step)
    }

    /// Coarse level used to pick the speaker icon.
    #[must_use]
    pub fn level(self) -> VolumeLevel {
        if self.is_silent() {
            VolumeLevel::Muted
        } else if self.0 <= VOLUME_LOW_THRESHOLD {
            VolumeLevel::Low
        } else if self.0 <= VOLUME_MEDIUM_THRESHOLD {
            VolumeLevel::Medium
        } else {
            VolumeLevel::High
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

/// Speaker icon variant derived from the effective volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeLevel {
    Muted,
    Low,
    Medium,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_abs_diff_eq!(Volume::new(-0.5).value(), MIN_VOLUME);
        assert_abs_diff_eq!(Volume::new(1.5).value(), MAX_VOLUME);
        assert_abs_diff_eq!(Volume::new(0.5).value(), 0.5);
        assert_abs_diff_eq!(Volume::new(f32::NAN).value(), MIN_VOLUME);
    }

    #[test]
    fn increase_and_decrease_clamp() {
        assert_abs_diff_eq!(Volume::new(0.5).increase(0.05).value(), 0.55, epsilon = 0.001);
        assert_abs_diff_eq!(Volume::new(0.98).increase(0.05).value(), MAX_VOLUME);
        assert_abs_diff_eq!(Volume::new(0.02).decrease(0.05).value(), MIN_VOLUME);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(Volume::new(0.0).level(), VolumeLevel::Muted);
        assert_eq!(Volume::new(0.2).level(), VolumeLevel::Low);
        assert_eq!(Volume::new(0.33).level(), VolumeLevel::Low);
        assert_eq!(Volume::new(0.5).level(), VolumeLevel::Medium);
        assert_eq!(Volume::new(0.9).level(), VolumeLevel::High);
    }
}
