// SPDX-License-Identifier: MPL-2.0
//! Playback speed domain type.
//!
//! Unlike a free-form rate, the overlay only ever applies one of the
//! preset speeds, so this newtype can only be built from a preset.

use crate::config::{DEFAULT_PLAYBACK_SPEED, PLAYBACK_SPEED_PRESETS};

/// Playback speed, guaranteed to be one of [`PLAYBACK_SPEED_PRESETS`].
///
/// # Example
///
/// ```
/// use player_overlay::media::PlaybackSpeed;
///
/// let speed = PlaybackSpeed::from_preset(1.25).unwrap();
/// assert_eq!(speed.label(), "1.25×");
///
/// // Values that are not presets are rejected
/// assert!(PlaybackSpeed::from_preset(1.1).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed {
    index: usize,
}

impl PlaybackSpeed {
    /// Returns the preset equal to `speed`, if any.
    #[must_use]
    pub fn from_preset(speed: f64) -> Option<Self> {
        PLAYBACK_SPEED_PRESETS
            .iter()
            .position(|&s| (s - speed).abs() < 1e-9)
            .map(|index| Self { index })
    }

    /// Speed at slider position `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < PLAYBACK_SPEED_PRESETS.len()).then_some(Self { index })
    }

    /// Parses a persisted speed, accepting only presets.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .and_then(Self::from_preset)
    }

    /// Returns the speed value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        PLAYBACK_SPEED_PRESETS[self.index]
    }

    /// Position of this speed in the preset list (slider value).
    #[must_use]
    pub fn preset_index(self) -> usize {
        self.index
    }

    /// Moves `direction` presets up or down, clamping at both ends.
    #[must_use]
    pub fn step(self, direction: i32) -> Self {
        let last = PLAYBACK_SPEED_PRESETS.len() as i64 - 1;
        let index = (self.index as i64 + i64::from(direction)).clamp(0, last);
        Self {
            index: index as usize,
        }
    }

    /// Display label: `1.0×` for whole speeds, `1.25×` otherwise.
    #[must_use]
    pub fn label(self) -> String {
        let speed = self.value();
        if speed.fract() == 0.0 {
            format!("{:.1}×", speed)
        } else {
            format!("{}×", speed)
        }
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.index == PLAYBACK_SPEED_PRESETS.len() - 1
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self::from_preset(DEFAULT_PLAYBACK_SPEED).unwrap_or(Self { index: 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_is_normal_speed() {
        assert_abs_diff_eq!(PlaybackSpeed::default().value(), 1.0);
    }

    #[test]
    fn only_presets_are_accepted() {
        assert!(PlaybackSpeed::from_preset(0.75).is_some());
        assert!(PlaybackSpeed::from_preset(3.0).is_none());
        assert!(PlaybackSpeed::from_preset(f64::NAN).is_none());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(PlaybackSpeed::parse("2").map(PlaybackSpeed::value), Some(2.0));
        assert!(PlaybackSpeed::parse("fast").is_none());
        assert!(PlaybackSpeed::parse("").is_none());
    }

    #[test]
    fn slider_index_maps_to_presets() {
        assert_abs_diff_eq!(PlaybackSpeed::from_index(0).unwrap().value(), 0.5);
        assert_eq!(PlaybackSpeed::from_index(3).unwrap().preset_index(), 3);
        assert!(PlaybackSpeed::from_index(PLAYBACK_SPEED_PRESETS.len()).is_none());
    }

    #[test]
    fn step_clamps_at_ends() {
        let slowest = PlaybackSpeed::from_preset(0.5).unwrap();
        assert!(slowest.step(-1).is_min());
        let fastest = PlaybackSpeed::from_preset(8.0).unwrap();
        assert!(fastest.step(1).is_max());
        assert_abs_diff_eq!(PlaybackSpeed::default().step(1).value(), 1.25);
    }

    #[test]
    fn label_formats_whole_and_fractional_speeds() {
        assert_eq!(PlaybackSpeed::from_preset(1.0).unwrap().label(), "1.0×");
        assert_eq!(PlaybackSpeed::from_preset(0.75).unwrap().label(), "0.75×");
        assert_eq!(PlaybackSpeed::from_preset(8.0).unwrap().label(), "8.0×");
    }
}
