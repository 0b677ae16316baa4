// SPDX-License-Identifier: MPL-2.0
//! Time/position model: normalized positions along linear controls.
//!
//! Everything here is pure. Invalid numeric input (`NaN` duration,
//! out-of-range pointer coordinates, zero-width containers) is clamped,
//! never reported as an error.

/// Normalized position in `[0, 1]` along a linear control.
///
/// # Example
///
/// ```
/// use player_overlay::media::Fraction;
///
/// assert_eq!(Fraction::new(1.7).value(), 1.0);
/// assert_eq!(Fraction::new(f64::NAN).value(), 0.0);
/// assert_eq!(Fraction::of(30.0, 120.0).value(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Fraction(f64);

impl Fraction {
    pub const ZERO: Fraction = Fraction(0.0);
    pub const ONE: Fraction = Fraction(1.0);

    /// Creates a fraction, clamping to `[0, 1]`. `NaN` becomes `0`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// `current / total`, or zero when `total` is not a usable duration.
    #[must_use]
    pub fn of(current: f64, total: f64) -> Self {
        match seekable_duration(total) {
            Some(total) => Self::new(current / total),
            None => Self::ZERO,
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Maps this fraction onto `duration`, or `None` if seeking is unavailable.
    #[must_use]
    pub fn to_time(self, duration: f64) -> Option<f64> {
        seekable_duration(duration).map(|d| self.0 * d)
    }

    /// Width in percent, for fill styles.
    #[must_use]
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }
}

/// Horizontal extent of a track container, in the pointer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    pub left: f64,
    pub width: f64,
}

impl TrackBounds {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// `clamp((x - left) / width, 0, 1)`. Degenerate widths yield zero.
    #[must_use]
    pub fn fraction_at(&self, x: f64) -> Fraction {
        if !self.width.is_finite() || self.width <= 0.0 || !x.is_finite() {
            return Fraction::ZERO;
        }
        Fraction::new((x - self.left) / self.width)
    }

    /// Cursor offset from the container's left edge, clamped to the container.
    #[must_use]
    pub fn offset_of(&self, x: f64) -> f64 {
        if !self.width.is_finite() || self.width <= 0.0 || !x.is_finite() {
            return 0.0;
        }
        (x - self.left).clamp(0.0, self.width)
    }
}

/// Returns the duration when it is finite and positive.
#[must_use]
pub fn seekable_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

/// Formats a time for display.
///
/// Uses `HH:MM:SS` when the media is an hour or longer, `MM:SS` otherwise,
/// so the readout keeps a constant width during playback. Unknown times
/// render as `00:00`.
#[must_use]
pub fn format_time(seconds: f64, duration: f64) -> String {
    if !seconds.is_finite() {
        return "00:00".to_string();
    }
    let total_secs = seconds.max(0.0) as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let long_form = duration.is_finite() && duration >= 3600.0;
    if long_form {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes + hours * 60, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn fraction_clamps_out_of_range_values() {
        assert_abs_diff_eq!(Fraction::new(-0.5).value(), 0.0);
        assert_abs_diff_eq!(Fraction::new(2.0).value(), 1.0);
        assert_abs_diff_eq!(Fraction::new(0.3).value(), 0.3);
    }

    #[test]
    fn fraction_of_unknown_duration_is_zero() {
        assert_eq!(Fraction::of(10.0, f64::NAN), Fraction::ZERO);
        assert_eq!(Fraction::of(10.0, 0.0), Fraction::ZERO);
        assert_eq!(Fraction::of(10.0, f64::INFINITY), Fraction::ZERO);
    }

    #[test]
    fn to_time_requires_seekable_duration() {
        assert_eq!(Fraction::new(0.5).to_time(f64::NAN), None);
        assert_eq!(Fraction::new(0.5).to_time(0.0), None);
        assert_eq!(Fraction::new(0.5).to_time(-3.0), None);
        assert_eq!(Fraction::new(0.5).to_time(100.0), Some(50.0));
    }

    #[test]
    fn fraction_at_clamps_pointer_outside_bounds() {
        let bounds = TrackBounds::new(100.0, 200.0);
        assert_eq!(bounds.fraction_at(50.0), Fraction::ZERO);
        assert_eq!(bounds.fraction_at(400.0), Fraction::ONE);
        assert_abs_diff_eq!(bounds.fraction_at(150.0).value(), 0.25);
    }

    #[test]
    fn fraction_at_handles_degenerate_width() {
        assert_eq!(TrackBounds::new(0.0, 0.0).fraction_at(10.0), Fraction::ZERO);
        assert_eq!(
            TrackBounds::new(0.0, f64::NAN).fraction_at(10.0),
            Fraction::ZERO
        );
        assert_eq!(
            TrackBounds::new(0.0, 100.0).fraction_at(f64::NAN),
            Fraction::ZERO
        );
    }

    #[test]
    fn format_time_short_form() {
        assert_eq!(format_time(0.0, 120.0), "00:00");
        assert_eq!(format_time(125.0, 600.0), "02:05");
    }

    #[test]
    fn format_time_long_form_for_hour_long_media() {
        assert_eq!(format_time(3665.0, 7200.0), "01:01:05");
        assert_eq!(format_time(65.0, 3600.0), "00:01:05");
    }

    #[test]
    fn format_time_handles_invalid_input() {
        assert_eq!(format_time(f64::NAN, 100.0), "00:00");
        assert_eq!(format_time(-10.0, 100.0), "00:00");
        assert_eq!(format_time(42.0, f64::NAN), "00:42");
    }
}
