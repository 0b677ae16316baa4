// SPDX-License-Identifier: MPL-2.0
//! Controls chrome visibility and the transient action indicator.
//!
//! Time is passed in explicitly (`now`) so the host drives deadlines from
//! its own clock through `Tick` events.

use crate::config::{
    DEFAULT_CONTROLS_TIMEOUT_SECS, MAX_CONTROLS_TIMEOUT_SECS, MIN_CONTROLS_TIMEOUT_SECS,
};
use std::time::{Duration, Instant};

/// Kind of pointing device that produced an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

/// Auto-hide delay of the controls chrome, in seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–30 seconds).
///
/// # Example
///
/// ```
/// use player_overlay::chrome::ControlsTimeout;
///
/// let timeout = ControlsTimeout::new(5);
/// assert_eq!(timeout.value(), 5);
///
/// // Values outside range are clamped
/// assert_eq!(ControlsTimeout::new(100).value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsTimeout(u32);

impl ControlsTimeout {
    /// Creates a new timeout value, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_CONTROLS_TIMEOUT_SECS, MAX_CONTROLS_TIMEOUT_SECS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for ControlsTimeout {
    fn default() -> Self {
        Self(DEFAULT_CONTROLS_TIMEOUT_SECS)
    }
}

/// State that keeps the chrome on screen when a non-forced hide fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HideGuard {
    pub scrubbing: bool,
    pub menu_open: bool,
    pub paused: bool,
}

impl HideGuard {
    #[must_use]
    pub fn blocks_hide(self) -> bool {
        self.scrubbing || self.menu_open || self.paused
    }
}

/// Visibility of the controls bar and the mouse cursor.
#[derive(Debug, Clone)]
pub struct Chrome {
    timeout: ControlsTimeout,
    visible: bool,
    cursor_hidden: bool,
    hide_at: Option<Instant>,
}

impl Chrome {
    #[must_use]
    pub fn new(timeout: ControlsTimeout) -> Self {
        Self {
            timeout,
            visible: true,
            cursor_hidden: false,
            hide_at: None,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    #[must_use]
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    /// Shows the chrome and, while playing, arms the auto-hide deadline.
    pub fn show(&mut self, now: Instant, paused: bool) {
        self.visible = true;
        self.cursor_hidden = false;
        self.hide_at = (!paused).then(|| now + self.timeout.as_duration());
    }

    /// Hides the chrome unless `guard` blocks it. `force` bypasses the guard.
    ///
    /// Returns true if the chrome was hidden.
    pub fn hide(&mut self, guard: HideGuard, force: bool, pointer: PointerKind) -> bool {
        self.hide_at = None;
        if !force && guard.blocks_hide() {
            return false;
        }
        self.visible = false;
        self.cursor_hidden = pointer == PointerKind::Mouse;
        true
    }

    /// Fires the auto-hide deadline if it has passed.
    ///
    /// Returns true if the chrome was hidden.
    pub fn tick(&mut self, now: Instant, guard: HideGuard, pointer: PointerKind) -> bool {
        match self.hide_at {
            Some(deadline) if deadline <= now => self.hide(guard, false, pointer),
            _ => false,
        }
    }
}

impl Default for Chrome {
    fn default() -> Self {
        Self::new(ControlsTimeout::default())
    }
}

/// Icon shown briefly in the middle of the player after a keyboard action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    SeekBackward,
    SeekForward,
    VolumeUp,
    VolumeDown,
}

#[derive(Debug, Clone)]
pub struct Indicator {
    duration: Duration,
    active: Option<(IndicatorKind, Instant)>,
}

impl Indicator {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: None,
        }
    }

    /// Shows `kind`, restarting the display period.
    pub fn trigger(&mut self, kind: IndicatorKind, now: Instant) {
        self.active = Some((kind, now + self.duration));
    }

    #[must_use]
    pub fn current(&self) -> Option<IndicatorKind> {
        self.active.map(|(kind, _)| kind)
    }

    /// Returns true if the indicator expired on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.active {
            Some((_, until)) if until <= now => {
                self.active = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYING: HideGuard = HideGuard {
        scrubbing: false,
        menu_open: false,
        paused: false,
    };

    #[test]
    fn timeout_clamps_to_valid_range() {
        assert_eq!(ControlsTimeout::new(0).value(), MIN_CONTROLS_TIMEOUT_SECS);
        assert_eq!(ControlsTimeout::new(100).value(), MAX_CONTROLS_TIMEOUT_SECS);
        assert_eq!(ControlsTimeout::new(5).as_duration(), Duration::from_secs(5));
    }

    #[test]
    fn show_while_playing_arms_deadline() {
        let now = Instant::now();
        let mut chrome = Chrome::new(ControlsTimeout::new(3));
        chrome.show(now, false);
        assert_eq!(chrome.hide_deadline(), Some(now + Duration::from_secs(3)));

        assert!(!chrome.tick(now + Duration::from_secs(2), PLAYING, PointerKind::Mouse));
        assert!(chrome.tick(now + Duration::from_secs(3), PLAYING, PointerKind::Mouse));
        assert!(!chrome.is_visible());
        assert!(chrome.cursor_hidden());
    }

    #[test]
    fn show_while_paused_never_auto_hides() {
        let now = Instant::now();
        let mut chrome = Chrome::default();
        chrome.show(now, true);
        assert!(chrome.hide_deadline().is_none());
        assert!(!chrome.tick(now + Duration::from_secs(60), PLAYING, PointerKind::Mouse));
        assert!(chrome.is_visible());
    }

    #[test]
    fn guard_blocks_unforced_hide() {
        let now = Instant::now();
        let mut chrome = Chrome::default();
        chrome.show(now, false);
        let menu_open = HideGuard {
            menu_open: true,
            ..PLAYING
        };
        assert!(!chrome.tick(now + Duration::from_secs(10), menu_open, PointerKind::Mouse));
        assert!(chrome.is_visible());
        assert!(chrome.hide_deadline().is_none());

        let scrubbing = HideGuard {
            scrubbing: true,
            ..PLAYING
        };
        assert!(chrome.hide(scrubbing, true, PointerKind::Touch));
        assert!(!chrome.is_visible());
        assert!(!chrome.cursor_hidden());
    }

    #[test]
    fn indicator_rearms_on_trigger() {
        let now = Instant::now();
        let mut indicator = Indicator::new(Duration::from_millis(600));
        indicator.trigger(IndicatorKind::SeekForward, now);
        indicator.trigger(IndicatorKind::VolumeUp, now + Duration::from_millis(500));
        assert!(!indicator.tick(now + Duration::from_millis(700)));
        assert_eq!(indicator.current(), Some(IndicatorKind::VolumeUp));
        assert!(indicator.tick(now + Duration::from_millis(1100)));
        assert!(indicator.current().is_none());
    }
}
