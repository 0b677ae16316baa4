// SPDX-License-Identifier: MPL-2.0
//! Updates pushed to the presentation layer.
//!
//! The presentation layer only receives. It never feeds state back except
//! through raw input events, so every visible change the player makes is
//! one [`PresentationUpdate`].

use crate::chrome::IndicatorKind;
use crate::media::{Fraction, VolumeLevel};
use crate::menu::PanelId;
use crate::thumbnails::PreviewFrame;
use crate::tracks::CaptionEntry;

/// Boolean state classes on the player container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Playing,
    Buffering,
    Ended,
    ControlsVisible,
    CursorHidden,
    MenuOpen,
    Scrubbing,
    CaptionsOn,
    AmbientMode,
    BoosterOn,
    TouchDevice,
}

/// Controls whose presence depends on the media or the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    CaptionsButton,
    CaptionsMenuEntry,
    QualityMenuEntry,
    BoosterButton,
}

/// Text readouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    CurrentTime,
    Duration,
    SpeedLabel,
    CaptionsStatus,
    QualityStatus,
    AmbientStatus,
}

/// Requests handed to the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delegate {
    Fullscreen,
    PictureInPicture,
    Download { url: String, file_name: String },
}

/// Hover or scrub preview above the progress track.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Horizontal center relative to the track's left edge.
    pub center_x: f64,
    pub label: String,
    pub frame: PreviewFrame,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PresentationUpdate {
    /// Named style variable, e.g. `caption-font-size` = `28px`.
    Style { name: String, value: String },
    Flag(Flag, bool),
    Visible(Control, bool),
    Text(TextSlot, String),
    /// Played portion of the progress track.
    Progress(Fraction),
    Volume { level: VolumeLevel, fraction: Fraction },
    SpeedSlider(usize),
    /// Visible menu panel, `None` when the menu is closed.
    MenuPanel(Option<PanelId>),
    CaptionsMenu {
        entries: Vec<CaptionEntry>,
        active: Option<usize>,
    },
    QualityMenu {
        labels: Vec<String>,
        active: Option<usize>,
    },
    /// Caption style inputs as they should be displayed.
    StyleForm(crate::settings::CaptionStyleForm),
    Tooltip(Option<Tooltip>),
    /// The secondary element decoded the frame at `secs`; draw it into
    /// the tooltip.
    DrawSampledFrame { secs: f64 },
    Indicator(Option<IndicatorKind>),
    Delegate(Delegate),
}

/// Receiver of presentation updates.
pub trait Presentation {
    fn apply(&mut self, update: PresentationUpdate);
}

/// Presentation that keeps every update, in order.
///
/// Hosts can use it to batch updates per frame; tests inspect it.
#[derive(Debug, Default, Clone)]
pub struct RecordingPresentation {
    pub updates: Vec<PresentationUpdate>,
}

impl RecordingPresentation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the recorded updates.
    pub fn take(&mut self) -> Vec<PresentationUpdate> {
        std::mem::take(&mut self.updates)
    }

    /// Latest value of `flag`, if it was ever set.
    #[must_use]
    pub fn flag(&self, flag: Flag) -> Option<bool> {
        self.updates.iter().rev().find_map(|u| match u {
            PresentationUpdate::Flag(f, on) if *f == flag => Some(*on),
            _ => None,
        })
    }

    #[must_use]
    pub fn visible(&self, control: Control) -> Option<bool> {
        self.updates.iter().rev().find_map(|u| match u {
            PresentationUpdate::Visible(c, on) if *c == control => Some(*on),
            _ => None,
        })
    }

    #[must_use]
    pub fn text(&self, slot: TextSlot) -> Option<&str> {
        self.updates.iter().rev().find_map(|u| match u {
            PresentationUpdate::Text(s, text) if *s == slot => Some(text.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn style(&self, name: &str) -> Option<&str> {
        self.updates.iter().rev().find_map(|u| match u {
            PresentationUpdate::Style { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn delegates(&self) -> Vec<&Delegate> {
        self.updates
            .iter()
            .filter_map(|u| match u {
                PresentationUpdate::Delegate(d) => Some(d),
                _ => None,
            })
            .collect()
    }

    /// Latest tooltip state; `Some(None)` means it was hidden.
    #[must_use]
    pub fn tooltip(&self) -> Option<Option<&Tooltip>> {
        self.updates.iter().rev().find_map(|u| match u {
            PresentationUpdate::Tooltip(t) => Some(t.as_ref()),
            _ => None,
        })
    }
}

impl Presentation for RecordingPresentation {
    fn apply(&mut self, update: PresentationUpdate) {
        self.updates.push(update);
    }
}

/// File name for a download of `url`: its last path segment without query
/// or fragment, or `video.mp4` when there is none.
#[must_use]
pub fn download_file_name(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "video.mp4".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_returns_latest_values() {
        let mut view = RecordingPresentation::new();
        view.apply(PresentationUpdate::Flag(Flag::Playing, true));
        view.apply(PresentationUpdate::Text(TextSlot::SpeedLabel, "1.0×".into()));
        view.apply(PresentationUpdate::Flag(Flag::Playing, false));
        assert_eq!(view.flag(Flag::Playing), Some(false));
        assert_eq!(view.flag(Flag::MenuOpen), None);
        assert_eq!(view.text(TextSlot::SpeedLabel), Some("1.0×"));
        assert_eq!(view.take().len(), 3);
        assert!(view.updates.is_empty());
    }

    #[test]
    fn download_name_strips_query_and_path() {
        assert_eq!(
            download_file_name("https://cdn.test/media/clip-720.mp4?token=abc"),
            "clip-720.mp4"
        );
        assert_eq!(download_file_name("movie.webm#t=10"), "movie.webm");
        assert_eq!(download_file_name("https://cdn.test/media/"), "video.mp4");
        assert_eq!(download_file_name(""), "video.mp4");
    }
}
