// SPDX-License-Identifier: MPL-2.0
//! Hover preview: time label, thumbnail source and tooltip placement.

use super::cue::SpriteRect;
use super::index::ThumbnailIndex;
use crate::media::{format_time, Fraction};

/// Where the preview image comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewFrame {
    /// Draw `rect` out of the sprite sheet at `sprite_url`.
    Sprite { sprite_url: String, rect: SpriteRect },
    /// No cue covers the time; the caller seeks the hidden secondary
    /// element to `secs` and draws once the frame is reported ready.
    Sample { secs: f64 },
}

/// Result of a preview lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub time_secs: f64,
    pub label: String,
    pub frame: PreviewFrame,
}

impl Preview {
    /// Sprite rectangle when a cue matched.
    #[must_use]
    pub fn rect(&self) -> Option<SpriteRect> {
        match &self.frame {
            PreviewFrame::Sprite { rect, .. } => Some(*rect),
            PreviewFrame::Sample { .. } => None,
        }
    }
}

/// Computes the preview for `fraction` along the timeline.
///
/// Returns `None` while the duration is unknown: there is no meaningful
/// time to show.
#[must_use]
pub fn preview_at(
    fraction: Fraction,
    duration: f64,
    index: Option<&ThumbnailIndex>,
) -> Option<Preview> {
    let time_secs = fraction.to_time(duration)?;
    let frame = match index.and_then(|index| index.lookup(time_secs).map(|cue| (index, cue))) {
        Some((index, cue)) => PreviewFrame::Sprite {
            sprite_url: index.sprite_url().to_string(),
            rect: cue.rect,
        },
        None => PreviewFrame::Sample { secs: time_secs },
    };

    Some(Preview {
        time_secs,
        label: format_time(time_secs, duration),
        frame,
    })
}

/// Horizontal center of the tooltip, relative to the track's left edge.
///
/// The tooltip box never leaves `[0, track_width]` regardless of where the
/// cursor is. A tooltip wider than the track is centered on it.
#[must_use]
pub fn tooltip_center(cursor_offset: f64, track_width: f64, tooltip_width: f64) -> f64 {
    if !track_width.is_finite() || track_width <= 0.0 {
        return 0.0;
    }
    let half = if tooltip_width.is_finite() {
        (tooltip_width / 2.0).max(0.0)
    } else {
        0.0
    };
    if half * 2.0 >= track_width {
        return track_width / 2.0;
    }
    let cursor = if cursor_offset.is_finite() {
        cursor_offset
    } else {
        0.0
    };
    cursor.clamp(half, track_width - half)
}
