// SPDX-License-Identifier: MPL-2.0
//! Thumbnail cue records and sprite fragment parsing.

/// A cue as delivered by the auxiliary metadata track.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCue {
    pub start_time: f64,
    pub end_time: f64,
    /// `"<spriteURL>#xywh=<x>,<y>,<w>,<h>"`
    pub text: String,
}

impl RawCue {
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            text: text.into(),
        }
    }
}

/// Rectangle of one thumbnail inside the sprite sheet, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// A parsed cue: the half-open interval `[start, end)` maps to `rect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub start: f64,
    pub end: f64,
    pub rect: SpriteRect,
}

impl Cue {
    /// Returns true if `time` falls in `[start, end)`.
    #[must_use]
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time < self.end
    }
}

const FRAGMENT_MARKER: &str = "#xywh=";

/// Splits `"<url>#xywh=x,y,w,h"` into the sprite URL and its rectangle.
///
/// Returns `None` for an empty URL, a missing fragment, or any component
/// that is not a non-negative integer.
#[must_use]
pub fn parse_sprite_fragment(text: &str) -> Option<(&str, SpriteRect)> {
    let text = text.trim();
    let marker = text.find(FRAGMENT_MARKER)?;
    let url = &text[..marker];
    if url.is_empty() {
        return None;
    }

    let mut parts = text[marker + FRAGMENT_MARKER.len()..]
        .split(',')
        .map(|p| p.trim().parse::<u32>());
    let x = parts.next()?.ok()?;
    let y = parts.next()?.ok()?;
    let w = parts.next()?.ok()?;
    let h = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some((url, SpriteRect { x, y, w, h }))
}
