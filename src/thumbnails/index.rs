// SPDX-License-Identifier: MPL-2.0
//! Sorted, immutable index of thumbnail cues.

use super::cue::{parse_sprite_fragment, Cue, RawCue};

/// Cues sorted ascending by start, non-overlapping, all pointing into
/// one sprite sheet.
///
/// Built once per loaded cue payload and queried on every hover or drag
/// sample, so lookups are a binary search without allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailIndex {
    sprite_url: String,
    cues: Vec<Cue>,
}

impl ThumbnailIndex {
    /// Builds the index from raw cues.
    ///
    /// The sprite URL is taken from the first cue; cues that fail to parse,
    /// have an empty or inverted interval, or overlap an earlier cue are
    /// skipped. Returns `None` when no usable cue remains.
    #[must_use]
    pub fn build(raw: &[RawCue]) -> Option<Self> {
        let (sprite_url, _) = parse_sprite_fragment(&raw.first()?.text)?;
        let sprite_url = sprite_url.to_string();

        let mut cues: Vec<Cue> = raw
            .iter()
            .filter_map(|cue| {
                let (_, rect) = parse_sprite_fragment(&cue.text)?;
                let valid = cue.start_time.is_finite()
                    && cue.end_time.is_finite()
                    && cue.start_time < cue.end_time;
                valid.then_some(Cue {
                    start: cue.start_time,
                    end: cue.end_time,
                    rect,
                })
            })
            .collect();
        cues.sort_by(|a, b| a.start.total_cmp(&b.start));

        let before = cues.len();
        let mut last_end = f64::NEG_INFINITY;
        cues.retain(|cue| {
            let keep = cue.start >= last_end;
            if keep {
                last_end = cue.end;
            }
            keep
        });
        if cues.len() < before {
            log::debug!(
                "Dropped {} overlapping thumbnail cues",
                before - cues.len()
            );
        }

        if cues.is_empty() {
            return None;
        }
        Some(Self { sprite_url, cues })
    }

    /// Returns the cue whose `[start, end)` interval contains `time`.
    #[must_use]
    pub fn lookup(&self, time: f64) -> Option<&Cue> {
        if !time.is_finite() {
            return None;
        }
        let after = self.cues.partition_point(|cue| cue.start <= time);
        let candidate = self.cues.get(after.checked_sub(1)?)?;
        candidate.contains(time).then_some(candidate)
    }

    #[must_use]
    pub fn sprite_url(&self) -> &str {
        &self.sprite_url
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn cues(&self) -> impl Iterator<Item = &Cue> {
        self.cues.iter()
    }
}
