// SPDX-License-Identifier: MPL-2.0
//! Preview thumbnails for the progress track.
//!
//! The index is built lazily: the first hover after a source change asks
//! the media for its metadata cues. If they have not arrived yet the lookup
//! simply has no sprite, and the index is built when
//! [`MediaEvent::CuesLoaded`](crate::media::MediaEvent::CuesLoaded) comes in.

mod cue;
mod index;
mod preview;

pub use cue::{parse_sprite_fragment, Cue, RawCue, SpriteRect};
pub use index::ThumbnailIndex;
pub use preview::{preview_at, tooltip_center, Preview, PreviewFrame};

use crate::media::{CueAvailability, MediaResource};

/// Lifecycle of the thumbnail index for the current source.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Thumbnails {
    /// Nothing requested since the last source change.
    #[default]
    Unloaded,
    /// Cues were requested and are still loading.
    Pending,
    Ready(ThumbnailIndex),
    /// The source has no usable thumbnail cues.
    Unavailable,
}

impl Thumbnails {
    /// Returns the index, requesting the cues on first use.
    ///
    /// Never blocks: while cues are pending this returns `None`.
    pub fn ensure(&mut self, media: &mut dyn MediaResource) -> Option<&ThumbnailIndex> {
        if matches!(self, Thumbnails::Unloaded) {
            *self = match media.metadata_cues() {
                CueAvailability::Ready(raw) => Self::from_cues(&raw),
                CueAvailability::Pending => Thumbnails::Pending,
                CueAvailability::Absent => Thumbnails::Unavailable,
            };
        }
        self.index()
    }

    /// Builds the index from cues that finished loading.
    pub fn on_cues_loaded(&mut self, raw: &[RawCue]) {
        *self = Self::from_cues(raw);
    }

    /// Forgets the index; the next [`ensure`](Self::ensure) reloads it.
    pub fn clear(&mut self) {
        *self = Thumbnails::Unloaded;
    }

    #[must_use]
    pub fn index(&self) -> Option<&ThumbnailIndex> {
        match self {
            Thumbnails::Ready(index) => Some(index),
            _ => None,
        }
    }

    fn from_cues(raw: &[RawCue]) -> Self {
        match ThumbnailIndex::build(raw) {
            Some(index) => {
                log::debug!("Thumbnail index built with {} cues", index.len());
                Thumbnails::Ready(index)
            }
            None => {
                log::debug!("No usable thumbnail cues in {} raw cues", raw.len());
                Thumbnails::Unavailable
            }
        }
    }
}
