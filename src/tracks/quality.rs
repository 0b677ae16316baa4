// SPDX-License-Identifier: MPL-2.0
//! Quality source selection with seamless switching.

use super::selection::TrackSelection;
use crate::media::{MediaResource, QualitySource};

/// Playback position captured before a source swap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestorePoint {
    pub time: f64,
    pub paused: bool,
}

impl RestorePoint {
    fn apply(self, media: &mut dyn MediaResource) {
        media.set_current_time(self.time);
        if !self.paused {
            media.play();
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QualityManager {
    sources: Vec<QualitySource>,
    selection: TrackSelection,
    pending_restore: Option<RestorePoint>,
}

impl QualityManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sources(&self) -> &[QualitySource] {
        &self.sources
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.selection.active()
    }

    /// The quality entry is only worth showing with a real choice.
    #[must_use]
    pub fn menu_visible(&self) -> bool {
        self.sources.len() > 1
    }

    /// Status text: the active label, or `Auto` when the playing source
    /// matches none of the declared ones.
    #[must_use]
    pub fn status_label(&self) -> String {
        self.active()
            .and_then(|index| self.sources.get(index))
            .map_or_else(|| "Auto".to_string(), QualitySource::display_label)
    }

    #[must_use]
    pub fn pending_restore(&self) -> Option<RestorePoint> {
        self.pending_restore
    }

    /// Re-reads the declared sources and derives the active one from the
    /// source the media is actually playing.
    pub fn refresh(&mut self, media: &dyn MediaResource) {
        self.sources = media.quality_sources();
        let active = media
            .current_source()
            .and_then(|current| self.sources.iter().position(|s| s.matches(&current)));
        self.selection.revalidate(active);
    }

    /// Switches to source `index`, keeping position and play state.
    ///
    /// The reload is not awaited: position and play state are restored
    /// right away and once more on the next metadata-ready event.
    /// Returns false for an unknown index or the source already playing.
    pub fn select(&mut self, index: usize, media: &mut dyn MediaResource) -> bool {
        let Some(source) = self.sources.get(index) else {
            log::warn!("Ignoring selection of unknown quality {}", index);
            return false;
        };
        if media
            .current_source()
            .is_some_and(|current| source.matches(&current))
        {
            return false;
        }

        let restore = RestorePoint {
            time: media.current_time(),
            paused: media.paused(),
        };
        let url = source.url.clone();
        log::info!("Switching quality to {}", source.display_label());

        media.set_source(&url);
        media.load();
        restore.apply(media);

        self.pending_restore = Some(restore);
        self.selection.set(Some(index));
        true
    }

    /// Applies a pending restore once the new source reports metadata.
    pub fn on_metadata_ready(&mut self, media: &mut dyn MediaResource) -> bool {
        match self.pending_restore.take() {
            Some(restore) => {
                restore.apply(media);
                true
            }
            None => false,
        }
    }
}
