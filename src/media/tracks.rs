// SPDX-License-Identifier: MPL-2.0
//! Text track and quality source descriptions.

/// Kind of a text track as declared by the media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    Subtitles,
    Captions,
    Descriptions,
    Chapters,
    /// Machine-readable cues (thumbnail sprites); never offered as captions.
    Metadata,
}

impl TrackKind {
    /// Returns true if the track can be chosen from the captions menu.
    #[must_use]
    pub fn is_selectable(self) -> bool {
        !matches!(self, TrackKind::Metadata)
    }
}

/// Rendering mode of a text track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackMode {
    /// Cues are not loaded.
    Disabled,
    /// Cues are loaded but not rendered.
    Hidden,
    /// Cues are rendered over the media.
    Showing,
}

/// One entry of the externally mutable track list.
#[derive(Debug, Clone, PartialEq)]
pub struct TextTrack {
    pub label: String,
    pub kind: TrackKind,
    pub mode: TrackMode,
}

impl TextTrack {
    pub fn new(label: impl Into<String>, kind: TrackKind) -> Self {
        Self {
            label: label.into(),
            kind,
            mode: TrackMode::Disabled,
        }
    }

    #[must_use]
    pub fn identity(&self) -> TrackIdentity {
        TrackIdentity {
            label: self.label.clone(),
            kind: self.kind,
        }
    }
}

/// What a track "is", independent of its current position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackIdentity {
    pub label: String,
    pub kind: TrackKind,
}

/// Ordered, externally mutable list of text tracks.
///
/// Structural changes (add/remove) are announced through
/// [`MediaEvent::TrackListChanged`](super::MediaEvent::TrackListChanged).
pub trait TrackList {
    fn len(&self) -> usize;
    fn track(&self, index: usize) -> Option<TextTrack>;
    fn set_mode(&mut self, index: usize, mode: TrackMode);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TrackList for Vec<TextTrack> {
    fn len(&self) -> usize {
        <[TextTrack]>::len(self)
    }

    fn track(&self, index: usize) -> Option<TextTrack> {
        self.get(index).cloned()
    }

    fn set_mode(&mut self, index: usize, mode: TrackMode) {
        if let Some(track) = self.get_mut(index) {
            track.mode = mode;
        }
    }
}

/// One selectable quality level of the media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualitySource {
    pub url: String,
    pub label: Option<String>,
    /// Vertical resolution, used as `"<size>p"` when no label is given.
    pub size: Option<u32>,
}

impl QualitySource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: None,
            size: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Menu label: explicit label, else `"<size>p"`, else the URL's file name.
    #[must_use]
    pub fn display_label(&self) -> String {
        if let Some(label) = self.label.as_deref().filter(|l| !l.is_empty()) {
            return label.to_string();
        }
        match self.size {
            Some(size) => format!("{}p", size),
            None => self
                .url
                .rsplit('/')
                .next()
                .unwrap_or(&self.url)
                .to_string(),
        }
    }

    /// Whether `current` (as reported by the resource) refers to this source.
    ///
    /// Resources report absolute URLs while sources are often declared
    /// relative, so a suffix match is used.
    #[must_use]
    pub fn matches(&self, current: &str) -> bool {
        !self.url.is_empty() && current.ends_with(&self.url)
    }
}
