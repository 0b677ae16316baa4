// SPDX-License-Identifier: MPL-2.0
//! Contracts for the external media resource the overlay controls.
//!
//! The overlay never decodes or renders anything itself. It reads a
//! [`PlaybackSnapshot`] from a [`MediaResource`], reacts to [`MediaEvent`]s
//! delivered in emission order, and writes back through explicit requests
//! (seek, volume, rate, track mode, source swap).

pub mod playback_speed;
pub mod position;
pub mod tracks;
pub mod volume;

pub use playback_speed::PlaybackSpeed;
pub use position::{format_time, Fraction, TrackBounds};
pub use tracks::{QualitySource, TextTrack, TrackIdentity, TrackKind, TrackList, TrackMode};
pub use volume::{Volume, VolumeLevel};

use crate::error::AudioError;
use crate::thumbnails::RawCue;

/// Read-only view of the media resource at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSnapshot {
    /// Current position in seconds (never negative).
    pub current_time: f64,
    /// Total duration in seconds; `NaN` until metadata is loaded.
    pub duration: f64,
    pub paused: bool,
    pub volume: f32,
    pub muted: bool,
    pub playback_rate: f64,
}

impl PlaybackSnapshot {
    /// Returns the duration when seeking is possible (finite and positive).
    #[must_use]
    pub fn seekable_duration(&self) -> Option<f64> {
        position::seekable_duration(self.duration)
    }

    /// Position as a fraction of the duration, `0.0` when unknown.
    #[must_use]
    pub fn progress(&self) -> Fraction {
        Fraction::of(self.current_time, self.duration)
    }

    /// Volume as heard: zero when muted.
    #[must_use]
    pub fn effective_volume(&self) -> Volume {
        if self.muted {
            Volume::new(0.0)
        } else {
            Volume::new(self.volume)
        }
    }
}

/// Availability of the auxiliary metadata cues used for preview thumbnails.
#[derive(Debug, Clone, PartialEq)]
pub enum CueAvailability {
    /// Cues are loaded and can be indexed now.
    Ready(Vec<RawCue>),
    /// A metadata track exists but its cues have not arrived yet;
    /// [`MediaEvent::CuesLoaded`] will follow.
    Pending,
    /// The source carries no metadata track.
    Absent,
}

/// The media element being controlled.
///
/// Every write is a request: the resource may clamp it, apply it later, or
/// have its state changed by other code, so callers re-read a fresh
/// [`snapshot`](MediaResource::snapshot) instead of caching values.
pub trait MediaResource {
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, secs: f64);
    fn duration(&self) -> f64;

    fn paused(&self) -> bool;
    fn play(&mut self);
    fn pause(&mut self);
    /// Re-issues loading of the current source.
    fn load(&mut self);

    fn volume(&self) -> f32;
    fn set_volume(&mut self, volume: f32);
    fn muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);

    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&mut self, rate: f64);

    /// URL of the source currently loaded, if any.
    fn current_source(&self) -> Option<String>;
    /// Replaces the source URL. Takes effect after [`load`](MediaResource::load).
    fn set_source(&mut self, url: &str);
    /// Alternate quality sources declared for this media.
    fn quality_sources(&self) -> Vec<QualitySource>;

    fn text_tracks(&self) -> &dyn TrackList;
    fn text_tracks_mut(&mut self) -> &mut dyn TrackList;

    /// Returns the thumbnail cues if a metadata track is present.
    fn metadata_cues(&mut self) -> CueAvailability;

    /// Asks the hidden secondary element to decode a frame at `secs`.
    /// Completion arrives as [`MediaEvent::PreviewFrameReady`].
    fn sample_preview_frame(&mut self, secs: f64);

    fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_time: self.current_time().max(0.0),
            duration: self.duration(),
            paused: self.paused(),
            volume: self.volume(),
            muted: self.muted(),
            playback_rate: self.playback_rate(),
        }
    }
}

/// Notifications emitted by the media resource and its platform.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    TimeAdvanced,
    Paused,
    Resumed,
    MetadataReady,
    BufferingStarted,
    BufferingEnded,
    Ended,
    VolumeChanged,
    /// A text track was added or removed.
    TrackListChanged,
    /// A new source was assigned to the resource.
    SourceChanged,
    /// The metadata track finished loading its cues.
    CuesLoaded(Vec<RawCue>),
    /// The secondary element decoded the frame requested for a preview.
    PreviewFrameReady { secs: f64 },
    /// The shared audio context finished resuming.
    AudioResumed(Result<(), AudioError>),
}
