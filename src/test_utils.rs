// SPDX-License-Identifier: MPL-2.0
//! Test utilities: float assertions and in-memory collaborators.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::media::{CueAvailability, MediaResource, QualitySource, TextTrack, TrackList};

/// Scriptable media resource that records every write.
#[derive(Debug, Clone)]
pub struct FakeMedia {
    pub current_time: f64,
    pub duration: f64,
    pub paused: bool,
    pub volume: f32,
    pub muted: bool,
    pub playback_rate: f64,
    pub source: Option<String>,
    pub sources: Vec<QualitySource>,
    pub tracks: Vec<TextTrack>,
    pub cues: CueAvailability,
    /// Every `set_current_time` argument, in order.
    pub seeks: Vec<f64>,
    pub loads: usize,
    pub cue_requests: usize,
    pub preview_requests: Vec<f64>,
}

impl FakeMedia {
    /// Paused media at time zero with the given duration.
    pub fn new(duration: f64) -> Self {
        Self {
            current_time: 0.0,
            duration,
            paused: true,
            volume: 1.0,
            muted: false,
            playback_rate: 1.0,
            source: None,
            sources: Vec::new(),
            tracks: Vec::new(),
            cues: CueAvailability::Absent,
            seeks: Vec::new(),
            loads: 0,
            cue_requests: 0,
            preview_requests: Vec::new(),
        }
    }
}

impl MediaResource for FakeMedia {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, secs: f64) {
        self.seeks.push(secs);
        self.current_time = secs;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn load(&mut self) {
        self.loads += 1;
        self.current_time = 0.0;
        self.paused = true;
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn playback_rate(&self) -> f64 {
        self.playback_rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.playback_rate = rate;
    }

    fn current_source(&self) -> Option<String> {
        self.source.clone()
    }

    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
    }

    fn quality_sources(&self) -> Vec<QualitySource> {
        self.sources.clone()
    }

    fn text_tracks(&self) -> &dyn TrackList {
        &self.tracks
    }

    fn text_tracks_mut(&mut self) -> &mut dyn TrackList {
        &mut self.tracks
    }

    fn metadata_cues(&mut self) -> CueAvailability {
        self.cue_requests += 1;
        self.cues.clone()
    }

    fn sample_preview_frame(&mut self, secs: f64) {
        self.preview_requests.push(secs);
    }
}
