// SPDX-License-Identifier: MPL-2.0
//! In-memory collaborators shared by the integration tests.
#![allow(dead_code)]

use player_overlay::audio::{AudioPlatform, SharedAudioContext};
use player_overlay::config::Config;
use player_overlay::error::{AudioError, Error, Result};
use player_overlay::gesture::CaptureLedger;
use player_overlay::media::{CueAvailability, MediaResource, QualitySource, TextTrack, TrackList};
use player_overlay::player::{Player, PlayerParts};
use player_overlay::presentation::RecordingPresentation;
use player_overlay::settings::{KeyValueStore, MemoryStore};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

/// Media element double. `load` behaves like a real element: it rewinds
/// and pauses until the host restores state.
#[derive(Debug, Clone)]
pub struct TestMedia {
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
    pub seeks: Vec<f64>,
    pub loads: usize,
    pub preview_requests: Vec<f64>,
}

impl TestMedia {
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
            preview_requests: Vec::new(),
        }
    }

    pub fn playing(mut self) -> Self {
        self.paused = false;
        self
    }
}

impl MediaResource for TestMedia {
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
        self.cues.clone()
    }

    fn sample_preview_frame(&mut self, secs: f64) {
        self.preview_requests.push(secs);
    }
}

/// Audio platform double with scriptable failures.
#[derive(Debug, Clone)]
pub struct TestAudio {
    pub supported: bool,
    pub starts_suspended: bool,
    pub reject_create: bool,
    pub reject_routing: bool,
    pub contexts_created: usize,
    pub resume_requests: usize,
    pub routed: bool,
    pub gains: Vec<f32>,
}

impl Default for TestAudio {
    fn default() -> Self {
        Self {
            supported: true,
            starts_suspended: false,
            reject_create: false,
            reject_routing: false,
            contexts_created: 0,
            resume_requests: 0,
            routed: false,
            gains: Vec::new(),
        }
    }
}

impl AudioPlatform for TestAudio {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn create_context(&mut self) -> std::result::Result<(), AudioError> {
        if self.reject_create {
            return Err(AudioError::ContextRejected("blocked by policy".to_string()));
        }
        self.contexts_created += 1;
        Ok(())
    }

    fn context_suspended(&self) -> bool {
        self.starts_suspended
    }

    fn request_resume(&mut self) {
        self.resume_requests += 1;
    }

    fn route_through_gain(&mut self) -> std::result::Result<(), AudioError> {
        if self.reject_routing {
            return Err(AudioError::RoutingFailed("cross-origin source".to_string()));
        }
        self.routed = true;
        Ok(())
    }

    fn set_gain(&mut self, gain: f32) {
        self.gains.push(gain);
    }
}

/// Store whose reads fail while the shared switch is on.
#[derive(Debug, Clone, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_reads: Rc<Cell<bool>>,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.get() {
            return Err(Error::Storage(format!("cannot read {key}")));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner.set(key, value)
    }
}

pub type TestPlayer<S> = Player<TestMedia, S, RecordingPresentation, CaptureLedger, TestAudio>;

/// Builds a player on an isolated audio context.
pub fn player<S: KeyValueStore>(media: TestMedia, store: S, now: Instant) -> TestPlayer<S> {
    player_with(media, store, TestAudio::default(), Arc::new(SharedAudioContext::new()), now)
}

pub fn player_with<S: KeyValueStore>(
    media: TestMedia,
    store: S,
    audio: TestAudio,
    context: Arc<SharedAudioContext>,
    now: Instant,
) -> TestPlayer<S> {
    let parts = PlayerParts {
        media,
        store,
        view: RecordingPresentation::new(),
        capture: CaptureLedger::default(),
        audio,
    };
    Player::with_audio_context(Config::default(), parts, context, now)
}
