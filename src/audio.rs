// SPDX-License-Identifier: MPL-2.0
//! Volume booster: routes the player's audio through a gain stage.
//!
//! The audio-processing context is one per process, shared by every
//! player. It starts suspended on most platforms and resuming it is
//! asynchronous: completion arrives later as
//! [`MediaEvent::AudioResumed`](crate::media::MediaEvent::AudioResumed),
//! which the host must deliver to every player.

use crate::config::NEUTRAL_GAIN;
use crate::error::AudioError;
use parking_lot::Mutex;
use std::sync::{Arc, OnceLock};

/// Platform audio processing, as seen from one player.
pub trait AudioPlatform {
    /// Whether audio processing exists at all.
    fn is_supported(&self) -> bool;
    /// Creates the process-wide context.
    fn create_context(&mut self) -> Result<(), AudioError>;
    fn context_suspended(&self) -> bool;
    /// Starts resuming the context. Completion is reported as an event.
    fn request_resume(&mut self);
    /// Connects this player's media output to its gain stage.
    fn route_through_gain(&mut self) -> Result<(), AudioError>;
    fn set_gain(&mut self, gain: f32);
}

/// Lifecycle of the shared context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextPhase {
    #[default]
    Uninitialized,
    Suspended,
    Resuming,
    Running,
}

/// Whether the context can be used right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeState {
    Running,
    /// A resume is outstanding; wait for its completion event.
    Pending,
}

/// The process-wide audio context state.
#[derive(Debug, Default)]
pub struct SharedAudioContext {
    phase: Mutex<ContextPhase>,
}

impl SharedAudioContext {
    /// Creates an isolated context, for hosts that manage their own.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The context shared by every player in the process.
    pub fn global() -> Arc<SharedAudioContext> {
        static GLOBAL: OnceLock<Arc<SharedAudioContext>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(SharedAudioContext::new())))
    }

    #[must_use]
    pub fn phase(&self) -> ContextPhase {
        *self.phase.lock()
    }

    /// Creates the context on first use. Later calls are no-ops.
    ///
    /// A rejected creation leaves the context uninitialized so a later,
    /// user-initiated attempt may try again.
    pub fn acquire(&self, platform: &mut dyn AudioPlatform) -> Result<(), AudioError> {
        let mut phase = self.phase.lock();
        if *phase != ContextPhase::Uninitialized {
            return Ok(());
        }
        platform.create_context()?;
        *phase = if platform.context_suspended() {
            ContextPhase::Suspended
        } else {
            ContextPhase::Running
        };
        log::debug!("Shared audio context created ({:?})", *phase);
        Ok(())
    }

    /// Requests a resume unless the context runs or one is outstanding.
    pub fn resume(&self, platform: &mut dyn AudioPlatform) -> ResumeState {
        let mut phase = self.phase.lock();
        match *phase {
            ContextPhase::Running => ResumeState::Running,
            ContextPhase::Resuming => ResumeState::Pending,
            ContextPhase::Suspended | ContextPhase::Uninitialized => {
                platform.request_resume();
                *phase = ContextPhase::Resuming;
                ResumeState::Pending
            }
        }
    }

    /// Records the outcome of the outstanding resume.
    pub fn on_resumed(&self, result: &Result<(), AudioError>) {
        let mut phase = self.phase.lock();
        if *phase != ContextPhase::Resuming {
            return;
        }
        *phase = match result {
            Ok(()) => ContextPhase::Running,
            Err(err) => {
                log::warn!("Audio context resume failed: {}", err);
                ContextPhase::Suspended
            }
        };
    }
}

/// Result of a booster operation.
#[derive(Debug, Clone, PartialEq)]
pub enum BoosterOutcome {
    /// The gain was switched; `true` means boosted.
    Toggled(bool),
    /// Waiting for the context to resume; the toggle applies then.
    Queued,
    /// Nothing to do.
    Unchanged,
    /// The platform refused. The booster keeps its previous state.
    Failed(AudioError),
}

/// Per-player booster state.
#[derive(Debug, Clone)]
pub struct Booster {
    gain: f32,
    enabled: bool,
    routed: bool,
    queued: bool,
}

impl Booster {
    #[must_use]
    pub fn new(gain: f32) -> Self {
        Self {
            gain,
            enabled: false,
            routed: false,
            queued: false,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn is_queued(&self) -> bool {
        self.queued
    }

    /// Flips the booster, initializing and resuming the shared context
    /// as needed. Repeated toggles while a resume is outstanding are
    /// absorbed into the single queued toggle.
    pub fn toggle(
        &mut self,
        context: &SharedAudioContext,
        platform: &mut dyn AudioPlatform,
    ) -> BoosterOutcome {
        if !platform.is_supported() {
            return BoosterOutcome::Failed(AudioError::Unsupported);
        }
        if self.queued {
            return BoosterOutcome::Queued;
        }
        if let Err(err) = context.acquire(platform) {
            log::warn!("Booster unavailable: {}", err);
            return BoosterOutcome::Failed(err);
        }
        match context.resume(platform) {
            ResumeState::Running => self.apply_toggle(platform),
            ResumeState::Pending => {
                self.queued = true;
                BoosterOutcome::Queued
            }
        }
    }

    /// Handles completion of the shared context resume.
    pub fn on_resumed(
        &mut self,
        result: Result<(), AudioError>,
        context: &SharedAudioContext,
        platform: &mut dyn AudioPlatform,
    ) -> BoosterOutcome {
        context.on_resumed(&result);
        if !std::mem::take(&mut self.queued) {
            return BoosterOutcome::Unchanged;
        }
        match result {
            Ok(()) => self.apply_toggle(platform),
            Err(err) => BoosterOutcome::Failed(err),
        }
    }

    fn apply_toggle(&mut self, platform: &mut dyn AudioPlatform) -> BoosterOutcome {
        if !self.routed {
            if let Err(err) = platform.route_through_gain() {
                log::warn!("Booster routing failed: {}", err);
                return BoosterOutcome::Failed(err);
            }
            self.routed = true;
        }
        self.enabled = !self.enabled;
        platform.set_gain(if self.enabled { self.gain } else { NEUTRAL_GAIN });
        log::info!("Volume booster {}", if self.enabled { "on" } else { "off" });
        BoosterOutcome::Toggled(self.enabled)
    }
}
