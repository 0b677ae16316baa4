// SPDX-License-Identifier: MPL-2.0
//! Drag gestures on the progress and volume tracks.
//!
//! A [`DragSession`] lives from pointer down to pointer up. Scrubbing pauses
//! playback for the duration of the drag and commits a single seek at the
//! end; intermediate samples only update the preview. Volume drags apply
//! every sample immediately.
//!
//! Nothing here fails: coordinates outside the track are clamped, and an
//! unknown duration turns the final seek into a no-op while the session
//! still ends cleanly.

mod capture;

pub use capture::{CaptureLedger, PointerCapture};

use crate::media::{Fraction, MediaResource, TrackBounds, Volume};

/// Which control a drag manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragKind {
    Scrub,
    Volume,
}

/// One pointer sample in the coordinate space of [`TrackBounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub pointer_id: u32,
    pub x: f64,
}

impl PointerSample {
    #[must_use]
    pub fn new(pointer_id: u32, x: f64) -> Self {
        Self { pointer_id, x }
    }
}

/// An active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub kind: DragKind,
    pub pointer_id: u32,
    /// Whether playback was paused before a scrub started. Always `true`
    /// for volume drags, which never touch playback.
    pub was_paused_before_start: bool,
    pub last_fraction: Fraction,
}

/// What a gesture call did, for the caller to reflect in the presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// A session of that kind already exists, or no session matched.
    Ignored,
    /// Scrub fill moved; `time` is `None` while the duration is unknown.
    ScrubMoved { fraction: Fraction, time: Option<f64> },
    /// Volume applied to the resource.
    VolumeApplied(Volume),
    /// Scrub ended. `seeked_to` is `None` when no seek was possible.
    ScrubCommitted {
        seeked_to: Option<f64>,
        resumed: bool,
    },
    /// Volume drag released.
    VolumeReleased,
}

/// Owns at most one drag session per [`DragKind`].
#[derive(Debug, Default, Clone)]
pub struct GestureController {
    scrub: Option<DragSession>,
    volume: Option<DragSession>,
}

impl GestureController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn session(&self, kind: DragKind) -> Option<&DragSession> {
        self.slot(kind).as_ref()
    }

    #[must_use]
    pub fn is_active(&self, kind: DragKind) -> bool {
        self.slot(kind).is_some()
    }

    /// Starts a drag. No-op while a session of the same kind is active.
    pub fn start(
        &mut self,
        kind: DragKind,
        sample: PointerSample,
        bounds: TrackBounds,
        media: &mut dyn MediaResource,
        capture: &mut dyn PointerCapture,
    ) -> GestureOutcome {
        if self.is_active(kind) {
            log::debug!("{:?} drag already active, ignoring pointer {}", kind, sample.pointer_id);
            return GestureOutcome::Ignored;
        }

        let was_paused = match kind {
            DragKind::Scrub => {
                let paused = media.paused();
                if !paused {
                    media.pause();
                }
                paused
            }
            DragKind::Volume => true,
        };

        capture.capture(kind, sample.pointer_id);
        *self.slot_mut(kind) = Some(DragSession {
            kind,
            pointer_id: sample.pointer_id,
            was_paused_before_start: was_paused,
            last_fraction: Fraction::ZERO,
        });

        self.apply_sample(kind, sample, bounds, media)
    }

    /// Feeds a move sample to the session of `kind`.
    pub fn update(
        &mut self,
        kind: DragKind,
        sample: PointerSample,
        bounds: TrackBounds,
        media: &mut dyn MediaResource,
    ) -> GestureOutcome {
        if !self.owns(kind, sample.pointer_id) {
            return GestureOutcome::Ignored;
        }
        self.apply_sample(kind, sample, bounds, media)
    }

    /// Ends the session of `kind`, committing a scrub.
    ///
    /// The end sample may lie anywhere; it is clamped like any other.
    pub fn end(
        &mut self,
        kind: DragKind,
        sample: PointerSample,
        bounds: TrackBounds,
        media: &mut dyn MediaResource,
        capture: &mut dyn PointerCapture,
    ) -> GestureOutcome {
        if !self.owns(kind, sample.pointer_id) {
            return GestureOutcome::Ignored;
        }
        let Some(session) = self.slot_mut(kind).take() else {
            return GestureOutcome::Ignored;
        };
        capture.release(kind, session.pointer_id);

        match kind {
            DragKind::Scrub => {
                let fraction = bounds.fraction_at(sample.x);
                let seeked_to = fraction.to_time(media.duration());
                if let Some(secs) = seeked_to {
                    media.set_current_time(secs);
                } else {
                    log::debug!("Scrub ended without a seekable duration");
                }
                let resumed = !session.was_paused_before_start;
                if resumed {
                    media.play();
                }
                GestureOutcome::ScrubCommitted { seeked_to, resumed }
            }
            DragKind::Volume => GestureOutcome::VolumeReleased,
        }
    }

    /// Drops every session without committing, releasing their listeners.
    ///
    /// A cancelled scrub still resumes playback it paused.
    pub fn cancel_all(&mut self, media: &mut dyn MediaResource, capture: &mut dyn PointerCapture) {
        for kind in [DragKind::Scrub, DragKind::Volume] {
            if let Some(session) = self.slot_mut(kind).take() {
                capture.release(kind, session.pointer_id);
                if kind == DragKind::Scrub && !session.was_paused_before_start {
                    media.play();
                }
                log::debug!("Cancelled {:?} drag", kind);
            }
        }
    }

    fn apply_sample(
        &mut self,
        kind: DragKind,
        sample: PointerSample,
        bounds: TrackBounds,
        media: &mut dyn MediaResource,
    ) -> GestureOutcome {
        let fraction = bounds.fraction_at(sample.x);
        if let Some(session) = self.slot_mut(kind) {
            session.last_fraction = fraction;
        }

        match kind {
            DragKind::Scrub => GestureOutcome::ScrubMoved {
                fraction,
                time: fraction.to_time(media.duration()),
            },
            DragKind::Volume => {
                let volume = Volume::new(fraction.value() as f32);
                media.set_volume(volume.value());
                media.set_muted(volume.is_silent());
                GestureOutcome::VolumeApplied(volume)
            }
        }
    }

    fn owns(&self, kind: DragKind, pointer_id: u32) -> bool {
        self.slot(kind)
            .is_some_and(|session| session.pointer_id == pointer_id)
    }

    fn slot(&self, kind: DragKind) -> &Option<DragSession> {
        match kind {
            DragKind::Scrub => &self.scrub,
            DragKind::Volume => &self.volume,
        }
    }

    fn slot_mut(&mut self, kind: DragKind) -> &mut Option<DragSession> {
        match kind {
            DragKind::Scrub => &mut self.scrub,
            DragKind::Volume => &mut self.volume,
        }
    }
}
