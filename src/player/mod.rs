// SPDX-License-Identifier: MPL-2.0
//! The player facade.
//!
//! [`Player`] owns every piece of overlay state and the collaborators it
//! drives. Hosts feed it [`PlayerEvent`]s in the order they happen; each
//! event is processed to completion before the next. Nothing returns an
//! error: collaborator failures turn into clamped values, reset
//! selections, defaults or transient notifications.

mod input;
pub mod keyboard;

pub use input::{Command, InputEvent, Key, KeyPress, Modifiers, NamedKey, PlayerEvent};

use crate::audio::{AudioPlatform, Booster, BoosterOutcome, SharedAudioContext};
use crate::chrome::{Chrome, ControlsTimeout, HideGuard, Indicator, IndicatorKind, PointerKind};
use crate::config::Config;
use crate::diagnostics::{ActionLog, UserAction};
use crate::error::{AudioError, Result};
use crate::gesture::{DragKind, GestureController, GestureOutcome, PointerCapture};
use crate::media::{
    format_time, Fraction, MediaEvent, MediaResource, PlaybackSpeed, TrackBounds, Volume,
};
use crate::menu::MenuNavigator;
use crate::notifications::{Manager, Notification};
use crate::presentation::{
    download_file_name, Control, Delegate, Flag, Presentation, PresentationUpdate, TextSlot,
    Tooltip,
};
use crate::settings::{KeyValueStore, SettingsBridge};
use crate::thumbnails::{preview_at, tooltip_center, PreviewFrame, Thumbnails};
use crate::tracks::{CaptionsManager, QualityManager};
use std::sync::Arc;
use std::time::Instant;

/// Notification shown when a preference could not be written.
const STORAGE_WRITE_WARNING: &str = "notification-storage-write-error";

/// Tolerance when matching a decoded preview frame to the latest request.
const FRAME_MATCH_EPSILON: f64 = 1e-6;

/// Collaborators handed to a [`Player`] at construction.
#[derive(Debug)]
pub struct PlayerParts<M, S, V, C, A> {
    pub media: M,
    pub store: S,
    pub view: V,
    pub capture: C,
    pub audio: A,
}

/// An interactive overlay bound to one media resource.
pub struct Player<M, S, V, C, A> {
    media: M,
    store: S,
    view: V,
    capture: C,
    audio: A,
    audio_context: Arc<SharedAudioContext>,

    config: Config,
    gestures: GestureController,
    menu: MenuNavigator,
    chrome: Chrome,
    indicator: Indicator,
    pointer: PointerKind,
    thumbnails: Thumbnails,
    tooltip_width: f64,
    awaiting_frame: Option<f64>,
    captions: CaptionsManager,
    quality: QualityManager,
    settings: SettingsBridge,
    speed: PlaybackSpeed,
    booster: Booster,
    notifications: Manager,
    diagnostics: ActionLog,
}

impl<M, S, V, C, A> Player<M, S, V, C, A>
where
    M: MediaResource,
    S: KeyValueStore,
    V: Presentation,
    C: PointerCapture,
    A: AudioPlatform,
{
    /// Builds a player sharing the process-wide audio context.
    pub fn new(config: Config, parts: PlayerParts<M, S, V, C, A>, now: Instant) -> Self {
        Self::with_audio_context(config, parts, SharedAudioContext::global(), now)
    }

    /// Builds a player on an explicit audio context.
    ///
    /// Loads persisted settings, restores volume and speed, derives the
    /// captions and quality menus and pushes the initial presentation.
    pub fn with_audio_context(
        config: Config,
        parts: PlayerParts<M, S, V, C, A>,
        audio_context: Arc<SharedAudioContext>,
        now: Instant,
    ) -> Self {
        let PlayerParts {
            media,
            store,
            view,
            capture,
            audio,
        } = parts;
        let (settings, warning) = SettingsBridge::load(config.storage_key_prefix(), &store);

        let mut player = Self {
            media,
            store,
            view,
            capture,
            audio,
            audio_context,
            gestures: GestureController::new(),
            menu: MenuNavigator::new(),
            chrome: Chrome::new(ControlsTimeout::new(config.controls_timeout_secs())),
            indicator: Indicator::new(config.indicator_duration()),
            pointer: PointerKind::default(),
            thumbnails: Thumbnails::default(),
            tooltip_width: 0.0,
            awaiting_frame: None,
            captions: CaptionsManager::new(),
            quality: QualityManager::new(),
            settings,
            speed: PlaybackSpeed::default(),
            booster: Booster::new(config.booster_gain()),
            notifications: Manager::new(),
            diagnostics: ActionLog::new(config.diagnostics_capacity()),
            config,
        };

        if let Some(key) = warning {
            player.warn(key, now);
        }
        player.restore_preferences();
        player.settings.apply(&mut player.view);
        player.captions.rebuild(player.media.text_tracks_mut());
        player.quality.refresh(&player.media);

        let booster_supported = player.audio.is_supported();
        player
            .view
            .apply(PresentationUpdate::Visible(Control::BoosterButton, booster_supported));
        player.chrome.show(now, player.media.paused());
        player.render_all();
        player
    }

    /// Processes one event using the current time.
    pub fn handle(&mut self, event: impl Into<PlayerEvent>) {
        self.handle_at(event, Instant::now());
    }

    /// Processes one event at `now`.
    pub fn handle_at(&mut self, event: impl Into<PlayerEvent>, now: Instant) {
        match event.into() {
            PlayerEvent::Media(event) => self.on_media(event, now),
            PlayerEvent::Input(input) => self.on_input(input, now),
            PlayerEvent::Tick(at) => self.on_tick(at),
        }
    }

    #[must_use]
    pub fn media(&self) -> &M {
        &self.media
    }

    /// Mutable access for hosts that drive the resource directly; follow
    /// changes with the matching [`MediaEvent`].
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn capture(&self) -> &C {
        &self.capture
    }

    #[must_use]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    #[must_use]
    pub fn menu(&self) -> &MenuNavigator {
        &self.menu
    }

    #[must_use]
    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    #[must_use]
    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    #[must_use]
    pub fn thumbnails(&self) -> &Thumbnails {
        &self.thumbnails
    }

    #[must_use]
    pub fn captions(&self) -> &CaptionsManager {
        &self.captions
    }

    #[must_use]
    pub fn quality(&self) -> &QualityManager {
        &self.quality
    }

    #[must_use]
    pub fn settings(&self) -> &SettingsBridge {
        &self.settings
    }

    #[must_use]
    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    #[must_use]
    pub fn booster(&self) -> &Booster {
        &self.booster
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    #[must_use]
    pub fn diagnostics(&self) -> &ActionLog {
        &self.diagnostics
    }

    // Media events

    fn on_media(&mut self, event: MediaEvent, now: Instant) {
        match event {
            MediaEvent::TimeAdvanced => {
                // The fill follows the pointer while scrubbing.
                if !self.gestures.is_active(DragKind::Scrub) {
                    self.render_time();
                }
            }
            MediaEvent::Paused => {
                self.render_playback();
                self.show_chrome(now);
            }
            MediaEvent::Resumed => {
                self.view.apply(PresentationUpdate::Flag(Flag::Ended, false));
                self.render_playback();
                self.show_chrome(now);
            }
            MediaEvent::Ended => {
                self.view.apply(PresentationUpdate::Flag(Flag::Ended, true));
                self.render_playback();
                self.show_chrome(now);
            }
            MediaEvent::MetadataReady => {
                if self.quality.on_metadata_ready(&mut self.media) {
                    log::debug!("Restored position after quality switch");
                }
                self.captions.rebuild(self.media.text_tracks_mut());
                self.quality.refresh(&self.media);
                self.render_time();
                self.render_captions();
                self.render_quality();
            }
            MediaEvent::BufferingStarted => {
                self.view.apply(PresentationUpdate::Flag(Flag::Buffering, true));
            }
            MediaEvent::BufferingEnded => {
                self.view.apply(PresentationUpdate::Flag(Flag::Buffering, false));
            }
            MediaEvent::VolumeChanged => {
                self.render_volume();
                let snapshot = self.media.snapshot();
                let result = self
                    .settings
                    .save_volume(&mut self.store, snapshot.volume, snapshot.muted);
                self.report_storage(result, now);
            }
            MediaEvent::TrackListChanged => {
                self.captions.rebuild(self.media.text_tracks_mut());
                self.render_captions();
            }
            MediaEvent::SourceChanged => self.on_source_changed(),
            MediaEvent::CuesLoaded(raw) => self.thumbnails.on_cues_loaded(&raw),
            MediaEvent::PreviewFrameReady { secs } => {
                let requested = self
                    .awaiting_frame
                    .is_some_and(|awaited| (awaited - secs).abs() < FRAME_MATCH_EPSILON);
                if requested {
                    self.awaiting_frame = None;
                    self.view.apply(PresentationUpdate::DrawSampledFrame { secs });
                }
            }
            MediaEvent::AudioResumed(result) => {
                let outcome = self
                    .booster
                    .on_resumed(result, &self.audio_context, &mut self.audio);
                self.on_booster(outcome, now);
            }
        }
    }

    fn on_source_changed(&mut self) {
        self.gestures.cancel_all(&mut self.media, &mut self.capture);
        self.view.apply(PresentationUpdate::Flag(Flag::Scrubbing, false));
        self.thumbnails.clear();
        self.hide_tooltip();
        self.captions.rebuild(self.media.text_tracks_mut());
        self.quality.refresh(&self.media);
        self.render_all();
    }

    // Input

    fn on_input(&mut self, input: InputEvent, now: Instant) {
        match input {
            InputEvent::DragStart {
                kind,
                sample,
                bounds,
            } => {
                let outcome =
                    self.gestures
                        .start(kind, sample, bounds, &mut self.media, &mut self.capture);
                if kind == DragKind::Scrub && outcome != GestureOutcome::Ignored {
                    self.view.apply(PresentationUpdate::Flag(Flag::Scrubbing, true));
                }
                self.on_gesture(outcome, sample.x, bounds, now);
            }
            InputEvent::DragMove {
                kind,
                sample,
                bounds,
            } => {
                let outcome = self.gestures.update(kind, sample, bounds, &mut self.media);
                self.on_gesture(outcome, sample.x, bounds, now);
            }
            InputEvent::DragEnd {
                kind,
                sample,
                bounds,
            } => {
                let outcome =
                    self.gestures
                        .end(kind, sample, bounds, &mut self.media, &mut self.capture);
                self.on_gesture(outcome, sample.x, bounds, now);
            }
            InputEvent::ProgressHover {
                x,
                bounds,
                tooltip_width,
            } => {
                if self.pointer == PointerKind::Mouse {
                    self.tooltip_width = tooltip_width;
                    self.update_preview(x, bounds);
                }
            }
            InputEvent::ProgressLeave => {
                if !self.gestures.is_active(DragKind::Scrub) {
                    self.hide_tooltip();
                }
            }
            InputEvent::SurfaceClick { pointer } => {
                self.set_pointer(pointer);
                match pointer {
                    PointerKind::Touch => {
                        if self.chrome.is_visible() {
                            let guard = self.hide_guard();
                            self.chrome.hide(guard, true, pointer);
                            self.render_chrome();
                        } else {
                            self.show_chrome(now);
                        }
                    }
                    PointerKind::Mouse => self.toggle_play(now),
                }
            }
            InputEvent::SurfaceDoubleClick { x, width } => self.double_click(x, width, now),
            InputEvent::PointerMove { pointer } => {
                self.set_pointer(pointer);
                if pointer == PointerKind::Mouse {
                    self.show_chrome(now);
                }
            }
            InputEvent::PointerLeave => {
                let guard = self.hide_guard();
                if self.chrome.hide(guard, false, self.pointer) {
                    log::debug!("Controls hidden on pointer leave");
                }
                self.render_chrome();
            }
            InputEvent::DocumentPointerDown { inside_menu } => {
                if self.menu.on_pointer_down(inside_menu) {
                    self.render_menu();
                    self.diagnostics.log_action(UserAction::CloseMenu, now);
                    self.show_chrome(now);
                }
            }
            InputEvent::Key(press) => {
                if let Some(command) = keyboard::command_for(&press, &self.config) {
                    self.execute(command, now);
                }
            }
            InputEvent::Command(command) => self.execute(command, now),
        }
    }

    fn on_gesture(&mut self, outcome: GestureOutcome, x: f64, bounds: TrackBounds, now: Instant) {
        match outcome {
            GestureOutcome::Ignored => {}
            GestureOutcome::ScrubMoved { fraction, time } => {
                self.view.apply(PresentationUpdate::Progress(fraction));
                if let Some(secs) = time {
                    let label = format_time(secs, self.media.duration());
                    self.view
                        .apply(PresentationUpdate::Text(TextSlot::CurrentTime, label));
                }
                if self.pointer == PointerKind::Mouse {
                    self.update_preview(x, bounds);
                }
            }
            GestureOutcome::VolumeApplied(_) => self.render_volume(),
            GestureOutcome::ScrubCommitted { seeked_to, .. } => {
                self.view.apply(PresentationUpdate::Flag(Flag::Scrubbing, false));
                self.hide_tooltip();
                self.render_time();
                self.render_playback();
                if let Some(position_secs) = seeked_to {
                    self.diagnostics
                        .log_action(UserAction::Seek { position_secs }, now);
                }
                self.show_chrome(now);
            }
            GestureOutcome::VolumeReleased => {
                let volume = self.media.volume();
                self.diagnostics
                    .log_action(UserAction::SetVolume { volume }, now);
            }
        }
    }

    fn update_preview(&mut self, x: f64, bounds: TrackBounds) {
        let fraction = bounds.fraction_at(x);
        let duration = self.media.duration();
        let index = self.thumbnails.ensure(&mut self.media);
        let Some(preview) = preview_at(fraction, duration, index) else {
            return;
        };

        match preview.frame {
            PreviewFrame::Sample { secs } => {
                self.media.sample_preview_frame(secs);
                self.awaiting_frame = Some(secs);
            }
            PreviewFrame::Sprite { .. } => self.awaiting_frame = None,
        }

        let center_x = tooltip_center(bounds.offset_of(x), bounds.width, self.tooltip_width);
        self.view.apply(PresentationUpdate::Tooltip(Some(Tooltip {
            center_x,
            label: preview.label,
            frame: preview.frame,
        })));
    }

    fn hide_tooltip(&mut self) {
        self.awaiting_frame = None;
        self.view.apply(PresentationUpdate::Tooltip(None));
    }

    fn double_click(&mut self, x: f64, width: f64, now: Instant) {
        if !width.is_finite() || width <= 0.0 || !x.is_finite() {
            return;
        }
        let third = width / 3.0;
        if x < third {
            self.seek_by(-self.config.long_seek_step(), now);
        } else if x > width - third {
            self.seek_by(self.config.long_seek_step(), now);
        } else {
            self.delegate(Delegate::Fullscreen, UserAction::RequestFullscreen, now);
        }
    }

    fn on_tick(&mut self, now: Instant) {
        let guard = self.hide_guard();
        if self.chrome.tick(now, guard, self.pointer) {
            self.render_chrome();
        }
        if self.indicator.tick(now) {
            self.view.apply(PresentationUpdate::Indicator(None));
        }
        self.notifications.tick(now);
    }

    // Commands

    fn execute(&mut self, command: Command, now: Instant) {
        match command {
            Command::TogglePlay => self.toggle_play(now),
            Command::ToggleMute => {
                let muted = !self.media.muted();
                self.media.set_muted(muted);
                self.render_volume();
                self.diagnostics.log_action(UserAction::ToggleMute, now);
            }
            Command::SeekBy(delta) => self.seek_by(delta, now),
            Command::SeekTo(fraction) => self.seek_to(fraction, now),
            Command::VolumeUp => self.step_volume(true, now),
            Command::VolumeDown => self.step_volume(false, now),
            Command::StepSpeed(direction) => {
                let current =
                    PlaybackSpeed::from_preset(self.media.playback_rate()).unwrap_or(self.speed);
                self.set_speed(current.step(direction), now);
            }
            Command::SetSpeedIndex(index) => match PlaybackSpeed::from_index(index) {
                Some(speed) => self.set_speed(speed, now),
                None => log::debug!("Ignoring speed slider position {}", index),
            },
            Command::ToggleCaptions => {
                if self.captions.toggle(self.media.text_tracks_mut()) {
                    self.after_captions_change(now);
                }
            }
            Command::SelectCaptions(index) => {
                if self.captions.select(index, self.media.text_tracks_mut()) {
                    self.after_captions_change(now);
                }
            }
            Command::SelectQuality(index) => {
                if self.quality.select(index, &mut self.media) {
                    self.menu.close();
                    self.render_menu();
                    self.render_quality();
                    self.render_playback();
                    self.diagnostics
                        .log_action(UserAction::SelectQuality { index }, now);
                }
            }
            Command::ToggleMenu => {
                self.menu.toggle();
                self.after_menu_open_change(now);
            }
            Command::OpenMenu => {
                if self.menu.open() {
                    self.after_menu_open_change(now);
                }
            }
            Command::CloseMenu => {
                if self.menu.close() {
                    self.after_menu_open_change(now);
                }
            }
            Command::NavigateMenu(panel) => {
                if self.menu.navigate(panel) {
                    self.render_menu();
                    self.diagnostics.log_action(
                        UserAction::NavigateMenu {
                            panel: panel.name().to_string(),
                        },
                        now,
                    );
                }
            }
            Command::MenuBack => {
                if self.menu.back() {
                    self.render_menu();
                }
            }
            Command::ToggleBooster => {
                self.diagnostics.log_action(UserAction::ToggleBooster, now);
                let outcome = self.booster.toggle(&self.audio_context, &mut self.audio);
                self.on_booster(outcome, now);
            }
            Command::ToggleAmbientMode => {
                let enabled = !self.settings.ambient_enabled();
                let result = self.settings.set_ambient(&mut self.store, enabled);
                self.settings.apply_ambient(&mut self.view);
                self.report_storage(result, now);
                self.diagnostics
                    .log_action(UserAction::ToggleAmbientMode, now);
            }
            Command::EditStyle(input) => {
                let change = self.settings.resolve_style(input);
                self.view.apply(PresentationUpdate::Style {
                    name: change.key.to_string(),
                    value: change.value.clone(),
                });
                let result = self
                    .settings
                    .set_one(&mut self.store, change.key, &change.value);
                self.report_storage(result, now);
                self.view
                    .apply(PresentationUpdate::StyleForm(self.settings.form().clone()));
                self.diagnostics.log_action(
                    UserAction::ChangeSetting {
                        key: change.key.to_string(),
                        value: change.value,
                    },
                    now,
                );
            }
            Command::Fullscreen => {
                self.delegate(Delegate::Fullscreen, UserAction::RequestFullscreen, now);
            }
            Command::PictureInPicture => self.delegate(
                Delegate::PictureInPicture,
                UserAction::RequestPictureInPicture,
                now,
            ),
            Command::Download => match self.media.current_source().filter(|url| !url.is_empty()) {
                Some(url) => {
                    let file_name = download_file_name(&url);
                    self.delegate(
                        Delegate::Download { url, file_name },
                        UserAction::RequestDownload,
                        now,
                    );
                }
                None => log::debug!("Download requested without a source"),
            },
            Command::DismissNotification(id) => {
                self.notifications.dismiss(id);
            }
        }
    }

    fn toggle_play(&mut self, now: Instant) {
        if self.media.paused() {
            self.media.play();
        } else {
            self.media.pause();
        }
        self.render_playback();
        self.show_chrome(now);
        self.diagnostics.log_action(UserAction::TogglePlayback, now);
    }

    /// Relative seek clamped to the media; no-op without a seekable duration.
    fn seek_by(&mut self, delta: f64, now: Instant) {
        let snapshot = self.media.snapshot();
        let Some(duration) = snapshot.seekable_duration() else {
            return;
        };
        let target = (snapshot.current_time + delta).clamp(0.0, duration);
        self.media.set_current_time(target);

        let kind = if delta < 0.0 {
            IndicatorKind::SeekBackward
        } else {
            IndicatorKind::SeekForward
        };
        self.show_indicator(kind, now);
        self.render_time();
        self.diagnostics.log_action(
            UserAction::Seek {
                position_secs: target,
            },
            now,
        );
    }

    fn seek_to(&mut self, fraction: Fraction, now: Instant) {
        let Some(target) = fraction.to_time(self.media.duration()) else {
            return;
        };
        self.media.set_current_time(target);
        self.render_time();
        self.diagnostics.log_action(
            UserAction::Seek {
                position_secs: target,
            },
            now,
        );
    }

    fn step_volume(&mut self, up: bool, now: Instant) {
        let step = self.config.volume_step();
        let current = Volume::new(self.media.volume());
        let next = if up {
            self.media.set_muted(false);
            current.increase(step)
        } else {
            current.decrease(step)
        };
        self.media.set_volume(next.value());

        let kind = if up {
            IndicatorKind::VolumeUp
        } else {
            IndicatorKind::VolumeDown
        };
        self.show_indicator(kind, now);
        self.render_volume();
        self.diagnostics.log_action(
            UserAction::SetVolume {
                volume: next.value(),
            },
            now,
        );
    }

    fn set_speed(&mut self, speed: PlaybackSpeed, now: Instant) {
        self.speed = speed;
        self.media.set_playback_rate(speed.value());
        self.render_speed();
        let result = self.settings.save_speed(&mut self.store, speed);
        self.report_storage(result, now);
        self.diagnostics.log_action(
            UserAction::SetPlaybackSpeed {
                speed: speed.value(),
            },
            now,
        );
    }

    fn after_captions_change(&mut self, now: Instant) {
        self.render_captions();
        self.diagnostics.log_action(
            UserAction::SelectCaptions {
                track: self.captions.active(),
            },
            now,
        );
    }

    fn after_menu_open_change(&mut self, now: Instant) {
        self.render_menu();
        let action = if self.menu.is_open() {
            UserAction::OpenMenu
        } else {
            UserAction::CloseMenu
        };
        self.diagnostics.log_action(action, now);
        self.show_chrome(now);
    }

    fn on_booster(&mut self, outcome: BoosterOutcome, now: Instant) {
        match outcome {
            BoosterOutcome::Toggled(on) => {
                self.view.apply(PresentationUpdate::Flag(Flag::BoosterOn, on));
            }
            BoosterOutcome::Queued | BoosterOutcome::Unchanged => {}
            BoosterOutcome::Failed(AudioError::Unsupported) => {
                self.view
                    .apply(PresentationUpdate::Visible(Control::BoosterButton, false));
            }
            BoosterOutcome::Failed(err) => {
                self.view.apply(PresentationUpdate::Flag(
                    Flag::BoosterOn,
                    self.booster.is_enabled(),
                ));
                self.warn(err.message_key(), now);
            }
        }
    }

    fn delegate(&mut self, request: Delegate, action: UserAction, now: Instant) {
        self.view.apply(PresentationUpdate::Delegate(request));
        self.diagnostics.log_action(action, now);
    }

    // Helpers

    fn restore_preferences(&mut self) {
        if let Some((volume, muted)) = self.settings.load_volume(&self.store) {
            self.media.set_volume(volume.value());
            self.media.set_muted(muted);
        }
        self.speed = self.settings.load_speed(&self.store).unwrap_or_default();
        self.media.set_playback_rate(self.speed.value());
    }

    fn hide_guard(&self) -> HideGuard {
        HideGuard {
            scrubbing: self.gestures.is_active(DragKind::Scrub),
            menu_open: self.menu.holds_chrome(),
            paused: self.media.paused(),
        }
    }

    fn set_pointer(&mut self, pointer: PointerKind) {
        if self.pointer != pointer {
            self.pointer = pointer;
            self.view.apply(PresentationUpdate::Flag(
                Flag::TouchDevice,
                pointer == PointerKind::Touch,
            ));
        }
    }

    fn show_chrome(&mut self, now: Instant) {
        self.chrome.show(now, self.media.paused());
        self.render_chrome();
    }

    fn show_indicator(&mut self, kind: IndicatorKind, now: Instant) {
        self.indicator.trigger(kind, now);
        self.view.apply(PresentationUpdate::Indicator(Some(kind)));
    }

    fn warn(&mut self, message_key: impl Into<String>, now: Instant) {
        let message_key = message_key.into();
        self.diagnostics.log_warning(message_key.clone(), now);
        self.notifications
            .push(Notification::warning(message_key, now));
    }

    fn report_storage(&mut self, result: Result<()>, now: Instant) {
        if let Err(err) = result {
            log::warn!("Failed to persist preference: {}", err);
            self.warn(STORAGE_WRITE_WARNING, now);
        }
    }

    // Rendering. Every readout is re-derived from the live snapshot.

    fn render_all(&mut self) {
        self.render_playback();
        self.render_time();
        self.render_volume();
        self.render_speed();
        self.render_captions();
        self.render_quality();
        self.render_menu();
        self.render_chrome();
    }

    fn render_playback(&mut self) {
        let playing = !self.media.paused();
        self.view.apply(PresentationUpdate::Flag(Flag::Playing, playing));
    }

    fn render_time(&mut self) {
        let snapshot = self.media.snapshot();
        self.view.apply(PresentationUpdate::Text(
            TextSlot::CurrentTime,
            format_time(snapshot.current_time, snapshot.duration),
        ));
        self.view.apply(PresentationUpdate::Text(
            TextSlot::Duration,
            format_time(snapshot.duration, snapshot.duration),
        ));
        self.view
            .apply(PresentationUpdate::Progress(snapshot.progress()));
    }

    fn render_volume(&mut self) {
        let effective = self.media.snapshot().effective_volume();
        self.view.apply(PresentationUpdate::Volume {
            level: effective.level(),
            fraction: Fraction::new(f64::from(effective.value())),
        });
    }

    fn render_speed(&mut self) {
        self.view
            .apply(PresentationUpdate::Text(TextSlot::SpeedLabel, self.speed.label()));
        self.view
            .apply(PresentationUpdate::SpeedSlider(self.speed.preset_index()));
    }

    fn render_captions(&mut self) {
        let has_tracks = self.captions.has_tracks();
        self.view
            .apply(PresentationUpdate::Visible(Control::CaptionsButton, has_tracks));
        self.view
            .apply(PresentationUpdate::Visible(Control::CaptionsMenuEntry, has_tracks));
        self.view.apply(PresentationUpdate::CaptionsMenu {
            entries: self.captions.entries().to_vec(),
            active: self.captions.active(),
        });
        self.view.apply(PresentationUpdate::Text(
            TextSlot::CaptionsStatus,
            self.captions.status_label(),
        ));
        self.view.apply(PresentationUpdate::Flag(
            Flag::CaptionsOn,
            self.captions.active().is_some(),
        ));
    }

    fn render_quality(&mut self) {
        self.view.apply(PresentationUpdate::Visible(
            Control::QualityMenuEntry,
            self.quality.menu_visible(),
        ));
        self.view.apply(PresentationUpdate::QualityMenu {
            labels: self
                .quality
                .sources()
                .iter()
                .map(|source| source.display_label())
                .collect(),
            active: self.quality.active(),
        });
        self.view.apply(PresentationUpdate::Text(
            TextSlot::QualityStatus,
            self.quality.status_label(),
        ));
    }

    fn render_menu(&mut self) {
        self.view
            .apply(PresentationUpdate::Flag(Flag::MenuOpen, self.menu.is_open()));
        self.view
            .apply(PresentationUpdate::MenuPanel(self.menu.current()));
    }

    fn render_chrome(&mut self) {
        self.view.apply(PresentationUpdate::Flag(
            Flag::ControlsVisible,
            self.chrome.is_visible(),
        ));
        self.view.apply(PresentationUpdate::Flag(
            Flag::CursorHidden,
            self.chrome.cursor_hidden(),
        ));
    }
}

impl<M, S, V, C, A> std::fmt::Debug for Player<M, S, V, C, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("menu", &self.menu.state())
            .field("speed", &self.speed)
            .field("captions", &self.captions.active())
            .field("quality", &self.quality.active())
            .field("booster", &self.booster.is_enabled())
            .finish_non_exhaustive()
    }
}
