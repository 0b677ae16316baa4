// SPDX-License-Identifier: MPL-2.0
//! Bridge between settings inputs, the presentation layer and storage.
//!
//! Overrides live under one storage key as a JSON object. Loading merges
//! them over the defaults; every change rewrites only its own key in that
//! object, so keys written by other versions or other players survive.

use super::color::{self, Rgb};
use super::store::KeyValueStore;
use crate::config::{
    AMBIENT_MODE_KEY, CAPTION_BG_COLOR_KEY, CAPTION_FONT_COLOR_KEY, CAPTION_FONT_FAMILY_KEY,
    CAPTION_FONT_SIZE_KEY, DEFAULT_SETTINGS, PRIMARY_COLOR_KEY,
};
use crate::error::Result;
use crate::media::{PlaybackSpeed, Volume};
use crate::presentation::{Flag, Presentation, PresentationUpdate, TextSlot};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Effective settings, key to fully resolved value.
pub type SettingsMap = BTreeMap<String, String>;

const DEFAULT_FONT_SIZE_PX: u32 = 22;
const DEFAULT_BG_OPACITY_PERCENT: u8 = 75;

/// Storage keys derived from the configured prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub settings: String,
    pub volume: String,
    pub speed: String,
}

impl StorageKeys {
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            settings: format!("{prefix}-settings"),
            volume: format!("{prefix}-volume"),
            speed: format!("{prefix}-speed"),
        }
    }
}

/// The caption style inputs as displayed in the style panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionStyleForm {
    pub primary_color: String,
    pub font_family: String,
    pub font_size_px: u32,
    pub font_color: String,
    pub bg_color: String,
    pub bg_opacity_percent: u8,
}

impl CaptionStyleForm {
    /// Back-converts stored values into input values. Unparseable values
    /// show the default.
    #[must_use]
    pub fn from_settings(settings: &SettingsMap) -> Self {
        let get = |key: &str| settings.get(key).map(String::as_str).unwrap_or_default();
        let (bg, opacity) = color::decompose(get(CAPTION_BG_COLOR_KEY))
            .unwrap_or((Rgb::BLACK, DEFAULT_BG_OPACITY_PERCENT));

        Self {
            primary_color: hex_or(get(PRIMARY_COLOR_KEY), default_of(PRIMARY_COLOR_KEY)),
            font_family: match get(CAPTION_FONT_FAMILY_KEY) {
                "" => default_of(CAPTION_FONT_FAMILY_KEY).to_string(),
                family => family.to_string(),
            },
            font_size_px: get(CAPTION_FONT_SIZE_KEY)
                .trim()
                .trim_end_matches("px")
                .parse()
                .unwrap_or(DEFAULT_FONT_SIZE_PX),
            font_color: hex_or(get(CAPTION_FONT_COLOR_KEY), default_of(CAPTION_FONT_COLOR_KEY)),
            bg_color: bg.to_hex(),
            bg_opacity_percent: opacity,
        }
    }
}

/// One edit in the caption style panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleInput {
    PrimaryColor(String),
    FontFamily(String),
    FontSize(u32),
    FontColor(String),
    BgColor(String),
    BgOpacity(u8),
}

/// A resolved setting ready to apply and persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingChange {
    pub key: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedVolume {
    volume: f32,
    muted: bool,
}

#[derive(Debug, Clone)]
pub struct SettingsBridge {
    keys: StorageKeys,
    effective: SettingsMap,
    form: CaptionStyleForm,
}

impl SettingsBridge {
    /// The built-in defaults.
    #[must_use]
    pub fn defaults() -> SettingsMap {
        DEFAULT_SETTINGS
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    /// Loads `defaults ⊕ persisted`.
    ///
    /// Returns a tuple of (bridge, optional_warning). Unreadable or
    /// malformed persisted data counts as no overrides; the warning names
    /// a notification message key.
    pub fn load(prefix: &str, store: &dyn KeyValueStore) -> (Self, Option<String>) {
        let keys = StorageKeys::new(prefix);
        let (overrides, warning) = read_overrides(store, &keys.settings);

        let mut effective = Self::defaults();
        for (key, value) in overrides {
            match value {
                Value::String(s) => {
                    effective.insert(key, s);
                }
                Value::Null => {}
                other => {
                    effective.insert(key, other.to_string());
                }
            }
        }

        let form = CaptionStyleForm::from_settings(&effective);
        (
            Self {
                keys,
                effective,
                form,
            },
            warning,
        )
    }

    #[must_use]
    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    #[must_use]
    pub fn effective(&self) -> &SettingsMap {
        &self.effective
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.effective.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn form(&self) -> &CaptionStyleForm {
        &self.form
    }

    #[must_use]
    pub fn ambient_enabled(&self) -> bool {
        self.get(AMBIENT_MODE_KEY) == Some("true")
    }

    /// Pushes every effective setting into the presentation layer.
    pub fn apply(&self, view: &mut dyn Presentation) {
        for (key, value) in &self.effective {
            if key == AMBIENT_MODE_KEY {
                continue;
            }
            view.apply(PresentationUpdate::Style {
                name: key.clone(),
                value: value.clone(),
            });
        }
        self.apply_ambient(view);
        view.apply(PresentationUpdate::StyleForm(self.form.clone()));
    }

    pub fn apply_ambient(&self, view: &mut dyn Presentation) {
        let on = self.ambient_enabled();
        view.apply(PresentationUpdate::Flag(Flag::AmbientMode, on));
        view.apply(PresentationUpdate::Text(
            TextSlot::AmbientStatus,
            if on { "On" } else { "Off" }.to_string(),
        ));
    }

    /// Resolves a style panel edit into the value to store.
    ///
    /// The background color and its opacity share one stored value: each
    /// edit recomposes it from the other input's displayed value.
    pub fn resolve_style(&mut self, input: StyleInput) -> SettingChange {
        let form = &mut self.form;
        match input {
            StyleInput::PrimaryColor(hex) => {
                form.primary_color.clone_from(&hex);
                SettingChange {
                    key: PRIMARY_COLOR_KEY,
                    value: hex,
                }
            }
            StyleInput::FontFamily(family) => {
                form.font_family.clone_from(&family);
                SettingChange {
                    key: CAPTION_FONT_FAMILY_KEY,
                    value: family,
                }
            }
            StyleInput::FontSize(px) => {
                form.font_size_px = px;
                SettingChange {
                    key: CAPTION_FONT_SIZE_KEY,
                    value: format!("{px}px"),
                }
            }
            StyleInput::FontColor(hex) => {
                form.font_color.clone_from(&hex);
                SettingChange {
                    key: CAPTION_FONT_COLOR_KEY,
                    value: hex,
                }
            }
            StyleInput::BgColor(hex) => {
                let rgb = Rgb::from_hex(&hex).unwrap_or(Rgb::BLACK);
                form.bg_color = rgb.to_hex();
                SettingChange {
                    key: CAPTION_BG_COLOR_KEY,
                    value: color::compose(rgb, form.bg_opacity_percent),
                }
            }
            StyleInput::BgOpacity(percent) => {
                let percent = percent.min(100);
                form.bg_opacity_percent = percent;
                let rgb = Rgb::from_hex(&form.bg_color).unwrap_or(Rgb::BLACK);
                SettingChange {
                    key: CAPTION_BG_COLOR_KEY,
                    value: color::compose(rgb, percent),
                }
            }
        }
    }

    /// Writes exactly `key` into the persisted overrides.
    ///
    /// The effective value is updated even if storage fails. A failed read
    /// aborts the write: the other overrides are unknown and would be lost.
    pub fn set_one(
        &mut self,
        store: &mut dyn KeyValueStore,
        key: &str,
        value: &str,
    ) -> Result<()> {
        self.effective.insert(key.to_string(), value.to_string());

        let mut overrides = match store.get(&self.keys.settings)? {
            Some(raw) => parse_overrides(&raw, &self.keys.settings).0,
            None => Map::new(),
        };
        overrides.insert(key.to_string(), Value::String(value.to_string()));
        let blob = serde_json::to_string(&Value::Object(overrides))?;
        store.set(&self.keys.settings, &blob)?;
        log::debug!("Persisted setting {} = {}", key, value);
        Ok(())
    }

    pub fn set_ambient(&mut self, store: &mut dyn KeyValueStore, enabled: bool) -> Result<()> {
        self.set_one(store, AMBIENT_MODE_KEY, if enabled { "true" } else { "false" })
    }

    /// Restores the persisted `(volume, muted)` pair if well-formed.
    #[must_use]
    pub fn load_volume(&self, store: &dyn KeyValueStore) -> Option<(Volume, bool)> {
        let raw = store.get(&self.keys.volume).ok().flatten()?;
        match serde_json::from_str::<PersistedVolume>(&raw) {
            Ok(saved) if saved.volume.is_finite() => {
                Some((Volume::new(saved.volume), saved.muted))
            }
            Ok(_) => None,
            Err(err) => {
                log::warn!("Ignoring malformed persisted volume: {}", err);
                None
            }
        }
    }

    pub fn save_volume(
        &self,
        store: &mut dyn KeyValueStore,
        volume: f32,
        muted: bool,
    ) -> Result<()> {
        let blob = serde_json::to_string(&PersistedVolume { volume, muted })?;
        store.set(&self.keys.volume, &blob)
    }

    /// Restores the persisted speed if it is one of the presets.
    #[must_use]
    pub fn load_speed(&self, store: &dyn KeyValueStore) -> Option<PlaybackSpeed> {
        let raw = store.get(&self.keys.speed).ok().flatten()?;
        PlaybackSpeed::parse(&raw)
    }

    pub fn save_speed(&self, store: &mut dyn KeyValueStore, speed: PlaybackSpeed) -> Result<()> {
        store.set(&self.keys.speed, &speed.value().to_string())
    }
}

fn read_overrides(store: &dyn KeyValueStore, key: &str) -> (Map<String, Value>, Option<String>) {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return (Map::new(), None),
        Err(err) => {
            log::warn!("Failed to read settings: {}", err);
            return (Map::new(), Some("notification-storage-read-error".to_string()));
        }
    };
    parse_overrides(&raw, key)
}

fn parse_overrides(raw: &str, key: &str) -> (Map<String, Value>, Option<String>) {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => (map, None),
        Ok(Value::Null) => (Map::new(), None),
        Ok(_) | Err(_) => {
            log::warn!("Ignoring malformed settings under {}", key);
            (
                Map::new(),
                Some("notification-settings-parse-error".to_string()),
            )
        }
    }
}

fn default_of(key: &str) -> &'static str {
    DEFAULT_SETTINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or("", |(_, v)| *v)
}

fn hex_or(value: &str, fallback: &str) -> String {
    if let Some(rgb) = Rgb::from_hex(value) {
        return rgb.to_hex();
    }
    match color::parse_rgba(value) {
        Some((rgb, _)) => rgb.to_hex(),
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::RecordingPresentation;
    use crate::error::Error;
    use crate::settings::MemoryStore;

    /// Store whose reads can be made to fail while writes still succeed.
    struct UnreadableStore {
        inner: MemoryStore,
        fail_reads: bool,
    }

    impl KeyValueStore for UnreadableStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads {
                return Err(Error::Storage(format!("cannot read {key}")));
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.inner.set(key, value)
        }
    }

    #[test]
    fn load_without_data_yields_defaults() {
        let store = MemoryStore::new();
        let (bridge, warning) = SettingsBridge::load("plr", &store);
        assert!(warning.is_none());
        assert_eq!(bridge.effective(), &SettingsBridge::defaults());
        assert_eq!(bridge.form().bg_opacity_percent, 75);
        assert_eq!(bridge.form().font_size_px, 22);
        assert!(!bridge.ambient_enabled());
    }

    #[test]
    fn persisted_values_win_and_unknown_keys_are_kept() {
        let store = MemoryStore::new().with(
            "plr-settings",
            r#"{"caption-font-size":"28px","future-key":"x","ambient-mode":true}"#,
        );
        let (bridge, _) = SettingsBridge::load("plr", &store);
        assert_eq!(bridge.get(CAPTION_FONT_SIZE_KEY), Some("28px"));
        assert_eq!(bridge.get("future-key"), Some("x"));
        assert_eq!(bridge.get(CAPTION_FONT_FAMILY_KEY), Some("Arial"));
        assert!(bridge.ambient_enabled());
    }

    #[test]
    fn malformed_data_is_no_overrides() {
        for raw in ["{not json", "[1,2]", "\"text\""] {
            let store = MemoryStore::new().with("plr-settings", raw);
            let (bridge, warning) = SettingsBridge::load("plr", &store);
            assert_eq!(bridge.effective(), &SettingsBridge::defaults());
            assert_eq!(warning.as_deref(), Some("notification-settings-parse-error"));
        }
    }

    #[test]
    fn set_one_round_trips_and_touches_only_its_key() {
        let mut store = MemoryStore::new().with("plr-settings", r#"{"future-key":"x"}"#);
        let (mut bridge, _) = SettingsBridge::load("plr", &store);
        bridge
            .set_one(&mut store, CAPTION_FONT_SIZE_KEY, "28px")
            .unwrap();

        let raw = store.get("plr-settings").unwrap().unwrap();
        let stored: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.as_object().unwrap().len(), 2);
        assert_eq!(stored["future-key"], "x");

        let (reloaded, _) = SettingsBridge::load("plr", &store);
        assert_eq!(reloaded.get(CAPTION_FONT_SIZE_KEY), Some("28px"));
        assert_eq!(reloaded.get(PRIMARY_COLOR_KEY), Some("#ff4081"));
    }

    #[test]
    fn set_one_does_not_clobber_concurrent_writer() {
        let mut store = MemoryStore::new();
        let (mut first, _) = SettingsBridge::load("plr", &store);
        let (mut second, _) = SettingsBridge::load("plr", &store);
        first.set_one(&mut store, PRIMARY_COLOR_KEY, "#00ff00").unwrap();
        second.set_one(&mut store, CAPTION_FONT_FAMILY_KEY, "Georgia").unwrap();

        let (merged, _) = SettingsBridge::load("plr", &store);
        assert_eq!(merged.get(PRIMARY_COLOR_KEY), Some("#00ff00"));
        assert_eq!(merged.get(CAPTION_FONT_FAMILY_KEY), Some("Georgia"));
    }

    #[test]
    fn failed_write_still_updates_effective() {
        let mut store = MemoryStore::read_only();
        let (mut bridge, _) = SettingsBridge::load("plr", &store);
        assert!(bridge.set_one(&mut store, CAPTION_FONT_SIZE_KEY, "30px").is_err());
        assert_eq!(bridge.get(CAPTION_FONT_SIZE_KEY), Some("30px"));
    }

    #[test]
    fn background_composite_uses_other_displayed_input() {
        let store = MemoryStore::new();
        let (mut bridge, _) = SettingsBridge::load("plr", &store);

        let change = bridge.resolve_style(StyleInput::BgColor("#ff0000".into()));
        assert_eq!(change.key, CAPTION_BG_COLOR_KEY);
        assert_eq!(change.value, "rgba(255, 0, 0, 0.75)");

        let change = bridge.resolve_style(StyleInput::BgOpacity(40));
        assert_eq!(change.value, "rgba(255, 0, 0, 0.4)");
        assert_eq!(bridge.form().bg_color, "#ff0000");
    }

    #[test]
    fn form_back_converts_composite_storage() {
        let store = MemoryStore::new().with(
            "plr-settings",
            r#"{"caption-bg-color":"rgba(16, 32, 48, 0.35)","caption-font-size":"30px"}"#,
        );
        let (bridge, _) = SettingsBridge::load("plr", &store);
        assert_eq!(bridge.form().bg_color, "#102030");
        assert_eq!(bridge.form().bg_opacity_percent, 35);
        assert_eq!(bridge.form().font_size_px, 30);
    }

    #[test]
    fn apply_pushes_styles_and_ambient_flag() {
        let store = MemoryStore::new().with("plr-settings", r#"{"ambient-mode":"true"}"#);
        let (bridge, _) = SettingsBridge::load("plr", &store);
        let mut view = RecordingPresentation::new();
        bridge.apply(&mut view);

        assert_eq!(view.style(CAPTION_FONT_SIZE_KEY), Some("22px"));
        assert_eq!(view.style(AMBIENT_MODE_KEY), None);
        assert_eq!(view.flag(Flag::AmbientMode), Some(true));
        assert_eq!(view.text(TextSlot::AmbientStatus), Some("On"));
    }

    #[test]
    fn volume_and_speed_persistence() {
        let mut store = MemoryStore::new();
        let (bridge, _) = SettingsBridge::load("plr", &store);
        bridge.save_volume(&mut store, 0.4, true).unwrap();
        let (volume, muted) = bridge.load_volume(&store).unwrap();
        assert!((volume.value() - 0.4).abs() < 1e-6);
        assert!(muted);

        bridge
            .save_speed(&mut store, PlaybackSpeed::from_preset(1.5).unwrap())
            .unwrap();
        assert_eq!(bridge.load_speed(&store).map(PlaybackSpeed::value), Some(1.5));

        let store = MemoryStore::new()
            .with("plr-volume", "{\"volume\":\"loud\"}")
            .with("plr-speed", "3");
        assert!(bridge.load_volume(&store).is_none());
        assert!(bridge.load_speed(&store).is_none());
    }

    #[test]
    fn set_one_leaves_storage_untouched_when_it_cannot_be_read() {
        let blob = r##"{"primary-color":"#00ff00","future-key":"x"}"##;
        let mut store = UnreadableStore {
            inner: MemoryStore::new().with("plr-settings", blob),
            fail_reads: false,
        };
        let (mut bridge, _) = SettingsBridge::load("plr", &store);

        store.fail_reads = true;
        let result = bridge.set_one(&mut store, CAPTION_FONT_SIZE_KEY, "28px");
        assert!(matches!(result, Err(Error::Storage(_))));
        assert_eq!(bridge.get(CAPTION_FONT_SIZE_KEY), Some("28px"));
        assert_eq!(store.inner.get("plr-settings").unwrap().as_deref(), Some(blob));
    }
}
