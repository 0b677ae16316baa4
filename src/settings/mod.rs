// SPDX-License-Identifier: MPL-2.0
//! User preferences: caption style, ambient mode, volume and speed.
//!
//! Unlike [`crate::config`], which holds tunables edited in a file, these are
//! changed from the settings menu and written back on every change.

mod bridge;
pub mod color;
mod store;

pub use bridge::{
    CaptionStyleForm, SettingChange, SettingsBridge, SettingsMap, StorageKeys, StyleInput,
};
pub use store::{FileStore, KeyValueStore, MemoryStore};
