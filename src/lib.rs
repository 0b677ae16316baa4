// SPDX-License-Identifier: MPL-2.0
//! `player_overlay` is the interaction core of a media player overlay.
//!
//! It turns a media resource it does not own into a controllable player:
//! scrub and volume gestures, hover previews from sprite-sheet thumbnails,
//! a settings menu, captions and quality selection that survive track list
//! changes, and preferences persisted to a key-value store. Rendering,
//! decoding and platform plumbing stay with the host, behind the traits in
//! [`media`], [`presentation`], [`settings`], [`gesture`] and [`audio`].
//!
//! Hosts build a [`player::Player`] and feed it [`player::PlayerEvent`]s.

#![doc(html_root_url = "https://docs.rs/player_overlay/0.1.0")]

pub mod audio;
pub mod chrome;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gesture;
pub mod media;
pub mod menu;
pub mod notifications;
pub mod paths;
pub mod player;
pub mod presentation;
pub mod settings;
pub mod thumbnails;
pub mod tracks;

#[cfg(test)]
mod test_utils;
