// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// User-initiated actions worth keeping in the diagnostics log.
///
/// These actions represent meaningful user interactions that help
/// understand what the user was doing when issues occurred.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    TogglePlayback,

    /// Seek committed by a scrub, a key or a double click.
    Seek {
        /// Target position in seconds.
        position_secs: f64,
    },

    SetVolume {
        volume: f32,
    },

    ToggleMute,

    SetPlaybackSpeed {
        speed: f64,
    },

    /// Captions track chosen; `None` turns captions off.
    SelectCaptions {
        #[serde(skip_serializing_if = "Option::is_none")]
        track: Option<usize>,
    },

    SelectQuality {
        index: usize,
    },

    OpenMenu,
    CloseMenu,

    NavigateMenu {
        panel: String,
    },

    ToggleBooster,

    ToggleAmbientMode,

    ChangeSetting {
        key: String,
        value: String,
    },

    RequestFullscreen,
    RequestPictureInPicture,
    RequestDownload,
}

/// What happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
    },
    Warning {
        message_key: String,
    },
    Error {
        message: String,
    },
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}
