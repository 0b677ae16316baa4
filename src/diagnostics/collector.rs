// SPDX-License-Identifier: MPL-2.0
//! In-memory log of user actions and recovered failures.

use super::buffer::CircularBuffer;
use super::events::{DiagnosticEvent, DiagnosticEventKind, UserAction};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;

/// Bounded log owned by one player.
#[derive(Debug, Clone)]
pub struct ActionLog {
    buffer: CircularBuffer<DiagnosticEvent>,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct SerializableEvent<'a> {
    /// Milliseconds since the log was created.
    timestamp_ms: u64,
    #[serde(flatten)]
    kind: &'a DiagnosticEventKind,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    /// RFC 3339 wall-clock time the log was created.
    started_at: String,
    event_count: usize,
    events: Vec<SerializableEvent<'a>>,
}

impl ActionLog {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    pub fn log_action(&mut self, action: UserAction, now: Instant) {
        self.push(DiagnosticEventKind::UserAction { action }, now);
    }

    pub fn log_warning(&mut self, message_key: impl Into<String>, now: Instant) {
        self.push(
            DiagnosticEventKind::Warning {
                message_key: message_key.into(),
            },
            now,
        );
    }

    pub fn log_error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(
            DiagnosticEventKind::Error {
                message: message.into(),
            },
            now,
        );
    }

    fn push(&mut self, kind: DiagnosticEventKind, now: Instant) {
        self.buffer.push(DiagnosticEvent::with_timestamp(kind, now));
    }

    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Logged user actions, oldest first.
    pub fn actions(&self) -> impl Iterator<Item = &UserAction> {
        self.buffer.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::UserAction { action } => Some(action),
            _ => None,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Exports the log as pretty-printed JSON.
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<SerializableEvent<'_>> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent {
                timestamp_ms: event
                    .timestamp
                    .saturating_duration_since(self.started_at)
                    .as_millis() as u64,
                kind: &event.kind,
            })
            .collect();

        serde_json::to_string_pretty(&Report {
            started_at: self.started_at_utc.to_rfc3339(),
            event_count: events.len(),
            events,
        })
    }
}
