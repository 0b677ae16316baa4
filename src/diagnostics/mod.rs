// SPDX-License-Identifier: MPL-2.0
//! Diagnostics: a bounded log of what the user did and what went wrong.
//!
//! Kept in memory only. Hosts export it with [`ActionLog::export_json`]
//! when attaching context to a bug report.

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::ActionLog;
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction};
