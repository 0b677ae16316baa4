// SPDX-License-Identifier: MPL-2.0
//! Session-scoped pointer listeners.

use super::DragKind;

/// Registers and tears down the move/end listeners of a drag session.
///
/// While captured, every move and end event of `pointer_id` is routed to
/// the session even when the pointer leaves the control it started on.
pub trait PointerCapture {
    fn capture(&mut self, kind: DragKind, pointer_id: u32);
    fn release(&mut self, kind: DragKind, pointer_id: u32);
}

/// Counts live captures. Useful to hosts that route events themselves
/// and to tests asserting that no listener outlives its session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaptureLedger {
    live: Vec<(DragKind, u32)>,
    released: usize,
}

impl CaptureLedger {
    #[must_use]
    pub fn live(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_captured(&self, kind: DragKind) -> bool {
        self.live.iter().any(|(k, _)| *k == kind)
    }

    /// Number of captures released so far.
    #[must_use]
    pub fn released(&self) -> usize {
        self.released
    }
}

impl PointerCapture for CaptureLedger {
    fn capture(&mut self, kind: DragKind, pointer_id: u32) {
        self.live.push((kind, pointer_id));
    }

    fn release(&mut self, kind: DragKind, pointer_id: u32) {
        if let Some(pos) = self
            .live
            .iter()
            .position(|entry| *entry == (kind, pointer_id))
        {
            self.live.remove(pos);
            self.released += 1;
        } else {
            log::warn!("Release of {:?} pointer {} without capture", kind, pointer_id);
        }
    }
}
