// SPDX-License-Identifier: MPL-2.0
//! Captions and quality selection kept consistent with a live track list.

mod captions;
mod quality;
mod selection;

pub use captions::{CaptionEntry, CaptionsManager};
pub use quality::{QualityManager, RestorePoint};
pub use selection::TrackSelection;
