// SPDX-License-Identifier: MPL-2.0
//! Transient user notifications.
//!
//! Failures the player recovers from on its own (booster rejected by the
//! platform, storage unavailable, unreadable preferences) are still worth
//! telling the user about. They become toasts managed here.
//!
//! # Design Considerations
//!
//! - Toast duration: ~3s for success/info, ~5s for warnings, manual dismiss for errors
//! - Max visible toasts: 3 (others are queued)
//! - Time is injected: creation and expiry use the `now` of the event being handled

mod manager;
mod notification;

pub use manager::{Manager, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
