// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for gallery actions.
//!
//! Shares, downloads, orders and load problems surface as short-lived
//! toasts in the bottom-right corner. Success and info toasts vanish after
//! a few seconds, warnings stay a little longer and errors wait for the
//! user. Extra toasts queue behind the visible ones.
//!
//! ```ignore
//! state.notifications.push(
//!     Notification::success("notification-link-copied").with_arg("title", &item.title),
//! );
//! let overlay = Toast::view_overlay(&state.notifications, &state.i18n);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
