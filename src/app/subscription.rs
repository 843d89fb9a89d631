// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes window resizes and the viewer keys to top-level messages. Keys
//! captured by a widget (typing in the search box) are not forwarded.

use super::Message;
use crate::ui::gallery;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Tick interval while toasts are shown.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the subscription for native window and keyboard events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => gallery::modal_key(&key).map(Message::KeyPressed),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
