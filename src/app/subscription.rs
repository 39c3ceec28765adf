// SPDX-License-Identifier: MPL-2.0
//! Time-driven subscriptions for the application.
//!
//! Input reaches the zoom surface through its canvas program, so the app only
//! subscribes to clocks: animation frames while the view settles and a slow
//! tick while a notification is on screen.

use super::Message;
use crate::ui::zoom_view;
use iced::{time, window, Subscription};
use std::time::Duration;

const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Delivers one message per rendered frame while the reset animation runs.
pub fn create_animation_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        window::frames().map(|at| Message::ZoomView(zoom_view::Message::AnimationFrame(at)))
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notification: bool) -> Subscription<Message> {
    if has_notification {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
