// SPDX-License-Identifier: MPL-2.0
//! The seam between platform input and pinch recognition.

use super::{DragPinch, PinchEvent, TouchPinch};
use iced::{mouse, Event, Rectangle};

/// A recognizer that turns platform input into raw pinch events.
///
/// Implementations are fed every event the surface receives, together with
/// the surface bounds (in window coordinates) and the cursor. They report a
/// [`PinchEvent`] in surface-local coordinates when the event advances a
/// pinch, and never reach into the state of whoever consumes it.
pub trait GestureSource {
    /// Feeds one input event to the recognizer.
    fn translate(
        &mut self,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<PinchEvent>;

    /// Whether a pinch is currently in progress.
    fn is_pinching(&self) -> bool;

    /// Forgets any in-progress recognition without reporting it.
    fn reset(&mut self);
}

/// Widget state of the zoom surface: one recognizer per input kind.
///
/// Touch takes priority; the mouse drag only runs while no touch pinch is
/// active, so the two can never report interleaved gestures.
#[derive(Debug, Default)]
pub struct PinchSurfaceState {
    touch: TouchPinch,
    drag: DragPinch,
}

impl PinchSurfaceState {
    /// Updates the drag sensitivity without interrupting a drag.
    pub fn set_drag_sensitivity(&mut self, sensitivity_px: f32) {
        self.drag.set_sensitivity(sensitivity_px);
    }
}

impl GestureSource for PinchSurfaceState {
    fn translate(
        &mut self,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<PinchEvent> {
        match event {
            Event::Touch(_) => {
                let pinch = self.touch.translate(event, bounds, cursor);
                // A touch pinch supersedes a mouse drag that was still open.
                if self.touch.is_pinching() && self.drag.is_pinching() {
                    self.drag.reset();
                }
                pinch
            }
            Event::Mouse(_) if !self.touch.is_pinching() => {
                self.drag.translate(event, bounds, cursor)
            }
            _ => None,
        }
    }

    fn is_pinching(&self) -> bool {
        self.touch.is_pinching() || self.drag.is_pinching()
    }

    fn reset(&mut self) {
        self.touch.reset();
        self.drag.reset();
    }
}
