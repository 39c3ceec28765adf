// SPDX-License-Identifier: MPL-2.0
//! Synthetic pinch for pointer devices without multi-touch.
//!
//! Holding the left button and dragging vertically behaves like a pinch
//! anchored at the press location: dragging up spreads, dragging down
//! squeezes. The factor grows exponentially with the drag distance so equal
//! drags always multiply the scale by the same amount, up to the pinch factor
//! bounds.

use super::{GestureSource, GestureState, PinchEvent, SurfaceSize};
use crate::config::{
    DEFAULT_DRAG_SENSITIVITY_PX, MAX_DRAG_SENSITIVITY_PX, MAX_PINCH_FACTOR,
    MIN_DRAG_SENSITIVITY_PX, MIN_PINCH_FACTOR,
};
use iced::{mouse, Event, Point, Rectangle};

#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    start_y: f32,
    last_factor: f32,
    last_location: Point,
}

/// Mouse-drag implementation of [`GestureSource`].
#[derive(Debug)]
pub struct DragPinch {
    sensitivity_px: f32,
    drag: Option<ActiveDrag>,
}

impl Default for DragPinch {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_SENSITIVITY_PX)
    }
}

impl DragPinch {
    /// Creates a recognizer where dragging `sensitivity_px` pixels upwards
    /// multiplies the scale factor by *e*.
    #[must_use]
    pub fn new(sensitivity_px: f32) -> Self {
        Self {
            sensitivity_px: clamp_sensitivity(sensitivity_px),
            drag: None,
        }
    }

    pub fn set_sensitivity(&mut self, sensitivity_px: f32) {
        self.sensitivity_px = clamp_sensitivity(sensitivity_px);
    }

    fn factor_for(&self, start_y: f32, current_y: f32) -> f32 {
        let exponent = (start_y - current_y) / self.sensitivity_px;
        if exponent.is_nan() {
            return 1.0;
        }
        exponent.exp().clamp(MIN_PINCH_FACTOR, MAX_PINCH_FACTOR)
    }
}

fn clamp_sensitivity(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_DRAG_SENSITIVITY_PX, MAX_DRAG_SENSITIVITY_PX)
    } else {
        DEFAULT_DRAG_SENSITIVITY_PX
    }
}

impl GestureSource for DragPinch {
    fn translate(
        &mut self,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<PinchEvent> {
        let Event::Mouse(mouse_event) = event else {
            return None;
        };
        let surface = SurfaceSize::from(bounds.size());

        match *mouse_event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                if self.drag.is_some() {
                    return None;
                }
                let location = cursor.position_in(bounds)?;
                let absolute = cursor.position()?;
                self.drag = Some(ActiveDrag {
                    start_y: absolute.y,
                    last_factor: 1.0,
                    last_location: location,
                });
                log::debug!("drag pinch began at {location:?}");
                Some(PinchEvent::new(GestureState::Began, 1.0, location, surface))
            }
            mouse::Event::CursorMoved { position } => {
                let mut drag = self.drag?;
                drag.last_factor = self.factor_for(drag.start_y, position.y);
                drag.last_location = Point::new(position.x - bounds.x, position.y - bounds.y);
                self.drag = Some(drag);
                Some(PinchEvent::new(
                    GestureState::Changed,
                    drag.last_factor,
                    drag.last_location,
                    surface,
                ))
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                let drag = self.drag.take()?;
                log::debug!("drag pinch ended at factor {:.3}", drag.last_factor);
                Some(PinchEvent::new(
                    GestureState::Ended,
                    drag.last_factor,
                    drag.last_location,
                    surface,
                ))
            }
            mouse::Event::CursorLeft => {
                let drag = self.drag.take()?;
                Some(PinchEvent::new(
                    GestureState::Cancelled,
                    drag.last_factor,
                    drag.last_location,
                    surface,
                ))
            }
            _ => None,
        }
    }

    fn is_pinching(&self) -> bool {
        self.drag.is_some()
    }

    fn reset(&mut self) {
        self.drag = None;
    }
}
