// SPDX-License-Identifier: MPL-2.0
//! Translation of raw pinch events into transform signals.
//!
//! The interpreter owns a single piece of state: the anchor locked for the
//! gesture in progress. Everything else is derived from the incoming event.

use super::{GestureState, NormalizedPoint, PinchEvent, SurfaceSize, TransformSignal};
use iced::Point;

/// Converts pinch events into [`TransformSignal`]s, locking the anchor at the
/// first live event of each gesture.
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    locked_anchor: Option<NormalizedPoint>,
}

impl GestureInterpreter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor locked for the current gesture, if any.
    #[must_use]
    pub fn locked_anchor(&self) -> Option<NormalizedPoint> {
        self.locked_anchor
    }

    /// Interprets a [`PinchEvent`] reported by a gesture source.
    pub fn on_pinch(&mut self, event: &PinchEvent) -> Option<TransformSignal> {
        self.on_gesture_event(
            event.state,
            event.scale_factor,
            event.location,
            event.surface,
        )
    }

    /// Interprets one gesture callback.
    ///
    /// Returns `None` when the event must be skipped: a surface without area, a
    /// non-positive or non-finite scale factor, or a non-finite location. A
    /// skipped event leaves the locked anchor untouched.
    pub fn on_gesture_event(
        &mut self,
        state: GestureState,
        raw_scale_factor: f32,
        location: Point,
        surface: SurfaceSize,
    ) -> Option<TransformSignal> {
        if surface.is_degenerate() {
            log::trace!("skipping {state:?} pinch event on degenerate surface {surface:?}");
            return None;
        }

        match state {
            GestureState::Began | GestureState::Changed => {
                if !raw_scale_factor.is_finite() || raw_scale_factor <= 0.0 {
                    log::trace!("skipping {state:?} pinch event with scale {raw_scale_factor}");
                    return None;
                }
                let computed = NormalizedPoint::from_location(location, surface)?;

                // Began opens a new gesture; a lock left over from one that never
                // reported its end must not leak into it.
                if state == GestureState::Began {
                    self.locked_anchor = None;
                }
                let anchor = *self.locked_anchor.get_or_insert(computed);

                Some(TransformSignal {
                    scale_delta: raw_scale_factor - 1.0,
                    anchor: Some(anchor),
                })
            }
            GestureState::Ended | GestureState::Cancelled => {
                self.locked_anchor = None;
                Some(TransformSignal::RESET)
            }
        }
    }
}
