// SPDX-License-Identifier: MPL-2.0
//! Two-finger pinch recognition from touch events.

use super::{GestureSource, GestureState, PinchEvent, SurfaceSize};
use iced::{mouse, touch, Event, Point, Rectangle};

/// Finger separation (in pixels) below which a pinch cannot start; the scale
/// factor would be dominated by sensor noise.
const MIN_PINCH_DISTANCE: f32 = 1.0;

#[derive(Debug, Clone, Copy)]
struct ActivePinch {
    initial_distance: f32,
    last_factor: f32,
}

/// Recognizes a pinch from the first two fingers that land on the surface.
///
/// The reported location is the midpoint between the fingers and the scale
/// factor is their current distance over the distance at pinch start. Extra
/// fingers are ignored.
#[derive(Debug, Default)]
pub struct TouchPinch {
    fingers: Vec<(touch::Finger, Point)>,
    pinch: Option<ActivePinch>,
}

impl TouchPinch {
    fn position_of(&self, id: touch::Finger) -> Option<usize> {
        self.fingers.iter().position(|(finger, _)| *finger == id)
    }

    /// Midpoint and distance of the two tracked fingers.
    fn geometry(&self) -> Option<(Point, f32)> {
        match self.fingers.as_slice() {
            [(_, a), (_, b)] => {
                let midpoint = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
                Some((midpoint, a.distance(*b)))
            }
            _ => None,
        }
    }

    fn event(state: GestureState, factor: f32, midpoint: Point, bounds: Rectangle) -> PinchEvent {
        let local = Point::new(midpoint.x - bounds.x, midpoint.y - bounds.y);
        PinchEvent::new(state, factor, local, SurfaceSize::from(bounds.size()))
    }

    fn try_begin(&mut self, bounds: Rectangle) -> Option<PinchEvent> {
        let (midpoint, distance) = self.geometry()?;
        if distance < MIN_PINCH_DISTANCE {
            return None;
        }
        self.pinch = Some(ActivePinch {
            initial_distance: distance,
            last_factor: 1.0,
        });
        log::debug!("touch pinch began at {midpoint:?}, span {distance:.1}px");
        Some(Self::event(GestureState::Began, 1.0, midpoint, bounds))
    }

    fn finish(&mut self, id: touch::Finger, state: GestureState, bounds: Rectangle) -> Option<PinchEvent> {
        let index = self.position_of(id)?;
        let ending = self.geometry().zip(self.pinch.take());
        self.fingers.remove(index);

        let ((midpoint, _), pinch) = ending?;
        log::debug!("touch pinch {state:?} at factor {:.3}", pinch.last_factor);
        Some(Self::event(state, pinch.last_factor, midpoint, bounds))
    }
}

impl GestureSource for TouchPinch {
    fn translate(
        &mut self,
        event: &Event,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<PinchEvent> {
        let Event::Touch(touch_event) = event else {
            return None;
        };

        match *touch_event {
            touch::Event::FingerPressed { id, position } => {
                if self.fingers.len() >= 2 || !bounds.contains(position) {
                    return None;
                }
                if self.position_of(id).is_none() {
                    self.fingers.push((id, position));
                }
                self.try_begin(bounds)
            }
            touch::Event::FingerMoved { id, position } => {
                let index = self.position_of(id)?;
                self.fingers[index].1 = position;

                match self.pinch {
                    Some(mut pinch) => {
                        let (midpoint, distance) = self.geometry()?;
                        pinch.last_factor = distance / pinch.initial_distance;
                        self.pinch = Some(pinch);
                        Some(Self::event(
                            GestureState::Changed,
                            pinch.last_factor,
                            midpoint,
                            bounds,
                        ))
                    }
                    None => self.try_begin(bounds),
                }
            }
            touch::Event::FingerLifted { id, .. } => self.finish(id, GestureState::Ended, bounds),
            touch::Event::FingerLost { id, .. } => {
                self.finish(id, GestureState::Cancelled, bounds)
            }
        }
    }

    fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    fn reset(&mut self) {
        self.fingers.clear();
        self.pinch = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Size;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(10.0, 20.0), Size::new(200.0, 100.0))
    }

    fn feed(pinch: &mut TouchPinch, event: touch::Event) -> Option<PinchEvent> {
        pinch.translate(&Event::Touch(event), bounds(), mouse::Cursor::Unavailable)
    }

    fn pressed(id: u64, x: f32, y: f32) -> touch::Event {
        touch::Event::FingerPressed {
            id: touch::Finger(id),
            position: Point::new(x, y),
        }
    }

    fn moved(id: u64, x: f32, y: f32) -> touch::Event {
        touch::Event::FingerMoved {
            id: touch::Finger(id),
            position: Point::new(x, y),
        }
    }

    fn lifted(id: u64) -> touch::Event {
        touch::Event::FingerLifted {
            id: touch::Finger(id),
            position: Point::ORIGIN,
        }
    }

    #[test]
    fn single_finger_does_not_pinch() {
        let mut pinch = TouchPinch::default();
        assert!(feed(&mut pinch, pressed(0, 50.0, 50.0)).is_none());
        assert!(feed(&mut pinch, moved(0, 80.0, 60.0)).is_none());
        assert!(!pinch.is_pinching());
    }

    #[test]
    fn second_finger_begins_at_local_midpoint() {
        let mut pinch = TouchPinch::default();
        feed(&mut pinch, pressed(0, 60.0, 70.0));
        let began = feed(&mut pinch, pressed(1, 100.0, 70.0)).expect("pinch begins");

        assert_eq!(began.state, GestureState::Began);
        assert_abs_diff_eq!(began.scale_factor, 1.0);
        assert_abs_diff_eq!(began.location.x, 70.0);
        assert_abs_diff_eq!(began.location.y, 50.0);
        assert_eq!(began.surface, SurfaceSize::new(200.0, 100.0));
    }

    #[test]
    fn spreading_fingers_reports_distance_ratio() {
        let mut pinch = TouchPinch::default();
        feed(&mut pinch, pressed(0, 60.0, 70.0));
        feed(&mut pinch, pressed(1, 100.0, 70.0));

        let changed = feed(&mut pinch, moved(1, 140.0, 70.0)).expect("pinch changes");
        assert_eq!(changed.state, GestureState::Changed);
        assert_abs_diff_eq!(changed.scale_factor, 2.0);

        let changed = feed(&mut pinch, moved(0, 120.0, 70.0)).expect("pinch changes");
        assert_abs_diff_eq!(changed.scale_factor, 0.5);
    }

    #[test]
    fn lifting_a_finger_ends_with_last_factor() {
        let mut pinch = TouchPinch::default();
        feed(&mut pinch, pressed(0, 60.0, 70.0));
        feed(&mut pinch, pressed(1, 100.0, 70.0));
        feed(&mut pinch, moved(1, 120.0, 70.0));

        let ended = feed(&mut pinch, lifted(0)).expect("pinch ends");
        assert_eq!(ended.state, GestureState::Ended);
        assert_abs_diff_eq!(ended.scale_factor, 1.5);
        assert!(!pinch.is_pinching());

        // The remaining finger alone cannot produce further events.
        assert!(feed(&mut pinch, moved(1, 150.0, 70.0)).is_none());
    }

    #[test]
    fn lost_finger_cancels() {
        let mut pinch = TouchPinch::default();
        feed(&mut pinch, pressed(0, 60.0, 70.0));
        feed(&mut pinch, pressed(1, 100.0, 70.0));

        let cancelled = feed(
            &mut pinch,
            touch::Event::FingerLost {
                id: touch::Finger(1),
                position: Point::ORIGIN,
            },
        )
        .expect("pinch cancels");
        assert_eq!(cancelled.state, GestureState::Cancelled);
    }

    #[test]
    fn presses_outside_the_surface_are_ignored() {
        let mut pinch = TouchPinch::default();
        feed(&mut pinch, pressed(0, 60.0, 70.0));
        assert!(feed(&mut pinch, pressed(1, 500.0, 70.0)).is_none());
        assert!(!pinch.is_pinching());
    }

    #[test]
    fn coincident_fingers_wait_for_separation() {
        let mut pinch = TouchPinch::default();
        feed(&mut pinch, pressed(0, 60.0, 70.0));
        assert!(feed(&mut pinch, pressed(1, 60.0, 70.0)).is_none());

        let began = feed(&mut pinch, moved(1, 80.0, 70.0)).expect("pinch begins once apart");
        assert_eq!(began.state, GestureState::Began);
    }

    #[test]
    fn third_finger_is_ignored() {
        let mut pinch = TouchPinch::default();
        feed(&mut pinch, pressed(0, 60.0, 70.0));
        feed(&mut pinch, pressed(1, 100.0, 70.0));
        assert!(feed(&mut pinch, pressed(2, 80.0, 90.0)).is_none());
        assert!(feed(&mut pinch, moved(2, 20.0, 30.0)).is_none());
        assert!(feed(&mut pinch, lifted(2)).is_none());
        assert!(pinch.is_pinching());
    }
}
