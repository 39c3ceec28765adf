// SPDX-License-Identifier: MPL-2.0
//! Pinch gesture recognition and interpretation.
//!
//! Raw input flows through two layers before it reaches the view:
//!
//! - a [`GestureSource`] ([`TouchPinch`] or [`DragPinch`]) turns Iced input
//!   events into [`PinchEvent`]s (state, scale factor, location, surface size);
//! - the [`GestureInterpreter`] turns a [`PinchEvent`] into a
//!   [`TransformSignal`] (scale delta and normalized anchor).
//!
//! Neither layer touches view state. The zoomable view receives the signal as a
//! value and decides what to do with it.

pub mod drag;
pub mod interpreter;
pub mod source;
pub mod touch;

pub use drag::DragPinch;
pub use interpreter::GestureInterpreter;
pub use source::{GestureSource, PinchSurfaceState};
pub use touch::TouchPinch;

use iced::{Point, Size};

/// Lifecycle phase of a pinch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureState {
    Began,
    Changed,
    Ended,
    Cancelled,
}

impl GestureState {
    /// Returns true while fingers are down and the scale should track them.
    #[must_use]
    pub fn is_live(self) -> bool {
        matches!(self, GestureState::Began | GestureState::Changed)
    }
}

/// A point expressed as a fraction of a surface's width and height.
///
/// Both coordinates are guaranteed to lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPoint {
    x: f32,
    y: f32,
}

impl NormalizedPoint {
    /// Resting anchor used when no gesture is in progress (the surface center).
    pub const NEUTRAL: Self = Self { x: 0.5, y: 0.5 };

    /// Creates a normalized point, clamping both coordinates to `[0, 1]`.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }

    /// Normalizes a surface-local pixel location.
    ///
    /// Returns `None` for degenerate surfaces or non-finite locations.
    #[must_use]
    pub fn from_location(location: Point, surface: SurfaceSize) -> Option<Self> {
        if surface.is_degenerate() || !location.x.is_finite() || !location.y.is_finite() {
            return None;
        }
        Some(Self::new(
            location.x / surface.width,
            location.y / surface.height,
        ))
    }

    #[must_use]
    pub fn x(self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> f32 {
        self.y
    }

    /// Linear interpolation towards `target`; `t = 0` is `self`, `t = 1` is `target`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f32) -> Self {
        Self::new(
            self.x + (target.x - self.x) * t,
            self.y + (target.y - self.y) * t,
        )
    }
}

impl Default for NormalizedPoint {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Size of the gesture-capturing surface in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A surface with no usable area cannot normalize anything.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

impl From<Size> for SurfaceSize {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Raw pinch event as reported by a [`GestureSource`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchEvent {
    pub state: GestureState,
    /// Scale relative to the gesture start (1.0 = unchanged).
    pub scale_factor: f32,
    /// Pinch location in surface-local pixels.
    pub location: Point,
    pub surface: SurfaceSize,
}

impl PinchEvent {
    #[must_use]
    pub fn new(
        state: GestureState,
        scale_factor: f32,
        location: Point,
        surface: impl Into<SurfaceSize>,
    ) -> Self {
        Self {
            state,
            scale_factor,
            location,
            surface: surface.into(),
        }
    }
}

/// Normalized output of the [`GestureInterpreter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSignal {
    /// Additive scale offset; `0.0` means no zoom, effective scale is `1 + delta`.
    pub scale_delta: f32,
    /// Locked anchor while a gesture is live, `None` when a reset is requested.
    pub anchor: Option<NormalizedPoint>,
}

impl TransformSignal {
    /// Signal asking the view to return to rest.
    pub const RESET: Self = Self {
        scale_delta: 0.0,
        anchor: None,
    };
}
