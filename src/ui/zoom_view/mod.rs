// SPDX-License-Identifier: MPL-2.0
//! Pinch-zoomable image view.
//!
//! The [`component`] owns the transform state and the reset animation; the
//! [`surface`] is the canvas program that captures input and draws the image
//! scaled about the locked anchor.

pub mod component;
pub mod surface;

pub use component::{Effect, Message, Phase, State, ViewEnv};
pub use surface::{image_destination, PinchSurface};
