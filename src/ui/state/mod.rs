// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State that the zoomable view owns, kept apart from the widget code so it can
//! be exercised without a renderer.

pub mod reset;
pub mod transform;

pub use reset::{ease_in_out, ResetAnimation};
pub use transform::ViewTransformState;
