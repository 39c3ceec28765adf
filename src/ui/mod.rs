// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": the [`zoom_view`] component owns its
//! state and reports side effects to the application as values.
//!
//! - [`zoom_view`] - Pinch-zoomable image view and its canvas surface
//! - [`state`] - Transform state and the reset animation, free of widget code
//! - [`components`] - Drawing helpers (checkerboard)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod state;
pub mod theming;
pub mod zoom_view;
