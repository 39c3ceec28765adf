// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Reset animation**: Duration of the return-to-rest transition
//! - **Drag pinch**: Sensitivity of the mouse-driven synthetic pinch
//! - **Pinch factor**: Bounds on the scale factor a recognizer may report

// ==========================================================================
// Reset Animation Defaults
// ==========================================================================

/// Default duration of the eased return to rest after a pinch ends.
pub const DEFAULT_RESET_DURATION_MS: u64 = 350;

/// Minimum reset duration (0 snaps back instantly).
pub const MIN_RESET_DURATION_MS: u64 = 0;

/// Maximum reset duration.
pub const MAX_RESET_DURATION_MS: u64 = 2000;

// ==========================================================================
// Drag Pinch Defaults
// ==========================================================================

/// Vertical drag distance (pixels) that multiplies the scale by e.
pub const DEFAULT_DRAG_SENSITIVITY_PX: f32 = 200.0;

/// Minimum drag sensitivity in pixels.
pub const MIN_DRAG_SENSITIVITY_PX: f32 = 20.0;

/// Maximum drag sensitivity in pixels.
pub const MAX_DRAG_SENSITIVITY_PX: f32 = 2000.0;

// ==========================================================================
// Pinch Factor Bounds
// ==========================================================================

/// Smallest scale factor a synthetic pinch reports (10% of the start size).
pub const MIN_PINCH_FACTOR: f32 = 0.1;

/// Largest scale factor a synthetic pinch reports (1000% of the start size).
pub const MAX_PINCH_FACTOR: f32 = 10.0;

// Compile-time validation
const _: () = {
    assert!(DEFAULT_RESET_DURATION_MS <= MAX_RESET_DURATION_MS);
    assert!(MIN_DRAG_SENSITIVITY_PX > 0.0);
    assert!(MIN_DRAG_SENSITIVITY_PX <= DEFAULT_DRAG_SENSITIVITY_PX);
    assert!(DEFAULT_DRAG_SENSITIVITY_PX <= MAX_DRAG_SENSITIVITY_PX);
    assert!(MIN_PINCH_FACTOR > 0.0);
    assert!(MIN_PINCH_FACTOR < 1.0);
    assert!(MAX_PINCH_FACTOR > 1.0);
};
