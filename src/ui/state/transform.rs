// SPDX-License-Identifier: MPL-2.0
//! Visual transform state of the zoomable view.

use crate::gesture::{NormalizedPoint, TransformSignal};

/// Scale and anchor currently applied to the image.
///
/// `scale` is additive around 1: the renderer applies `1 + scale`. The state is
/// only ever mutated by the zoomable view in response to gesture signals or
/// reset animation frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransformState {
    pub scale: f32,
    pub anchor_point: NormalizedPoint,
    pub is_anchor_locked: bool,
}

impl Default for ViewTransformState {
    fn default() -> Self {
        Self {
            scale: 0.0,
            anchor_point: NormalizedPoint::NEUTRAL,
            is_anchor_locked: false,
        }
    }
}

impl ViewTransformState {
    /// Uniform scale factor handed to the renderer.
    #[must_use]
    pub fn effective_scale(&self) -> f32 {
        1.0 + self.scale
    }

    /// True when nothing distinguishes this state from a freshly mounted view.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        *self == Self::default()
    }

    /// Tracks a live gesture signal one to one.
    pub fn apply_live(&mut self, signal: TransformSignal) {
        self.scale = signal.scale_delta;
        if let Some(anchor) = signal.anchor {
            self.anchor_point = anchor;
            self.is_anchor_locked = true;
        }
    }

    /// Writes an intermediate reset frame; the anchor is released.
    pub fn apply_frame(&mut self, scale: f32, anchor_point: NormalizedPoint) {
        self.scale = scale;
        self.anchor_point = anchor_point;
        self.is_anchor_locked = false;
    }

    /// Snaps to the exact rest values.
    pub fn settle(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_state_is_identity() {
        let state = ViewTransformState::default();
        assert!(state.is_at_rest());
        assert_abs_diff_eq!(state.effective_scale(), 1.0);
        assert_eq!(state.anchor_point, NormalizedPoint::NEUTRAL);
    }

    #[test]
    fn apply_live_tracks_signal_and_locks_anchor() {
        let mut state = ViewTransformState::default();
        let anchor = NormalizedPoint::new(0.2, 0.8);
        state.apply_live(TransformSignal {
            scale_delta: 0.6,
            anchor: Some(anchor),
        });

        assert_abs_diff_eq!(state.effective_scale(), 1.6);
        assert_eq!(state.anchor_point, anchor);
        assert!(state.is_anchor_locked);
        assert!(!state.is_at_rest());
    }

    #[test]
    fn settle_restores_exact_rest_values() {
        let mut state = ViewTransformState::default();
        state.apply_live(TransformSignal {
            scale_delta: -0.4,
            anchor: Some(NormalizedPoint::new(1.0, 0.0)),
        });
        state.settle();

        assert_eq!(state.scale, 0.0);
        assert_eq!(state.anchor_point, NormalizedPoint::NEUTRAL);
        assert!(!state.is_anchor_locked);
    }
}
