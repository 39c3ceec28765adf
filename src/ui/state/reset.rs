// SPDX-License-Identifier: MPL-2.0
//! Eased return-to-rest animation.
//!
//! The animation is a pure function of time: it remembers where it started
//! and samples the interpolated transform for any instant. The caller drives
//! it with animation frames and drops it when it reports completion.

use crate::gesture::NormalizedPoint;
use iced::animation::Easing;
use std::time::{Duration, Instant};

/// Ease-in-ease-out timing curve.
///
/// Maps linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`, slow at
/// both ends. Values outside the range are clamped; the endpoints map exactly.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    if t.is_nan() || t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    Easing::EaseInOut.value(t).clamp(0.0, 1.0)
}

/// In-flight reset from a released gesture's transform back to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResetAnimation {
    from_scale: f32,
    from_anchor: NormalizedPoint,
    started_at: Instant,
    duration: Duration,
}

impl ResetAnimation {
    #[must_use]
    pub fn new(
        from_scale: f32,
        from_anchor: NormalizedPoint,
        started_at: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            from_scale,
            from_anchor,
            started_at,
            duration,
        }
    }

    /// Linear progress in `[0, 1]`; instants before the start count as 0.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Scale and anchor at `now`, eased towards `(0, NEUTRAL)`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> (f32, NormalizedPoint) {
        let eased = ease_in_out(self.progress(now));
        let scale = self.from_scale * (1.0 - eased);
        let anchor = self.from_anchor.lerp(NormalizedPoint::NEUTRAL, eased);
        (scale, anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn easing_endpoints_are_exact() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(7.0), 1.0);
        assert_eq!(ease_in_out(f32::NAN), 0.0);
    }

    #[test]
    fn easing_follows_the_sine_ease_in_out_profile() {
        for t in [0.1_f32, 0.25, 0.6, 0.9] {
            let expected = (1.0 - (std::f32::consts::PI * t).cos()) / 2.0;
            assert_abs_diff_eq!(ease_in_out(t), expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn easing_is_symmetric_around_midpoint() {
        assert_abs_diff_eq!(ease_in_out(0.5), 0.5, epsilon = 1e-4);
        for t in [0.1_f32, 0.25, 0.4] {
            assert_abs_diff_eq!(ease_in_out(t) + ease_in_out(1.0 - t), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn easing_is_slow_at_the_ends_and_monotonic() {
        assert!(ease_in_out(0.1) < 0.1);
        assert!(ease_in_out(0.9) > 0.9);

        let mut previous = 0.0;
        for step in 1..=100 {
            let value = ease_in_out(step as f32 / 100.0);
            assert!(value >= previous, "easing decreased at step {step}");
            previous = value;
        }
    }

    #[test]
    fn sample_decays_scale_and_recenters_anchor() {
        let start = Instant::now();
        let duration = Duration::from_millis(350);
        let animation =
            ResetAnimation::new(0.6, NormalizedPoint::new(1.0, 1.0), start, duration);

        let (scale, anchor) = animation.sample(start);
        assert_abs_diff_eq!(scale, 0.6);
        assert_eq!(anchor, NormalizedPoint::new(1.0, 1.0));

        let (scale, anchor) = animation.sample(start + duration / 2);
        assert_abs_diff_eq!(scale, 0.3, epsilon = 1e-3);
        assert_abs_diff_eq!(anchor.x(), 0.75, epsilon = 1e-3);

        let (scale, anchor) = animation.sample(start + duration);
        assert_eq!(scale, 0.0);
        assert_eq!(anchor, NormalizedPoint::NEUTRAL);
        assert!(animation.is_finished(start + duration));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let start = Instant::now();
        let animation = ResetAnimation::new(0.5, NormalizedPoint::NEUTRAL, start, Duration::ZERO);
        assert!(animation.is_finished(start));
        assert_eq!(animation.sample(start).0, 0.0);
    }

    #[test]
    fn instants_before_start_count_as_start() {
        let start = Instant::now() + Duration::from_secs(1);
        let animation = ResetAnimation::new(
            0.5,
            NormalizedPoint::NEUTRAL,
            start,
            Duration::from_millis(350),
        );
        assert_eq!(animation.progress(Instant::now()), 0.0);
    }
}
