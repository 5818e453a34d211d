// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use pinchview_transform::TransformState;

/// Eased transition between two committed transforms.
///
/// Used for the double-tap zoom and for the snap-back to the resting
/// transform after a pinch below the zoom floor. Progress follows an
/// ease-out cubic, so motion starts fast and settles gently.
///
/// The terminal sample is exactly the target transform, with no residual
/// floating-point drift: a completed reset lands on `{1, (0, 0)}`
/// bit-for-bit.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: TransformState,
    to: TransformState,
    duration_ms: f64,
    elapsed_ms: f64,
}

impl Tween {
    /// Creates a transition from `from` to `to` over `duration_ms`.
    ///
    /// A non-finite or non-positive duration completes on the first step.
    #[must_use]
    pub fn new(from: TransformState, to: TransformState, duration_ms: f64) -> Self {
        let duration_ms = if duration_ms.is_finite() && duration_ms > 0.0 {
            duration_ms
        } else {
            0.0
        };
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Returns the transform this transition settles on.
    #[must_use]
    pub fn target(&self) -> TransformState {
        self.to
    }

    /// Advances the transition by `dt_ms` and returns the transform at the
    /// new eased progress.
    ///
    /// A non-finite or non-positive `dt_ms` leaves progress unchanged and
    /// returns the current sample.
    pub fn step(&mut self, dt_ms: f64) -> TransformState {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms += dt_ms;
        }
        self.sample()
    }

    /// Returns the transform at the current progress without advancing.
    #[must_use]
    pub fn sample(&self) -> TransformState {
        if self.is_finished() {
            return self.to;
        }
        let t = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.from.lerp(self.to, ease_out_cubic(t))
    }

    /// Returns `true` once the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;
    use pinchview_transform::TransformState;

    use super::{ease_out_cubic, Tween};

    #[test]
    fn terminal_sample_is_exactly_the_target() {
        let from = TransformState::new(2.0, Vec2::new(-75.0, -150.0));
        let mut tween = Tween::new(from, TransformState::IDENTITY, 220.0);

        let mut last = from;
        for _ in 0..100 {
            last = tween.step(16.0);
            if tween.is_finished() {
                break;
            }
        }
        assert!(tween.is_finished());
        assert_eq!(last, TransformState::IDENTITY);
        // Further steps stay pinned at the target.
        assert_eq!(tween.step(16.0), TransformState::IDENTITY);
    }

    #[test]
    fn progress_is_monotonic_in_scale() {
        let from = TransformState::IDENTITY;
        let to = TransformState::new(2.0, Vec2::new(40.0, 40.0));
        let mut tween = Tween::new(from, to, 250.0);

        let mut prev = from.scale;
        while !tween.is_finished() {
            let sample = tween.step(16.0);
            assert!(sample.scale >= prev);
            prev = sample.scale;
        }
        assert_eq!(prev, to.scale);
    }

    #[test]
    fn ease_out_cubic_endpoints_and_shape() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Ease-out: ahead of linear progress mid-way.
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn degenerate_duration_completes_immediately() {
        let to = TransformState::new(2.0, Vec2::ZERO);
        let mut tween = Tween::new(TransformState::IDENTITY, to, 0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.step(1.0), to);

        let mut tween = Tween::new(TransformState::IDENTITY, to, f64::NAN);
        assert_eq!(tween.step(1.0), to);
    }

    #[test]
    fn non_finite_dt_does_not_advance() {
        let to = TransformState::new(2.0, Vec2::ZERO);
        let mut tween = Tween::new(TransformState::IDENTITY, to, 200.0);
        let before = tween.sample();
        assert_eq!(tween.step(f64::NAN), before);
        assert_eq!(tween.step(-16.0), before);
        assert!(!tween.is_finished());
    }
}
