// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan translation: baseline-relative, bounded dragging while zoomed in.

use kurbo::Vec2;
use pinchview_transform::{TransformState, ViewportConfig};

/// Maximum release speed handed to momentum, in px/ms.
///
/// Matches the common platform baseline for maximum fling velocity
/// (8000 px/s). Recognizers occasionally report wild spikes on release;
/// capping keeps the fling distance sane without changing direction.
pub const MAX_FLING_SPEED: f64 = 8.0;

/// Translation produced by a pan update: the baseline captured at gesture
/// start plus the total delta since then, clamped to the pan bounds at the
/// current scale.
///
/// Returns `None` when the view is not zoomed in (`scale <= 1`, where
/// panning is a no-op by design and must not fight a pinch-driven
/// recenter) or when the delta is non-finite.
pub(crate) fn dragged(
    config: &ViewportConfig,
    state: &TransformState,
    baseline: Vec2,
    delta: Vec2,
) -> Option<Vec2> {
    if !state.is_zoomed() || !delta.is_finite() {
        return None;
    }
    Some(config.clamp_translation(state.scale, baseline + delta))
}

/// Release velocity after the fling cap: direction preserved, speed
/// limited to [`MAX_FLING_SPEED`].
///
/// Returns `None` for a non-finite velocity.
pub(crate) fn capped_fling(velocity: Vec2) -> Option<Vec2> {
    if !velocity.is_finite() {
        return None;
    }
    let speed2 = velocity.hypot2();
    if speed2 > MAX_FLING_SPEED * MAX_FLING_SPEED {
        Some(velocity * (MAX_FLING_SPEED / velocity.hypot()))
    } else {
        Some(velocity)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};
    use pinchview_transform::{TransformState, ViewportConfig};

    use super::{capped_fling, dragged, MAX_FLING_SPEED};

    fn config() -> ViewportConfig {
        ViewportConfig::new(Size::new(300.0, 600.0)).unwrap()
    }

    #[test]
    fn drag_applies_delta_from_baseline() {
        let state = TransformState::new(2.0, Vec2::new(10.0, 0.0));
        let dragged = dragged(&config(), &state, Vec2::new(10.0, 0.0), Vec2::new(5.0, -20.0));
        assert_eq!(dragged, Some(Vec2::new(15.0, -20.0)));
    }

    #[test]
    fn drag_clamps_to_pan_bounds() {
        let state = TransformState::new(2.0, Vec2::ZERO);
        let dragged = dragged(&config(), &state, Vec2::ZERO, Vec2::new(500.0, -500.0));
        assert_eq!(dragged, Some(Vec2::new(150.0, -300.0)));
    }

    #[test]
    fn drag_is_a_no_op_when_not_zoomed() {
        let state = TransformState::IDENTITY;
        assert_eq!(dragged(&config(), &state, Vec2::ZERO, Vec2::new(30.0, 30.0)), None);

        let state = TransformState::new(0.8, Vec2::ZERO);
        assert_eq!(dragged(&config(), &state, Vec2::ZERO, Vec2::new(30.0, 30.0)), None);
    }

    #[test]
    fn non_finite_delta_is_rejected() {
        let state = TransformState::new(2.0, Vec2::ZERO);
        assert_eq!(
            dragged(&config(), &state, Vec2::ZERO, Vec2::new(f64::NAN, 0.0)),
            None
        );
    }

    #[test]
    fn fling_cap_preserves_direction() {
        let capped = capped_fling(Vec2::new(30.0, 40.0)).unwrap();
        assert!((capped.hypot() - MAX_FLING_SPEED).abs() < 1e-12);
        // 3-4-5 triangle: direction survives the cap.
        assert!((capped.x / capped.y - 0.75).abs() < 1e-12);
    }

    #[test]
    fn slow_fling_passes_through_unchanged() {
        let v = Vec2::new(1.0, -2.0);
        assert_eq!(capped_fling(v), Some(v));
    }

    #[test]
    fn non_finite_fling_is_rejected() {
        assert_eq!(capped_fling(Vec2::new(f64::INFINITY, 0.0)), None);
        assert_eq!(capped_fling(Vec2::new(0.0, f64::NAN)), None);
    }
}
