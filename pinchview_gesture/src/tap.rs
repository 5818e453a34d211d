// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap zoom targeting: center the zoom on the tapped point.

use kurbo::{Point, Vec2};
use pinchview_transform::{TransformState, ViewportConfig};

/// Target transform for a double tap at `position` while the view is at
/// rest.
///
/// The target scale is the configured double-tap zoom capped at
/// `max_zoom`. The translation maps the tap's offset from the viewport
/// center into the shift that keeps the tapped image point fixed under
/// the screen point as the scale grows:
///
/// ```text
/// center = (position - size / 2) * (target_scale - 1)
/// translation = clamp(-center)
/// ```
///
/// The `(position - center) * (scale - 1)` relationship is exact; it is
/// what makes the gesture read as "zoom into where I tapped" rather than
/// "zoom into the middle of the image".
///
/// Returns `None` for a non-finite position.
pub(crate) fn zoom_target(config: &ViewportConfig, position: Point) -> Option<TransformState> {
    if !position.is_finite() {
        return None;
    }
    let target_scale = config.double_tap_zoom().min(config.max_zoom());
    let half = config.size().to_vec2() / 2.0;
    let center = Vec2::new(
        (position.x - half.x) * (target_scale - 1.0),
        (position.y - half.y) * (target_scale - 1.0),
    );
    Some(TransformState::new(
        target_scale,
        config.clamp_translation(target_scale, -center),
    ))
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};
    use pinchview_transform::ViewportConfig;

    use super::zoom_target;

    fn config() -> ViewportConfig {
        ViewportConfig::new(Size::new(300.0, 600.0)).unwrap()
    }

    #[test]
    fn tap_offset_maps_linearly_into_translation() {
        // 75 px right of center, 150 px below center, doubling the scale:
        // the view shifts by exactly the offset, negated.
        let target = zoom_target(&config(), Point::new(225.0, 450.0)).unwrap();
        assert_eq!(target.scale, 2.0);
        assert_eq!(target.translation, Vec2::new(-75.0, -150.0));
    }

    #[test]
    fn tap_at_center_does_not_translate() {
        let target = zoom_target(&config(), Point::new(150.0, 300.0)).unwrap();
        assert_eq!(target.scale, 2.0);
        assert_eq!(target.translation, Vec2::ZERO);
    }

    #[test]
    fn corner_tap_lands_exactly_on_the_pan_bound() {
        // A corner tap asks for (150, 300) px of shift, which is exactly
        // the pan limit at scale 2: in-view taps never need clamping.
        let target = zoom_target(&config(), Point::new(0.0, 0.0)).unwrap();
        assert_eq!(target.translation, config().pan_limits(2.0));
        assert_eq!(target.translation, Vec2::new(150.0, 300.0));
    }

    #[test]
    fn out_of_view_tap_is_clamped_to_pan_bounds() {
        // Recognizers can report coordinates slightly outside the view;
        // the resulting shift is clamped rather than trusted.
        let target = zoom_target(&config(), Point::new(-100.0, 700.0)).unwrap();
        assert_eq!(target.translation, Vec2::new(150.0, -300.0));
    }

    #[test]
    fn double_tap_zoom_is_capped_at_max_zoom() {
        let config = config().with_double_tap_zoom(10.0).unwrap();
        let target = zoom_target(&config, Point::new(150.0, 300.0)).unwrap();
        assert_eq!(target.scale, 4.0);
    }

    #[test]
    fn non_finite_position_is_rejected() {
        assert_eq!(zoom_target(&config(), Point::new(f64::NAN, 0.0)), None);
        assert_eq!(zoom_target(&config(), Point::new(0.0, f64::INFINITY)), None);
    }
}
