// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch scaling: baseline-relative zoom with a release snap-back band.

use pinchview_transform::ViewportConfig;

/// Multiplier on `min_zoom` under which a released pinch snaps the view
/// back to the resting transform.
///
/// Releasing a pinch just above the zoom floor would otherwise leave a
/// shaky "stuck at 1.02x" state. The 10% band is a feel tunable, not a
/// contract.
pub const SNAP_BACK_BAND: f64 = 1.1;

/// Scale produced by a pinch update, relative to the scale captured at
/// gesture start.
///
/// Returns `None` for a non-finite or non-positive factor; the caller
/// discards the event and keeps the committed scale.
pub(crate) fn scaled(
    config: &ViewportConfig,
    baseline_scale: f64,
    scale_factor: f64,
) -> Option<f64> {
    if !(scale_factor.is_finite() && scale_factor > 0.0) {
        return None;
    }
    Some(config.clamp_zoom(baseline_scale * scale_factor))
}

/// Whether a pinch released at `scale` is close enough to the zoom floor
/// to snap the view back to rest.
#[must_use]
pub(crate) fn should_snap_back(config: &ViewportConfig, scale: f64) -> bool {
    scale < config.min_zoom() * SNAP_BACK_BAND
}
