// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::ViewportConfig;

/// Committed viewport transform: a uniform scale plus a translation in
/// view/device pixels.
///
/// This is the read model a renderer consumes. The transform is applied as
/// scale about the viewport center followed by translation (see
/// [`TransformState::affine`]); a renderer performs no further clamping.
///
/// A state with `scale = 1` and zero translation shows the image at its
/// fit size, centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Uniform zoom factor relative to the image's fit size.
    pub scale: f64,
    /// Translation in view/device pixels; `(0, 0)` is centered.
    pub translation: Vec2,
}

impl TransformState {
    /// The resting transform: unzoomed and centered.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a transform from a scale and a translation.
    #[must_use]
    pub fn new(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// Returns `true` when the view is zoomed in past its fit size.
    ///
    /// Hosts typically use this to suppress competing gestures such as
    /// swipe-to-next while the image is zoomed.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale > 1.0
    }

    /// Returns `true` when every component is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.scale.is_finite() && self.translation.is_finite()
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other`
    /// (at `t = 1`).
    ///
    /// Scale and translation share one interpolation parameter, which keeps
    /// intermediate states inside the pan bounds when both endpoints are:
    /// the bounds shrink linearly in scale, by the same factor as the
    /// interpolated translation.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            scale: self.scale + (other.scale - self.scale) * t,
            translation: self.translation + (other.translation - self.translation) * t,
        }
    }

    /// Clamps this transform into the legal range for `config`:
    /// `min_zoom <= scale <= max_zoom` and `|translation|` within the pan
    /// limits at the clamped scale.
    #[must_use]
    pub fn clamped(self, config: &ViewportConfig) -> Self {
        let scale = config.clamp_zoom(self.scale);
        Self {
            scale,
            translation: config.clamp_translation(scale, self.translation),
        }
    }

    /// Returns the affine a renderer applies: scale about `view_center`,
    /// then translate.
    #[must_use]
    pub fn affine(&self, view_center: Point) -> Affine {
        Affine::translate(self.translation) * Affine::scale_about(self.scale, view_center)
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}
