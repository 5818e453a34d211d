// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Size, Vec2};

/// Immutable configuration for one zoomable viewport.
///
/// `ViewportConfig` captures the view extent in device pixels together with
/// the zoom limits the viewer enforces. Construction validates every field
/// up front; a degenerate size or an inverted zoom range is rejected with a
/// [`ConfigError`] rather than producing a viewport whose clamping is
/// meaningless.
///
/// Once built, a config is never mutated and may be shared freely by
/// reference across sibling views.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    size: Size,
    min_zoom: f64,
    max_zoom: f64,
    double_tap_zoom: f64,
}

/// Default minimum zoom factor.
pub(crate) const DEFAULT_MIN_ZOOM: f64 = 1.0;
/// Default maximum zoom factor.
pub(crate) const DEFAULT_MAX_ZOOM: f64 = 4.0;
/// Default zoom factor targeted by a double tap.
pub(crate) const DEFAULT_DOUBLE_TAP_ZOOM: f64 = 2.0;

impl ViewportConfig {
    /// Creates a configuration for a viewport of the given device-pixel
    /// size, with default zoom limits (`1.0..=4.0`) and a default
    /// double-tap zoom of `2.0`.
    ///
    /// Returns [`ConfigError::InvalidViewportSize`] if either dimension is
    /// non-positive or non-finite.
    pub fn new(size: Size) -> Result<Self, ConfigError> {
        let config = Self {
            size,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            double_tap_zoom: DEFAULT_DOUBLE_TAP_ZOOM,
        };
        config.validate()
    }

    /// Returns a copy of this configuration with the given zoom limits.
    ///
    /// Returns [`ConfigError::InvalidZoomRange`] if either limit is
    /// non-positive or non-finite, or if `min_zoom > max_zoom`.
    pub fn with_zoom_range(self, min_zoom: f64, max_zoom: f64) -> Result<Self, ConfigError> {
        Self {
            min_zoom,
            max_zoom,
            ..self
        }
        .validate()
    }

    /// Returns a copy of this configuration with the given double-tap zoom.
    ///
    /// The value is capped at `max_zoom` when it is used, not here; this
    /// only rejects non-positive or non-finite values.
    pub fn with_double_tap_zoom(self, double_tap_zoom: f64) -> Result<Self, ConfigError> {
        Self {
            double_tap_zoom,
            ..self
        }
        .validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let Size { width, height } = self.size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidViewportSize { width, height });
        }
        let (min_zoom, max_zoom) = (self.min_zoom, self.max_zoom);
        if !(min_zoom.is_finite() && max_zoom.is_finite() && min_zoom > 0.0 && min_zoom <= max_zoom)
        {
            return Err(ConfigError::InvalidZoomRange { min_zoom, max_zoom });
        }
        if !(self.double_tap_zoom.is_finite() && self.double_tap_zoom > 0.0) {
            return Err(ConfigError::InvalidDoubleTapZoom(self.double_tap_zoom));
        }
        Ok(self)
    }

    /// Returns the viewport extent in device pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the minimum zoom factor.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Returns the maximum zoom factor.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Returns the zoom factor targeted by a double tap, before capping at
    /// [`ViewportConfig::max_zoom`].
    #[must_use]
    pub fn double_tap_zoom(&self) -> f64 {
        self.double_tap_zoom
    }

    /// Clamps a zoom factor into the configured `min_zoom..=max_zoom` range.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// Returns the maximum translation magnitude permitted on each axis at
    /// the given scale.
    ///
    /// The image overflows the viewport by `size * (scale - 1)` pixels in
    /// total, half of which may be revealed on each side. At `scale <= 1`
    /// both limits are zero: a fully visible image does not pan.
    #[must_use]
    pub fn pan_limits(&self, scale: f64) -> Vec2 {
        Vec2::new(
            ((self.size.width * scale - self.size.width) / 2.0).max(0.0),
            ((self.size.height * scale - self.size.height) / 2.0).max(0.0),
        )
    }

    /// Clamps a translation to the pan limits at the given scale, each axis
    /// independently.
    #[must_use]
    pub fn clamp_translation(&self, scale: f64, translation: Vec2) -> Vec2 {
        let limits = self.pan_limits(scale);
        Vec2::new(
            translation.x.clamp(-limits.x, limits.x),
            translation.y.clamp(-limits.y, limits.y),
        )
    }
}

/// Error rejecting a degenerate [`ViewportConfig`] at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The viewport width or height was non-positive or non-finite.
    InvalidViewportSize {
        /// Offending width in device pixels.
        width: f64,
        /// Offending height in device pixels.
        height: f64,
    },
    /// The zoom limits were non-positive, non-finite, or inverted.
    InvalidZoomRange {
        /// Offending minimum zoom factor.
        min_zoom: f64,
        /// Offending maximum zoom factor.
        max_zoom: f64,
    },
    /// The double-tap zoom was non-positive or non-finite.
    InvalidDoubleTapZoom(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewportSize { width, height } => {
                write!(f, "viewport size {width}x{height} is not positive and finite")
            }
            Self::InvalidZoomRange { min_zoom, max_zoom } => {
                write!(f, "zoom range {min_zoom}..={max_zoom} is not a positive, finite range")
            }
            Self::InvalidDoubleTapZoom(zoom) => {
                write!(f, "double-tap zoom {zoom} is not positive and finite")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
