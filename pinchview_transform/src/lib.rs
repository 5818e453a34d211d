// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview Transform: viewport transform state for zoomable media views.
//!
//! This crate provides the headless data model underneath a pinch-zoom /
//! pan image viewer:
//! - [`ViewportConfig`]: validated, immutable per-viewport configuration
//!   (view size, zoom limits, double-tap zoom).
//! - [`TransformState`]: the committed `{scale, translation}` record that a
//!   renderer applies as a 2D affine.
//! - Pan-bound math: the maximum translation magnitude permitted at a given
//!   scale, and clamping helpers that enforce it.
//!
//! It does **not** interpret gestures or drive animations. Callers are
//! expected to:
//! - Derive transform mutations from gesture input at a higher layer (for
//!   example with `pinchview_gesture`).
//! - Read the committed [`TransformState`] and apply
//!   [`TransformState::affine`] when painting, with no further clamping.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use pinchview_transform::{TransformState, ViewportConfig};
//!
//! // A 300x600 viewport with the default zoom limits (1..=4).
//! let config = ViewportConfig::new(Size::new(300.0, 600.0)).unwrap();
//!
//! // At scale 2 the image may pan half its overflow in each direction.
//! assert_eq!(config.pan_limits(2.0), Vec2::new(150.0, 300.0));
//!
//! // A proposed transform is clamped into the legal range before commit.
//! let proposed = TransformState::new(2.0, Vec2::new(500.0, -10.0));
//! let committed = proposed.clamped(&config);
//! assert_eq!(committed.translation, Vec2::new(150.0, -10.0));
//! ```
//!
//! ## Design notes
//!
//! - Scale is uniform; translation is expressed in view/device pixels with
//!   the unzoomed, centered image at `(0, 0)`.
//! - At `scale <= 1` the pan bounds collapse to zero: a fully visible image
//!   stays centered.
//! - Configuration is validated at construction and never mutated
//!   afterwards, so it can be shared by reference without locking.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod state;

pub use config::{ConfigError, ViewportConfig};
pub use state::TransformState;
