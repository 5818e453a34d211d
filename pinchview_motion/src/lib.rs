// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview Motion: host-clock-driven motion primitives for zoomable
//! media views.
//!
//! This crate models the two kinds of autonomous motion a pinch-zoom
//! viewer performs after the fingers lift:
//! - [`Momentum`]: inertial translation with exponential velocity decay,
//!   used when a pan is released with velocity.
//! - [`Tween`]: an eased transition between two committed transforms, used
//!   for double-tap zoom and for snapping back to the resting transform.
//!
//! Neither type owns a clock. Both expose a `step(dt_ms)` method the
//! embedder drives from whatever animation source the platform provides
//! (a display-link frame callback, a timer, a test loop). Each step is a
//! cheap, non-blocking recomputation; the math is frame-rate independent,
//! so irregular frame pacing does not change the trajectory.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use pinchview_motion::{Momentum, MOMENTUM_DECAY};
//!
//! // Released panning rightwards at 2 px/ms.
//! let mut momentum = Momentum::new(Vec2::new(2.0, 0.0), MOMENTUM_DECAY);
//!
//! // Drive it with 16 ms frames; displacement shrinks every frame.
//! let first = momentum.step(16.0);
//! let second = momentum.step(16.0);
//! assert!(second.x < first.x);
//! assert!(first.y == 0.0 && second.y == 0.0);
//! ```
//!
//! Bounds are the caller's concern: the session that owns the transform
//! clamps translation after every momentum step and halts the axis that
//! clamped ([`Momentum::halt_x`] / [`Momentum::halt_y`]), which is what
//! makes the image stop exactly at its edge instead of overshooting.
//!
//! This crate is `no_std`; it requires either the `std` (default) or
//! `libm` feature for the decay exponential.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("pinchview_motion requires either the `std` or `libm` feature");

mod momentum;
mod tween;

pub use momentum::{Momentum, MOMENTUM_DECAY, REST_SPEED};
pub use tween::Tween;

/// `e^x`, routed through `std` or `libm` depending on build mode.
#[cfg(feature = "std")]
pub(crate) fn exp(x: f64) -> f64 {
    x.exp()
}

/// `e^x`, routed through `std` or `libm` depending on build mode.
#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn exp(x: f64) -> f64 {
    libm::exp(x)
}
