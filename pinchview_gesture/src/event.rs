// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Phase of a continuous gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// First callback of the gesture; baselines are captured here.
    Start,
    /// Continuous delta relative to the gesture start.
    Update,
    /// Fingers lifted; release effects (momentum, snap-back) run here.
    End,
}

/// A recognized gesture event, dispatched through
/// [`ViewportSession::handle`](crate::ViewportSession::handle).
///
/// Events for one session must arrive in temporal order: `Start` before
/// any `Update`, all `Update`s before `End`. Enforcing that ordering is
/// the recognizer's contract, not this crate's.
///
/// All continuous payloads are expressed relative to the gesture start,
/// not to the previous update, so rounding error does not accumulate
/// across a long gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A pinch (two-finger scale) gesture.
    Pinch {
        /// Gesture phase.
        phase: GesturePhase,
        /// Scale ratio relative to the gesture start; `1.0` at `Start`.
        /// Ignored for `Start` and `End`.
        scale_factor: f64,
    },
    /// A pan (drag) gesture.
    Pan {
        /// Gesture phase.
        phase: GesturePhase,
        /// Total translation since the gesture start, in view pixels.
        /// Ignored for `Start`.
        delta: Vec2,
        /// Release velocity in px/ms; only meaningful at `End`, where
        /// `None` (or a negligible speed) releases without momentum.
        velocity: Option<Vec2>,
    },
    /// A discrete tap.
    Tap {
        /// Number of taps; only `2` (double tap) has an effect.
        count: u32,
        /// Tap location in viewport-local coordinates.
        position: Point,
    },
}
