// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::exp;

/// Default decay rate for released-pan momentum, per millisecond.
///
/// With `v(t) = v0 * e^(-k*t)`, a rate of `0.002` halves the velocity
/// roughly every 350 ms and limits the total travel to `v0 / k`, i.e.
/// 500 px per px/ms of release speed. Tunable; not a contract.
pub const MOMENTUM_DECAY: f64 = 0.002;

/// Speed (px/ms) below which momentum is considered at rest.
pub const REST_SPEED: f64 = 0.02;

/// Inertial translation decay after a pan release.
///
/// `Momentum` integrates an exponentially decaying velocity into
/// per-frame displacements. Each axis can be halted independently when
/// the owning session clamps translation against a pan bound, so motion
/// along the free axis keeps decaying after the other axis has stopped
/// at its edge.
#[derive(Clone, Copy, Debug)]
pub struct Momentum {
    velocity: Vec2,
    decay: f64,
}

impl Momentum {
    /// Creates a momentum from a release velocity in px/ms and a decay
    /// rate per millisecond.
    ///
    /// A non-finite velocity component is treated as zero; a non-finite
    /// or non-positive decay falls back to [`MOMENTUM_DECAY`].
    #[must_use]
    pub fn new(velocity: Vec2, decay: f64) -> Self {
        let velocity = Vec2::new(
            if velocity.x.is_finite() { velocity.x } else { 0.0 },
            if velocity.y.is_finite() { velocity.y } else { 0.0 },
        );
        let decay = if decay.is_finite() && decay > 0.0 {
            decay
        } else {
            MOMENTUM_DECAY
        };
        Self { velocity, decay }
    }

    /// Returns the current velocity in px/ms.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Advances the decay by `dt_ms` and returns the displacement covered
    /// during that interval.
    ///
    /// The displacement is the exact integral of the decaying velocity,
    /// `v * (1 - e^(-k*dt)) / k`, so two 8 ms steps travel the same
    /// distance as one 16 ms step. A non-finite or non-positive `dt_ms`
    /// is ignored and yields zero displacement.
    pub fn step(&mut self, dt_ms: f64) -> Vec2 {
        if !(dt_ms.is_finite() && dt_ms > 0.0) {
            return Vec2::ZERO;
        }
        let retain = exp(-self.decay * dt_ms);
        let displacement = self.velocity * ((1.0 - retain) / self.decay);
        self.velocity = self.velocity * retain;
        displacement
    }

    /// Stops motion along the X axis; the Y axis keeps decaying.
    pub fn halt_x(&mut self) {
        self.velocity.x = 0.0;
    }

    /// Stops motion along the Y axis; the X axis keeps decaying.
    pub fn halt_y(&mut self) {
        self.velocity.y = 0.0;
    }

    /// Returns `true` once the remaining speed has dropped below
    /// [`REST_SPEED`].
    #[must_use]
    pub fn is_resting(&self) -> bool {
        self.velocity.hypot2() < REST_SPEED * REST_SPEED
    }
}
