// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;
use kurbo::Vec2;
use pinchview_motion::{Momentum, Tween, MOMENTUM_DECAY};
use pinchview_transform::{TransformState, ViewportConfig};

use crate::event::{GestureEvent, GesturePhase};
use crate::{pan, pinch, tap};

/// Duration of the snap-back reset after a pinch released near the zoom
/// floor, in milliseconds.
pub const RESET_DURATION_MS: f64 = 220.0;

/// Duration of the double-tap zoom transition, in milliseconds.
pub const ZOOM_DURATION_MS: f64 = 250.0;

/// Duration of the animated return-to-center while pinched at or below
/// unit scale, in milliseconds.
pub const RECENTER_DURATION_MS: f64 = 180.0;

bitflags! {
    /// What a session is currently doing.
    ///
    /// Pinch and pan are not exclusive modes: both flags may be set at
    /// once during a simultaneous pinch-and-drag.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Activity: u8 {
        /// A pinch gesture is between `Start` and `End`.
        const PINCH = 1 << 0;
        /// A pan gesture is between `Start` and `End`.
        const PAN = 1 << 1;
        /// Momentum or an eased transition is in flight; keep driving
        /// [`ViewportSession::step`].
        const SETTLING = 1 << 2;
    }
}

/// Result of handling one event or clock step: the committed transform
/// plus an optional zoom-change notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionUpdate {
    /// The committed transform after this event; apply it when painting.
    pub transform: TransformState,
    /// Set when the logical zoom changed: the new scale for a committed
    /// pinch change, or the transition target when a double tap or
    /// snap-back begins. Hosts use this to suppress competing gestures
    /// (such as swipe-to-next-image) while the scale is past 1.
    pub zoom_change: Option<f64>,
}

/// In-flight autonomous motion, advanced by [`ViewportSession::step`].
#[derive(Clone, Copy, Debug)]
enum Settle {
    /// Inertial translation after a pan release.
    Momentum(Momentum),
    /// Translation easing back to center while a live pinch holds the
    /// scale at or below 1. Only the translation component applies; the
    /// pinch owns the scale.
    Recenter(Tween),
    /// Full-transform transition: double-tap zoom or snap-back reset.
    Ease(Tween),
}

/// Gesture-driven viewport session for one visible image.
///
/// The session owns the committed [`TransformState`], the per-gesture
/// baselines, and any in-flight settle motion. Gesture callbacks are
/// synchronous and run to completion on the UI-driving thread; there is
/// no internal locking and no blocking operation.
///
/// When the displayed image identity changes, call
/// [`ViewportSession::reset`]: it cancels in-flight motion and
/// reinitializes the transform synchronously, so nothing from the old
/// image leaks into the new one's first frame.
#[derive(Clone, Copy, Debug)]
pub struct ViewportSession {
    config: ViewportConfig,
    state: TransformState,
    pinch_baseline: Option<f64>,
    pan_baseline: Option<Vec2>,
    settle: Option<Settle>,
}

impl ViewportSession {
    /// Creates an idle session at the resting transform.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            config,
            state: TransformState::IDENTITY,
            pinch_baseline: None,
            pan_baseline: None,
            settle: None,
        }
    }

    /// Returns the session's configuration.
    #[must_use]
    pub fn config(&self) -> ViewportConfig {
        self.config
    }

    /// Returns the committed transform.
    #[must_use]
    pub fn transform(&self) -> TransformState {
        self.state
    }

    /// Returns the current activity flags.
    #[must_use]
    pub fn activity(&self) -> Activity {
        let mut activity = Activity::empty();
        if self.pinch_baseline.is_some() {
            activity |= Activity::PINCH;
        }
        if self.pan_baseline.is_some() {
            activity |= Activity::PAN;
        }
        if self.settle.is_some() {
            activity |= Activity::SETTLING;
        }
        activity
    }

    /// Returns `true` while momentum or an eased transition is in flight.
    ///
    /// Hosts drive [`ViewportSession::step`] from their animation clock
    /// while this holds.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Reinitializes the session for a new image identity.
    ///
    /// Cancels any in-flight momentum or transition and returns the
    /// transform to rest, synchronously.
    pub fn reset(&mut self) {
        self.settle = None;
        self.pinch_baseline = None;
        self.pan_baseline = None;
        self.state = TransformState::IDENTITY;
    }

    /// Handles one recognized gesture event.
    ///
    /// Events must arrive in temporal order per gesture (`Start`, then
    /// `Update`s, then `End`); pinch and pan streams may interleave. A
    /// malformed event (non-finite payload, or an `Update` without a
    /// `Start`) is discarded and the committed transform is retained.
    pub fn handle(&mut self, event: GestureEvent) -> SessionUpdate {
        let zoom_change = match event {
            GestureEvent::Pinch {
                phase,
                scale_factor,
            } => self.on_pinch(phase, scale_factor),
            GestureEvent::Pan {
                phase,
                delta,
                velocity,
            } => self.on_pan(phase, delta, velocity),
            GestureEvent::Tap { count, position } => self.on_tap(count, position),
        };
        self.emit(zoom_change)
    }

    /// Advances in-flight motion by `dt_ms` of the host's animation clock.
    ///
    /// No-op while idle, and for a non-finite or non-positive `dt_ms`.
    pub fn step(&mut self, dt_ms: f64) -> SessionUpdate {
        if !(dt_ms.is_finite() && dt_ms > 0.0) {
            return self.emit(None);
        }
        match &mut self.settle {
            None => {}
            Some(Settle::Momentum(momentum)) => {
                let proposed = self.state.translation + momentum.step(dt_ms);
                let bounded = self.config.clamp_translation(self.state.scale, proposed);
                // Hitting a bound stops that axis; the other keeps decaying.
                if bounded.x != proposed.x {
                    momentum.halt_x();
                }
                if bounded.y != proposed.y {
                    momentum.halt_y();
                }
                self.state.translation = bounded;
                if momentum.is_resting() {
                    self.settle = None;
                }
            }
            Some(Settle::Recenter(tween)) => {
                // Scale belongs to the live pinch; only the translation
                // component of the tween applies.
                self.state.translation = tween.step(dt_ms).translation;
                if tween.is_finished() {
                    self.settle = None;
                }
            }
            Some(Settle::Ease(tween)) => {
                self.state = tween.step(dt_ms).clamped(&self.config);
                if tween.is_finished() {
                    self.settle = None;
                }
            }
        }
        self.emit(None)
    }

    /// Snapshot of the session state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SessionDebugInfo {
        SessionDebugInfo {
            config: self.config,
            transform: self.state,
            activity: self.activity(),
        }
    }

    fn emit(&self, zoom_change: Option<f64>) -> SessionUpdate {
        SessionUpdate {
            transform: self.state,
            zoom_change,
        }
    }

    fn on_pinch(&mut self, phase: GesturePhase, scale_factor: f64) -> Option<f64> {
        match phase {
            GesturePhase::Start => {
                // A fresh grab interrupts any settle; the pinch owns the
                // scale from here.
                self.settle = None;
                self.pinch_baseline = Some(self.state.scale);
                None
            }
            GesturePhase::Update => {
                let baseline = self.pinch_baseline?;
                let new_scale = pinch::scaled(&self.config, baseline, scale_factor)?;
                let changed = new_scale != self.state.scale;
                self.state.scale = new_scale;
                if new_scale > 1.0 {
                    // Zooming out shrinks the bounds; translation may
                    // need to shrink with them.
                    self.state.translation = self
                        .config
                        .clamp_translation(new_scale, self.state.translation);
                    if matches!(self.settle, Some(Settle::Recenter(_))) {
                        self.settle = None;
                    }
                } else if self.state.translation != Vec2::ZERO
                    && !matches!(self.settle, Some(Settle::Recenter(_)))
                {
                    // At or below fit size the image must recenter, but
                    // animated rather than an instant snap.
                    self.settle = Some(Settle::Recenter(Tween::new(
                        self.state,
                        TransformState::new(new_scale, Vec2::ZERO),
                        RECENTER_DURATION_MS,
                    )));
                }
                changed.then_some(new_scale)
            }
            GesturePhase::End => {
                self.pinch_baseline = None;
                if pinch::should_snap_back(&self.config, self.state.scale)
                    && self.state != TransformState::IDENTITY
                {
                    let reported = (self.state.scale != 1.0).then_some(1.0);
                    self.settle = Some(Settle::Ease(Tween::new(
                        self.state,
                        TransformState::IDENTITY,
                        RESET_DURATION_MS,
                    )));
                    reported
                } else {
                    None
                }
            }
        }
    }

    fn on_pan(
        &mut self,
        phase: GesturePhase,
        delta: Vec2,
        velocity: Option<Vec2>,
    ) -> Option<f64> {
        match phase {
            GesturePhase::Start => {
                // Grabbing stops a fling. Tweens keep running: a pan at or
                // below fit size is a no-op and must not fight the
                // pinch-driven recenter or a reset in flight.
                if matches!(self.settle, Some(Settle::Momentum(_))) {
                    self.settle = None;
                }
                self.pan_baseline = Some(self.state.translation);
                None
            }
            GesturePhase::Update => {
                let baseline = self.pan_baseline?;
                if let Some(translation) = pan::dragged(&self.config, &self.state, baseline, delta)
                {
                    self.state.translation = translation;
                }
                None
            }
            GesturePhase::End => {
                self.pan_baseline = None;
                if self.state.is_zoomed() && self.settle.is_none() {
                    if let Some(release) = velocity.and_then(pan::capped_fling) {
                        let momentum = Momentum::new(release, MOMENTUM_DECAY);
                        if !momentum.is_resting() {
                            self.settle = Some(Settle::Momentum(momentum));
                        }
                    }
                }
                None
            }
        }
    }

    fn on_tap(&mut self, count: u32, position: kurbo::Point) -> Option<f64> {
        if count != 2 || !position.is_finite() {
            return None;
        }
        if self.state.is_zoomed() {
            // Deterministic toggle back to rest, not a zoom-level cycle.
            self.settle = Some(Settle::Ease(Tween::new(
                self.state,
                TransformState::IDENTITY,
                ZOOM_DURATION_MS,
            )));
            Some(1.0)
        } else {
            let target = tap::zoom_target(&self.config, position)?;
            if target == self.state {
                return None;
            }
            self.settle = Some(Settle::Ease(Tween::new(
                self.state,
                target,
                ZOOM_DURATION_MS,
            )));
            Some(target.scale)
        }
    }
}

/// Debug snapshot of a [`ViewportSession`].
#[derive(Clone, Copy, Debug)]
pub struct SessionDebugInfo {
    /// The session's immutable configuration.
    pub config: ViewportConfig,
    /// The committed transform.
    pub transform: TransformState,
    /// Current activity flags.
    pub activity: Activity,
}
