// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview Gesture: the gesture-driven viewport session for zoomable
//! media views.
//!
//! This crate turns recognized gesture deltas into a bounded viewport
//! transform. It owns the state machine between a platform gesture
//! recognizer and a renderer:
//! - Pinch deltas become a clamped zoom, with translation re-bounded so
//!   the zoom stays visually centered.
//! - Pan deltas become bounded translation while zoomed in.
//! - A double tap toggles between the resting transform and a target zoom
//!   centered on the tap point.
//! - A released pan hands off to momentum that decays against the pan
//!   bounds.
//!
//! The crate does **not** recognize gestures from raw touches, paint
//! anything, or own a clock. Callers are expected to:
//! - Feed recognized [`GestureEvent`]s into [`ViewportSession::handle`] in
//!   temporal order (`Start` before `Update`s before `End` per gesture).
//! - Drive [`ViewportSession::step`] from their animation frame source
//!   while [`ViewportSession::is_settling`] reports motion in flight.
//! - Apply the committed [`TransformState`] when painting, and use
//!   [`SessionUpdate::zoom_change`] to suppress competing gestures (such
//!   as swipe-to-next-image) while zoomed.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pinchview_gesture::{GestureEvent, ViewportSession};
//! use pinchview_transform::ViewportConfig;
//!
//! let config = ViewportConfig::new(Size::new(300.0, 600.0)).unwrap();
//! let mut session = ViewportSession::new(config);
//!
//! // Double-tap 75 px right of and 150 px below center.
//! let update = session.handle(GestureEvent::Tap {
//!     count: 2,
//!     position: Point::new(225.0, 450.0),
//! });
//! assert_eq!(update.zoom_change, Some(2.0));
//!
//! // Drive the eased zoom-in to completion.
//! while session.is_settling() {
//!     session.step(16.0);
//! }
//! assert_eq!(session.transform().scale, 2.0);
//! ```
//!
//! ## Design notes
//!
//! - Pinch and pan are **not** modes: both gestures may be active at once,
//!   each against its own baseline captured at gesture start, so a
//!   pinch-and-drag in one continuous motion behaves naturally.
//! - The session reports state changes as data ([`SessionUpdate`]) rather
//!   than invoking host callbacks, so it stays testable without any UI
//!   framework.
//! - Malformed numeric input (NaN/infinity from a misbehaving recognizer)
//!   discards the event and retains the last committed transform; nothing
//!   non-finite ever reaches the renderer.
//!
//! This crate is `no_std`.

#![no_std]

mod event;
mod pan;
mod pinch;
mod session;
mod tap;

pub use event::{GestureEvent, GesturePhase};
pub use pan::MAX_FLING_SPEED;
pub use pinch::SNAP_BACK_BAND;
pub use session::{
    Activity, SessionDebugInfo, SessionUpdate, ViewportSession, RECENTER_DURATION_MS,
    RESET_DURATION_MS, ZOOM_DURATION_MS,
};

// Re-exported so hosts only need this crate for the common path.
pub use pinchview_transform::TransformState;
