// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage View: headless pan and zoom control for a diagram canvas.
//!
//! [`ViewportController`] interprets pointer, touch, wheel, and keyboard
//! input and exposes the result as a [`ViewportState`] (pan offset, zoom
//! percentage, and interaction flags) plus a canvas-to-screen
//! [`ViewTransform`]. It does not own a window, a renderer, or event
//! listeners; the host forwards events and redraws when
//! [`ViewportController::revision`] changes.
//!
//! - **Zoom-to-point**: zooming keeps the canvas point under the focal point
//!   in place. Zoom is clamped to `[min_zoom, max_zoom]` (25% to 200% by
//!   default) and rounded to `zoom_precision` (0.5%).
//! - **Atomic commits**: zoom and pan always change together in one state
//!   replacement.
//! - **Panning**: by primary pointer or one touch, unbounded.
//! - **Pinch**: two touches zoom about their midpoint.
//! - **Wheel**: high-frequency trackpad input is coalesced into combined
//!   steps. Timestamps are supplied by the host in milliseconds.
//! - **Keyboard**: arrows pan, `+`/`=`/`-` zoom, `Escape` is handed back.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use lineage_view::{Key, KeyOutcome, ViewportConfig, ViewportController};
//!
//! let mut view = ViewportController::new(Size::new(800.0, 600.0), ViewportConfig::default())
//!     .unwrap();
//!
//! // Center a 1000x750 canvas once the first layout is known.
//! view.on_layout(Size::new(1000.0, 750.0).to_rect());
//! assert_eq!(view.world_to_screen(Point::new(500.0, 375.0)), Point::new(400.0, 300.0));
//!
//! // One wheel notch toward the user zooms in about the cursor.
//! view.wheel(-100.0, Point::new(100.0, 100.0), 0);
//! assert_eq!(view.zoom_percent(), 107.5);
//!
//! assert_eq!(view.key_down(Key::Escape), KeyOutcome::ExitEditMode);
//! ```
//!
//! ## Rendering
//!
//! [`ViewTransform`] formats as `translate(x, y) scale(s)` for hosts that
//! style a canvas element. [`ViewportController::grid_offset`] gives the
//! offset of a tiled background so it scrolls with the pan without being
//! redrawn.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod config;
mod controller;
mod input;
mod pan;
mod state;
mod touch;
mod wheel;

pub use config::{ViewportConfig, ViewportConfigError};
pub use controller::{ViewportController, ViewportDebugInfo};
pub use input::{Key, KeyOutcome, PointerButton, ZoomOutcome, ZoomSource};
pub use pan::PanGesture;
pub use state::{ViewTransform, ViewportState};
