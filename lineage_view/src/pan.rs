// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture: snapshot the pointer and pan at the start, then derive the pan
//! from the total pointer offset.
//!
//! ## Usage
//!
//! 1) Start with [`PanGesture::start`], passing the pointer and the current pan.
//! 2) On each move, [`PanGesture::pan_for`] returns the pan for that pointer.
//! 3) End with [`PanGesture::end`].
//!
//! The pan depends only on the snapshot and the current pointer, never on
//! intermediate move events.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use lineage_view::PanGesture;
//!
//! let mut pan = PanGesture::default();
//! pan.start(Point::new(10.0, 20.0), Vec2::new(100.0, 0.0));
//! assert!(pan.is_active());
//!
//! assert_eq!(pan.pan_for(Point::new(15.0, 10.0)), Some(Vec2::new(105.0, -10.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pan interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanGesture {
    /// Pointer position when the gesture started.
    pub start_pointer: Option<Point>,
    /// Pan offset when the gesture started.
    pub start_pan: Vec2,
}

impl PanGesture {
    /// Starts a gesture at `pointer` over a view currently panned by `pan`.
    pub fn start(&mut self, pointer: Point, pan: Vec2) {
        self.start_pointer = Some(pointer);
        self.start_pan = pan;
    }

    /// The pan that puts the grabbed canvas point under `pointer`.
    ///
    /// `None` when no gesture is active.
    #[must_use]
    pub fn pan_for(&self, pointer: Point) -> Option<Vec2> {
        self.start_pointer
            .map(|start| self.start_pan + (pointer - start))
    }

    /// Ends the gesture.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_pointer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_gesture_yields_nothing() {
        let pan = PanGesture::default();
        assert!(!pan.is_active());
        assert_eq!(pan.pan_for(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn offset_is_relative_to_the_snapshot() {
        let mut pan = PanGesture::default();
        pan.start(Point::new(50.0, 50.0), Vec2::new(-20.0, 5.0));

        // Intermediate moves do not accumulate.
        let _ = pan.pan_for(Point::new(500.0, 500.0));
        assert_eq!(
            pan.pan_for(Point::new(60.0, 40.0)),
            Some(Vec2::new(-10.0, -5.0))
        );
    }

    #[test]
    fn end_resets_state() {
        let mut pan = PanGesture::default();
        pan.start(Point::ORIGIN, Vec2::new(3.0, 4.0));
        pan.end();
        assert_eq!(pan, PanGesture::default());
    }
}
