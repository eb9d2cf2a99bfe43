// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point, Vec2};

/// Pan, zoom, and interaction flags of a viewport.
///
/// The controller never edits a state in place: every operation builds the
/// next value and replaces the old one in a single assignment, so a reader
/// can never observe a new zoom paired with an old pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Screen offset of the canvas origin, in pixels.
    pub pan: Vec2,
    /// Zoom percentage; `100.0` is one canvas unit per pixel.
    pub zoom_percent: f64,
    /// A pointer or single-touch pan is in progress.
    pub is_panning: bool,
    /// A two-finger pinch is in progress.
    pub is_zooming: bool,
}

impl ViewportState {
    /// A resting state at `zoom_percent` with no pan.
    #[must_use]
    pub fn new(zoom_percent: f64) -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom_percent,
            is_panning: false,
            is_zooming: false,
        }
    }

    /// Multiplier from canvas units to pixels.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.zoom_percent / 100.0
    }

    /// The translate-then-scale transform this state describes.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            translate: self.pan,
            scale: self.scale(),
        }
    }
}

/// Canvas-to-screen mapping: `screen = translate + canvas * scale`.
///
/// Its [`Display`](fmt::Display) output is a CSS-style transform string,
/// `translate(x, y) scale(s)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Screen offset of the canvas origin.
    pub translate: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl ViewTransform {
    /// As a `kurbo` affine.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Maps a canvas point to the screen.
    #[must_use]
    pub fn apply(self, canvas: Point) -> Point {
        (self.translate + canvas.to_vec2() * self.scale).to_point()
    }

    /// Maps a screen point back to the canvas.
    ///
    /// Returns `None` for a degenerate scale.
    #[must_use]
    pub fn invert(self, screen: Point) -> Option<Point> {
        if self.scale <= 0.0 || !self.scale.is_finite() {
            return None;
        }
        Some(((screen.to_vec2() - self.translate) / self.scale).to_point())
    }
}

impl fmt::Display for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}, {}) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_is_css_like() {
        let transform = ViewTransform {
            translate: Vec2::new(12.5, -4.0),
            scale: 1.5,
        };
        assert_eq!(transform.to_string(), "translate(12.5, -4) scale(1.5)");
    }

    #[test]
    fn apply_matches_affine_and_inverts() {
        let state = ViewportState {
            pan: Vec2::new(30.0, 40.0),
            ..ViewportState::new(150.0)
        };
        let transform = state.transform();
        let canvas = Point::new(10.0, -20.0);

        let screen = transform.apply(canvas);
        assert_eq!(screen, Point::new(45.0, 10.0));
        assert_eq!(transform.to_affine() * canvas, screen);
        assert_eq!(transform.invert(screen), Some(canvas));
    }

    #[test]
    fn degenerate_scale_has_no_inverse() {
        let transform = ViewTransform {
            translate: Vec2::ZERO,
            scale: 0.0,
        };
        assert_eq!(transform.invert(Point::ORIGIN), None);
    }
}
