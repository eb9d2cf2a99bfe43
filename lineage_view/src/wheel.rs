// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel coalescing.
//!
//! Trackpads deliver wheel events every few milliseconds with tiny deltas.
//! The accumulator sums them and releases one combined step when either the
//! window since the last released step has elapsed or the sum reaches the
//! threshold. Before the first release the window starts at the first event.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`
use kurbo::Point;

/// A combined wheel step ready to apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct WheelStep {
    /// Summed wheel units; positive scrolls away from the user.
    pub(crate) units: f64,
    /// Focal point of the most recent event.
    pub(crate) focal: Point,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct WheelAccumulator {
    pending: f64,
    focal: Option<Point>,
    window_start: Option<u64>,
}

impl WheelAccumulator {
    /// Adds `units` received at `now_ms` and returns the combined step if it
    /// is due.
    pub(crate) fn push(
        &mut self,
        units: f64,
        focal: Point,
        now_ms: u64,
        window_ms: u64,
        threshold: f64,
    ) -> Option<WheelStep> {
        let start = *self.window_start.get_or_insert(now_ms);
        self.pending += units;
        self.focal = Some(focal);
        if self.pending.abs() >= threshold || now_ms.saturating_sub(start) >= window_ms {
            self.take(now_ms)
        } else {
            None
        }
    }

    /// Releases the pending sum if its window has elapsed by `now_ms`.
    pub(crate) fn flush(&mut self, now_ms: u64, window_ms: u64) -> Option<WheelStep> {
        let start = self.window_start?;
        if self.focal.is_some() && now_ms.saturating_sub(start) >= window_ms {
            self.take(now_ms)
        } else {
            None
        }
    }

    /// Puts back a released step that turned out too small to apply.
    pub(crate) fn restore(&mut self, step: WheelStep) {
        self.pending += step.units;
        self.focal.get_or_insert(step.focal);
    }

    /// Summed units not yet released.
    pub(crate) fn pending(&self) -> f64 {
        self.pending
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    fn take(&mut self, now_ms: u64) -> Option<WheelStep> {
        let focal = self.focal.take()?;
        let units = core::mem::take(&mut self.pending);
        self.window_start = Some(now_ms);
        Some(WheelStep { units, focal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u64 = 100;
    const THRESHOLD: f64 = 1.0;

    fn push(acc: &mut WheelAccumulator, units: f64, now: u64) -> Option<WheelStep> {
        acc.push(units, Point::new(5.0, 5.0), now, WINDOW, THRESHOLD)
    }

    #[test]
    fn small_deltas_wait_for_the_window() {
        let mut acc = WheelAccumulator::default();
        for t in (0..100).step_by(10) {
            assert_eq!(push(&mut acc, 0.05, t), None, "held at {t} ms");
        }
        let step = push(&mut acc, 0.05, 100).unwrap();
        assert!((step.units - 0.55).abs() < 1e-9);
        assert_eq!(acc.pending(), 0.0);
    }

    #[test]
    fn threshold_releases_early() {
        let mut acc = WheelAccumulator::default();
        assert_eq!(push(&mut acc, 0.4, 0), None);
        assert_eq!(push(&mut acc, 0.4, 10), None);
        let step = push(&mut acc, 0.4, 20).unwrap();
        assert!((step.units - 1.2).abs() < 1e-9);
    }

    #[test]
    fn negative_sums_use_magnitude() {
        let mut acc = WheelAccumulator::default();
        assert!(push(&mut acc, -1.5, 0).is_some());
    }

    #[test]
    fn window_restarts_after_a_release() {
        let mut acc = WheelAccumulator::default();
        assert!(push(&mut acc, 2.0, 0).is_some());
        assert_eq!(push(&mut acc, 0.1, 50), None);
        assert_eq!(acc.flush(99, WINDOW), None);
        let step = acc.flush(100, WINDOW).unwrap();
        assert!((step.units - 0.1).abs() < 1e-9);
        assert_eq!(acc.flush(500, WINDOW), None, "nothing left to flush");
    }

    #[test]
    fn restore_keeps_units_for_the_next_step() {
        let mut acc = WheelAccumulator::default();
        assert_eq!(push(&mut acc, 0.02, 200), None, "first event opens the window");
        let step = acc.flush(300, WINDOW).unwrap();
        acc.restore(step);
        assert!((acc.pending() - 0.02).abs() < 1e-9);
    }
}
