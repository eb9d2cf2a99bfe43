// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use smallvec::SmallVec;

/// One active touch contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Touch {
    /// Host-assigned identifier, stable for the contact's lifetime.
    pub(crate) id: u64,
    /// Current screen position.
    pub(crate) position: Point,
}

/// Active touches in arrival order.
///
/// Only the first two take part in gestures; later contacts are tracked so
/// their end events are recognized, but otherwise ignored.
#[derive(Clone, Debug, Default)]
pub(crate) struct TouchSet {
    touches: SmallVec<[Touch; 2]>,
}

impl TouchSet {
    pub(crate) fn len(&self) -> usize {
        self.touches.len()
    }

    /// Adds or moves a touch. Returns `false` if the touch was already known.
    pub(crate) fn insert(&mut self, id: u64, position: Point) -> bool {
        if self.update(id, position) {
            return false;
        }
        self.touches.push(Touch { id, position });
        true
    }

    /// Moves a known touch. Returns `false` for an unknown id.
    pub(crate) fn update(&mut self, id: u64, position: Point) -> bool {
        match self.touches.iter_mut().find(|t| t.id == id) {
            Some(touch) => {
                touch.position = position;
                true
            }
            None => false,
        }
    }

    /// Removes a touch. Returns `false` for an unknown id.
    pub(crate) fn remove(&mut self, id: u64) -> bool {
        let before = self.touches.len();
        self.touches.retain(|t| t.id != id);
        self.touches.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.touches.clear();
    }

    pub(crate) fn first(&self) -> Option<Touch> {
        self.touches.first().copied()
    }

    /// Index of `id` among the active touches.
    pub(crate) fn slot_of(&self, id: u64) -> Option<usize> {
        self.touches.iter().position(|t| t.id == id)
    }

    /// Distance and midpoint of the first two touches.
    pub(crate) fn pinch(&self) -> Option<(f64, Point)> {
        match self.touches.as_slice() {
            [a, b, ..] => Some((
                (b.position - a.position).hypot(),
                a.position.midpoint(b.position),
            )),
            _ => None,
        }
    }
}
