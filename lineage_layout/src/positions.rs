// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::{Equivalent, HashMap};
use kurbo::{Point, Rect};
use lineage_model::MemberId;

/// Card centers keyed by member id, in canvas (pre-transform) coordinates.
///
/// Lookups are O(1); iteration follows insertion order, so two layouts built
/// from the same input iterate identically.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionMap {
    order: Vec<MemberId>,
    points: HashMap<MemberId, Point>,
}

impl PositionMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            points: HashMap::with_capacity(capacity),
        }
    }

    /// Sets the position of `id`, returning the previous one.
    ///
    /// Replacing an existing entry keeps its place in iteration order.
    pub fn insert(&mut self, id: MemberId, point: Point) -> Option<Point> {
        match self.points.get_mut(&id) {
            Some(slot) => Some(core::mem::replace(slot, point)),
            None => {
                self.order.push(id.clone());
                self.points.insert(id, point);
                None
            }
        }
    }

    /// Returns the position of `id`, if it was placed.
    #[must_use]
    pub fn get<Q>(&self, id: &Q) -> Option<Point>
    where
        Q: ?Sized + Hash + Equivalent<MemberId>,
    {
        self.points.get(id).copied()
    }

    /// Returns `true` if `id` was placed.
    #[must_use]
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<MemberId>,
    {
        self.points.contains_key(id)
    }

    /// Number of placed members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Placed ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[MemberId] {
        &self.order
    }

    /// Iterates `(id, position)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&MemberId, Point)> + '_ {
        self.order.iter().map(|id| (id, self.points[id]))
    }

    /// Bounding rectangle of all positions, or `None` when empty.
    ///
    /// This covers card centers only; inflate by half a card to cover the
    /// cards themselves.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.iter().map(|(_, p)| p);
        let first = points.next()?;
        Some(points.fold(Rect::from_points(first, first), |r, p| {
            r.union_pt(p)
        }))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn replace_keeps_order() {
        let mut map = PositionMap::new();
        assert_eq!(map.insert("a".into(), Point::new(1.0, 1.0)), None);
        assert_eq!(map.insert("b".into(), Point::new(2.0, 2.0)), None);
        assert_eq!(
            map.insert("a".into(), Point::new(3.0, 3.0)),
            Some(Point::new(1.0, 1.0))
        );

        let ids: Vec<&str> = map.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(Point::new(3.0, 3.0)));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn lookup_by_str_or_id() {
        let mut map = PositionMap::new();
        map.insert("a".into(), Point::ORIGIN);
        let id = MemberId::from("a");
        assert!(map.contains(&id));
        assert!(map.contains("a"));
        assert!(!map.contains("b"));
    }

    #[test]
    fn bounds_cover_all_points() {
        let mut map = PositionMap::new();
        assert_eq!(map.bounds(), None);
        map.insert("a".into(), Point::new(-10.0, 5.0));
        map.insert("b".into(), Point::new(30.0, -5.0));
        assert_eq!(map.bounds(), Some(Rect::new(-10.0, -5.0, 30.0, 5.0)));
    }
}
