// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Card size and connector offsets.
///
/// Positions handed to [`compute_connections`](crate::compute_connections)
/// are card centers; the card size turns them into edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionStyle {
    /// Card width.
    pub card_width: f64,
    /// Card height.
    pub card_height: f64,
    /// Distance from a parent's bottom edge down to its junction line.
    pub junction_offset: f64,
    /// Distance of a multi-child bracket above the children's top edge.
    pub bracket_offset: f64,
    /// Vertical offset of a marriage line from the couple's mid Y.
    pub marriage_offset: f64,
    /// Distance of a sibling line above the siblings' top edge.
    pub sibling_offset: f64,
    /// Dash and gap lengths for sibling lines.
    pub sibling_dash: [f64; 2],
    /// Also treat members that list a parent in `parent_ids` as that parent's
    /// children, even when the parent's `children_ids` omits them.
    pub infer_children_from_parents: bool,
}

impl Default for ConnectionStyle {
    fn default() -> Self {
        Self {
            card_width: 200.0,
            card_height: 100.0,
            junction_offset: 40.0,
            bracket_offset: 30.0,
            marriage_offset: 12.0,
            sibling_offset: 20.0,
            sibling_dash: [6.0, 4.0],
            infer_children_from_parents: false,
        }
    }
}

impl ConnectionStyle {
    pub(crate) fn half_card(&self) -> Vec2 {
        Vec2::new(self.card_width / 2.0, self.card_height / 2.0)
    }

    pub(crate) fn top(&self, center: Point) -> f64 {
        center.y - self.card_height / 2.0
    }

    pub(crate) fn bottom(&self, center: Point) -> f64 {
        center.y + self.card_height / 2.0
    }
}
