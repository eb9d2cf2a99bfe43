// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tier layout: one fixed horizontal band per generation.
//!
//! In tier mode every generation owns a band with a fixed Y. Members are
//! ordered for visual stability (by display name, with spouses pulled next to
//! each other) and dragging a card may only move it horizontally within its
//! band. [`constrain_drag`] implements that rule and [`NodeDrag`] wraps it in
//! a small drag session.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};
use lineage_model::{FamilyMember, MemberId};

use crate::config::TierLayoutConfig;
use crate::generation::GenerationBuckets;
use crate::positions::PositionMap;

/// A fixed-Y band holding one generation.
#[derive(Clone, Debug, PartialEq)]
pub struct Tier {
    /// Generation shown in this band.
    pub generation: i32,
    /// Y shared by every card center in the band.
    pub y: f64,
    /// Members in left-to-right order.
    pub members: Vec<MemberId>,
}

impl Tier {
    /// Returns `true` if `id` belongs to this band.
    #[must_use]
    pub fn contains(&self, id: &MemberId) -> bool {
        self.members.contains(id)
    }
}

/// Output of [`layout_by_tier`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TierLayout {
    /// Card center of every member.
    pub positions: PositionMap,
    /// Bands in ascending generation order.
    pub tiers: Vec<Tier>,
    node_size: Size,
    tier_of: HashMap<MemberId, usize>,
}

impl TierLayout {
    /// Returns the band owning `id`.
    #[must_use]
    pub fn tier_of(&self, id: &MemberId) -> Option<&Tier> {
        self.tier_of.get(id).map(|&i| &self.tiers[i])
    }

    /// Applies the horizontal-only rule to a proposed position of `id`.
    ///
    /// Same result as [`constrain_drag`], with an O(1) band lookup.
    #[must_use]
    pub fn constrain_drag(&self, id: &MemberId, proposed: Point) -> Point {
        match self.tier_of(id) {
            Some(tier) => Point::new(proposed.x, tier.y),
            None => proposed,
        }
    }

    /// Moves `id` toward `proposed`, keeping it in its band.
    ///
    /// Returns the position actually stored, or `None` for an unknown id.
    pub fn move_member(&mut self, id: &MemberId, proposed: Point) -> Option<Point> {
        if !self.positions.contains(id) {
            return None;
        }
        let constrained = self.constrain_drag(id, proposed);
        self.positions.insert(id.clone(), constrained);
        Some(constrained)
    }

    /// Union of all card rectangles, or `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let half = self.node_size.to_vec2() / 2.0;
        self.positions
            .bounds()
            .map(|r| Rect::new(r.x0 - half.x, r.y0 - half.y, r.x1 + half.x, r.y1 + half.y))
    }
}

/// Lays members out in fixed bands, one per generation.
///
/// Band `k` (in ascending generation order) sits at `start_y + k *
/// tier_height`. Each row is `count * node_width + (count - 1) * spacing`
/// wide and centered about `center_x`.
#[must_use]
pub fn layout_by_tier(members: &[FamilyMember], config: &TierLayoutConfig) -> TierLayout {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("layout_by_tier", members = members.len());
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let buckets = GenerationBuckets::new(members);
    let mut positions = PositionMap::with_capacity(members.len());
    let mut tiers = Vec::with_capacity(buckets.len());
    let mut tier_of = HashMap::with_capacity(members.len());

    for (k, (generation, bucket)) in buckets.iter().enumerate() {
        let y = config.start_y + k as f64 * config.tier_height;
        let ordered = order_tier(bucket);

        let count = ordered.len() as f64;
        let row_width = count * config.node_width + (count - 1.0) * config.spacing;
        let row_start = config.center_x - row_width / 2.0;
        let stride = config.node_width + config.spacing;

        let mut ids = Vec::with_capacity(ordered.len());
        for (slot, member) in ordered.iter().enumerate() {
            let x = row_start + slot as f64 * stride + config.node_width / 2.0;
            positions.insert(member.id.clone(), Point::new(x, y));
            tier_of.insert(member.id.clone(), k);
            ids.push(member.id.clone());
        }
        tiers.push(Tier {
            generation,
            y,
            members: ids,
        });
    }

    TierLayout {
        positions,
        tiers,
        node_size: config.node_size(),
        tier_of,
    }
}

/// Orders one band: by display name (id breaks ties), then each spouse pair
/// is placed adjacently.
///
/// When only one side of a pair records the marriage, the recording side
/// comes first. For a mutual pair the spouse that sorts first leads.
fn order_tier<'a>(bucket: &[&'a FamilyMember]) -> Vec<&'a FamilyMember> {
    let mut sorted: Vec<&'a FamilyMember> = bucket.to_vec();
    sorted.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

    let slot: HashMap<&str, usize> = sorted
        .iter()
        .enumerate()
        .map(|(i, m)| (m.id.as_str(), i))
        .collect();

    let mut placed = alloc::vec![false; sorted.len()];
    let mut out = Vec::with_capacity(sorted.len());
    for i in 0..sorted.len() {
        if placed[i] {
            continue;
        }
        let member = sorted[i];

        // The member's own spouse if it is in this band, otherwise the first
        // unplaced band member that names it as spouse.
        let own = member
            .spouse_id
            .as_ref()
            .and_then(|s| slot.get(s.as_str()).copied())
            .filter(|&j| j != i && !placed[j]);
        let partner = own.or_else(|| {
            (0..sorted.len()).find(|&j| {
                j != i && !placed[j] && sorted[j].spouse_id.as_ref() == Some(&member.id)
            })
        });

        placed[i] = true;
        match partner {
            Some(j) if own.is_some() => {
                placed[j] = true;
                out.push(member);
                out.push(sorted[j]);
            }
            Some(j) => {
                placed[j] = true;
                out.push(sorted[j]);
                out.push(member);
            }
            None => out.push(member),
        }
    }
    out
}

/// Pins a proposed drag position to the Y of the band owning `member_id`.
///
/// X passes through unchanged. An id that no band owns returns `proposed`
/// as is.
#[must_use]
pub fn constrain_drag(member_id: &MemberId, proposed: Point, tiers: &[Tier]) -> Point {
    match tiers.iter().find(|t| t.contains(member_id)) {
        Some(tier) => Point::new(proposed.x, tier.y),
        None => proposed,
    }
}

/// A horizontal-only drag of one card in a [`TierLayout`].
///
/// Pointer positions are in canvas coordinates; convert screen points with
/// the viewport before feeding them in.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDrag {
    member: MemberId,
    start_pointer: Point,
    start_position: Point,
}

impl NodeDrag {
    /// Starts dragging `member` from `pointer`.
    ///
    /// Returns `None` if the member has no position in `layout`.
    #[must_use]
    pub fn start(layout: &TierLayout, member: &MemberId, pointer: Point) -> Option<Self> {
        let start_position = layout.positions.get(member)?;
        Some(Self {
            member: member.clone(),
            start_pointer: pointer,
            start_position,
        })
    }

    /// The dragged member.
    #[must_use]
    pub fn member(&self) -> &MemberId {
        &self.member
    }

    /// Where the card was when the drag started.
    #[must_use]
    pub fn start_position(&self) -> Point {
        self.start_position
    }

    /// Moves the card by the pointer's total offset since the start, keeping
    /// it in its band, and returns the stored position.
    pub fn update(&self, layout: &mut TierLayout, pointer: Point) -> Point {
        let proposed = self.start_position + (pointer - self.start_pointer);
        layout
            .move_member(&self.member, proposed)
            .unwrap_or(proposed)
    }

    /// Puts the card back where the drag started.
    pub fn cancel(self, layout: &mut TierLayout) {
        layout.move_member(&self.member, self.start_position);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn member(id: &str, name: &str, generation: i32) -> FamilyMember {
        FamilyMember::new(id, name).with_generation(generation)
    }

    fn names(layout: &TierLayout, k: usize) -> Vec<&str> {
        layout.tiers[k].members.iter().map(MemberId::as_str).collect()
    }

    #[test]
    fn tiers_are_spaced_by_tier_height() {
        let members = vec![member("c", "C", 2), member("a", "A", 0), member("b", "B", 1)];
        let layout = layout_by_tier(&members, &TierLayoutConfig::default());
        let ys: Vec<f64> = layout.tiers.iter().map(|t| t.y).collect();
        assert_eq!(ys, vec![100.0, 300.0, 500.0]);
        let generations: Vec<i32> = layout.tiers.iter().map(|t| t.generation).collect();
        assert_eq!(generations, vec![0, 1, 2]);
    }

    #[test]
    fn gaps_in_generations_do_not_leave_empty_bands() {
        let members = vec![member("a", "A", 0), member("z", "Z", 5)];
        let layout = layout_by_tier(&members, &TierLayoutConfig::default());
        assert_eq!(layout.tiers.len(), 2);
        assert_eq!(layout.tiers[1].y, 300.0);
    }

    #[test]
    fn rows_are_centered_on_center_x() {
        let members = vec![member("a", "A", 0), member("b", "B", 0), member("c", "C", 0)];
        let layout = layout_by_tier(&members, &TierLayoutConfig::default());
        // Row width 3 * 200 + 2 * 50 = 700, slots centered at -250, 0, 250.
        assert_eq!(layout.positions.get("a").unwrap().x, -250.0);
        assert_eq!(layout.positions.get("b").unwrap().x, 0.0);
        assert_eq!(layout.positions.get("c").unwrap().x, 250.0);
    }

    #[test]
    fn orders_by_name_and_keeps_spouses_adjacent() {
        let members = vec![
            member("z", "Zed", 0).with_spouse("a"),
            member("m", "Mia", 0),
            member("a", "Ann", 0).with_spouse("z"),
            member("b", "Bea", 0),
        ];
        let layout = layout_by_tier(&members, &TierLayoutConfig::default());
        assert_eq!(names(&layout, 0), vec!["a", "z", "b", "m"]);
    }

    #[test]
    fn one_sided_spouse_leads_its_pair() {
        let members = vec![
            member("a", "Ann", 0),
            member("b", "Bob", 0).with_spouse("a"),
            member("c", "Cal", 0),
        ];
        let layout = layout_by_tier(&members, &TierLayoutConfig::default());
        assert_eq!(names(&layout, 0), vec!["b", "a", "c"]);
    }

    #[test]
    fn spouse_in_another_generation_is_not_pulled_in() {
        let members = vec![
            member("a", "Ann", 0).with_spouse("x"),
            member("b", "Bob", 0),
            member("x", "Xavier", 1).with_spouse("a"),
        ];
        let layout = layout_by_tier(&members, &TierLayoutConfig::default());
        assert_eq!(names(&layout, 0), vec!["a", "b"]);
        assert_eq!(names(&layout, 1), vec!["x"]);
    }

    #[test]
    fn missing_generation_joins_generation_zero() {
        let members = vec![FamilyMember::new("u", "U"), member("a", "A", 0)];
        let layout = layout_by_tier(&members, &TierLayoutConfig::default());
        assert_eq!(layout.tiers.len(), 1);
        assert_eq!(layout.positions.get("u").unwrap().y, 100.0);
    }

    #[test]
    fn constrain_drag_pins_y_and_passes_x() {
        let members = vec![member("a", "A", 0), member("b", "B", 1)];
        let layout = layout_by_tier(&members, &TierLayoutConfig::default());
        let proposed = Point::new(123.0, 999.0);

        assert_eq!(
            constrain_drag(&"b".into(), proposed, &layout.tiers),
            Point::new(123.0, 300.0)
        );
        assert_eq!(
            layout.constrain_drag(&"b".into(), proposed),
            Point::new(123.0, 300.0)
        );
    }

    #[test]
    fn constrain_drag_fails_open_for_unknown_ids() {
        let layout = layout_by_tier(&[member("a", "A", 0)], &TierLayoutConfig::default());
        let proposed = Point::new(5.0, 6.0);
        assert_eq!(constrain_drag(&"nope".into(), proposed, &layout.tiers), proposed);
        assert_eq!(layout.constrain_drag(&"nope".into(), proposed), proposed);
    }

    #[test]
    fn node_drag_moves_horizontally_only() {
        let mut layout = layout_by_tier(
            &[member("a", "A", 0), member("b", "B", 0)],
            &TierLayoutConfig::default(),
        );
        let start = layout.positions.get("a").unwrap();
        let drag = NodeDrag::start(&layout, &"a".into(), Point::new(0.0, 0.0)).unwrap();

        let moved = drag.update(&mut layout, Point::new(40.0, -75.0));
        assert_eq!(moved, Point::new(start.x + 40.0, start.y));
        assert_eq!(layout.positions.get("a"), Some(moved));

        drag.cancel(&mut layout);
        assert_eq!(layout.positions.get("a"), Some(start));
    }

    #[test]
    fn node_drag_needs_a_placed_member() {
        let layout = layout_by_tier(&[member("a", "A", 0)], &TierLayoutConfig::default());
        assert!(NodeDrag::start(&layout, &"ghost".into(), Point::ORIGIN).is_none());
    }

    #[test]
    fn bounds_cover_cards() {
        let layout = layout_by_tier(
            &[member("a", "A", 0), member("b", "B", 1)],
            &TierLayoutConfig::default(),
        );
        assert_eq!(
            layout.bounds(),
            Some(Rect::new(-100.0, 50.0, 100.0, 350.0))
        );
    }
}
