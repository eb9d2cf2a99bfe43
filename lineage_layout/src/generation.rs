// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generation grouping and the centered-row positioner.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Point, Size};
use lineage_model::FamilyMember;

use crate::config::GenerationLayoutConfig;
use crate::positions::PositionMap;

/// Members grouped by generation, in ascending generation order.
///
/// Within a bucket members keep their input order. A member without a
/// recorded generation lands in generation `0`. Only the first record of a
/// duplicated id is kept.
#[derive(Clone, Debug, Default)]
pub struct GenerationBuckets<'a> {
    buckets: Vec<(i32, Vec<&'a FamilyMember>)>,
}

impl<'a> GenerationBuckets<'a> {
    /// Groups `members` by generation.
    #[must_use]
    pub fn new(members: &'a [FamilyMember]) -> Self {
        let mut seen: HashSet<&str> = HashSet::with_capacity(members.len());
        let mut grouped: BTreeMap<i32, Vec<&'a FamilyMember>> = BTreeMap::new();
        for member in members {
            if !seen.insert(member.id.as_str()) {
                continue;
            }
            grouped
                .entry(member.generation_or_default())
                .or_default()
                .push(member);
        }
        Self {
            buckets: grouped.into_iter().collect(),
        }
    }

    /// Number of distinct generations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` if there are no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Size of the largest generation, or `0` when empty.
    #[must_use]
    pub fn max_row_len(&self) -> usize {
        self.buckets.iter().map(|(_, row)| row.len()).max().unwrap_or(0)
    }

    /// Iterates `(generation, members)` in ascending generation order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &[&'a FamilyMember])> + '_ {
        self.buckets.iter().map(|(g, row)| (*g, row.as_slice()))
    }

    /// The sorted generation keys.
    pub fn generations(&self) -> impl Iterator<Item = i32> + '_ {
        self.buckets.iter().map(|(g, _)| *g)
    }
}

/// Output of [`compute_positions`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationLayout {
    /// Card center of every member.
    pub positions: PositionMap,
    /// Canvas extent in canvas pixels.
    pub canvas: Size,
}

/// Canvas extent needed for `buckets`.
///
/// Falls back to the configured minimum for empty input or a single
/// generation/member, so the extent never depends on a division by a count.
#[must_use]
pub fn canvas_size(buckets: &GenerationBuckets<'_>, config: &GenerationLayoutConfig) -> Size {
    let widest = buckets.max_row_len().saturating_sub(1) as f64;
    let tallest = buckets.len().saturating_sub(1) as f64;
    let width = widest * config.card_spacing + 2.0 * config.padding;
    let height = tallest * config.generation_height + 2.0 * config.padding;
    Size::new(
        width.max(config.min_width),
        height.max(config.min_height),
    )
}

/// Places every member on a centered row for its generation.
///
/// Generations are stacked top to bottom in ascending order, vertically
/// centered on the canvas; within a generation members are spaced
/// `card_spacing` apart in input order and centered horizontally. The result
/// depends only on input order and generation values.
#[must_use]
pub fn compute_positions(
    members: &[FamilyMember],
    config: &GenerationLayoutConfig,
) -> GenerationLayout {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("compute_positions", members = members.len());
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let buckets = GenerationBuckets::new(members);
    let canvas = canvas_size(&buckets, config);
    let center = Point::new(canvas.width / 2.0, canvas.height / 2.0);
    let middle_row = buckets.len().saturating_sub(1) as f64 / 2.0;

    let mut positions = PositionMap::with_capacity(members.len());
    for (row, (_generation, bucket)) in buckets.iter().enumerate() {
        let y = center.y + (row as f64 - middle_row) * config.generation_height;
        let row_span = (bucket.len() - 1) as f64 * config.card_spacing;
        let start_x = center.x - row_span / 2.0;
        for (i, member) in bucket.iter().enumerate() {
            let x = start_x + i as f64 * config.card_spacing;
            positions.insert(member.id.clone(), Point::new(x, y));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(generation = _generation, count = bucket.len(), y, "placed row");
    }

    GenerationLayout { positions, canvas }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn member(id: &str, generation: i32) -> FamilyMember {
        FamilyMember::new(id, id).with_generation(generation)
    }

    #[test]
    fn empty_input_uses_minimum_canvas() {
        let layout = compute_positions(&[], &GenerationLayoutConfig::default());
        assert!(layout.positions.is_empty());
        assert_eq!(layout.canvas, Size::new(800.0, 600.0));
    }

    #[test]
    fn single_member_sits_at_canvas_center() {
        let layout = compute_positions(&[member("a", 3)], &GenerationLayoutConfig::default());
        assert_eq!(layout.positions.get("a"), Some(Point::new(400.0, 300.0)));
    }

    #[test]
    fn two_members_are_one_spacing_apart_and_symmetric() {
        let config = GenerationLayoutConfig::default();
        let layout = compute_positions(&[member("a", 0), member("b", 0)], &config);
        let a = layout.positions.get("a").unwrap();
        let b = layout.positions.get("b").unwrap();
        let center_x = layout.canvas.width / 2.0;

        assert_eq!(b.x - a.x, 300.0);
        assert_eq!(center_x - a.x, b.x - center_x);
        assert_eq!(a.y, b.y);
    }

    #[test]
    fn canvas_grows_with_widest_row_and_generation_count() {
        let members: Vec<FamilyMember> = (0..5)
            .map(|i| member(&alloc::format!("m{i}"), 0))
            .chain([member("p", -1), member("c", 1)])
            .collect();
        let layout = compute_positions(&members, &GenerationLayoutConfig::default());
        // 4 gaps * 300 + 2 * 200 = 1600; 2 gaps * 350 + 400 = 1100.
        assert_eq!(layout.canvas, Size::new(1600.0, 1100.0));
    }

    #[test]
    fn generations_stack_in_ascending_order_around_the_middle() {
        let members = vec![member("child", 1), member("root", 0), member("grand", 2)];
        let layout = compute_positions(&members, &GenerationLayoutConfig::default());
        let center_y = layout.canvas.height / 2.0;

        assert_eq!(layout.positions.get("root").unwrap().y, center_y - 350.0);
        assert_eq!(layout.positions.get("child").unwrap().y, center_y);
        assert_eq!(layout.positions.get("grand").unwrap().y, center_y + 350.0);
    }

    #[test]
    fn negative_and_missing_generations_are_bucketed() {
        let members = vec![
            FamilyMember::new("unset", "unset"),
            member("zero", 0),
            member("elder", -1),
        ];
        let buckets = GenerationBuckets::new(&members);
        let generations: Vec<i32> = buckets.generations().collect();
        assert_eq!(generations, vec![-1, 0]);
        assert_eq!(buckets.max_row_len(), 2);
    }

    #[test]
    fn duplicate_ids_are_placed_once() {
        let members = vec![member("a", 0), member("a", 1), member("b", 0)];
        let layout = compute_positions(&members, &GenerationLayoutConfig::default());
        assert_eq!(layout.positions.len(), 2);
        // The duplicate in generation 1 does not create a second row.
        assert_eq!(layout.canvas.height, 600.0);
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let members = vec![member("x", 2), member("y", 0), member("z", 2)];
        let config = GenerationLayoutConfig::default();
        assert_eq!(
            compute_positions(&members, &config),
            compute_positions(&members, &config)
        );
    }
}
