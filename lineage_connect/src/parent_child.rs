// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Line, Point};
use lineage_layout::PositionMap;
use lineage_model::{FamilyMember, MemberId, MemberIndex};

use crate::style::ConnectionStyle;

/// Bracket joining one parent to its children of one generation.
///
/// ```text
///        [parent]
///           |            drop
///           +------+     junction
///                  |     trunk
///        +---------+---------+   bracket (2+ children)
///        |         |         |   stubs
///     [child]   [child]   [child]
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParentChildConnection {
    /// The parent.
    pub parent: MemberId,
    /// Generation shared by every child in this group.
    pub generation: i32,
    /// Children in this group, in reference order.
    pub children: Vec<MemberId>,
    /// From the parent's bottom edge down to the junction.
    pub drop: Line,
    /// Horizontal from the parent's X to the children's centroid X.
    pub junction: Line,
    /// From the junction down to the bracket, or to the only child's top edge.
    pub trunk: Line,
    /// Spans leftmost to rightmost child; only for groups of two or more.
    pub bracket: Option<Line>,
    /// One per child from the bracket down to its top edge; empty for a single
    /// child.
    pub stubs: Vec<Line>,
}

impl ParentChildConnection {
    /// All segments of this connection.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        [self.drop, self.junction, self.trunk]
            .into_iter()
            .chain(self.bracket)
            .chain(self.stubs.iter().copied())
    }
}

/// Children of `parent` that resolve to a positioned record, grouped by the
/// child's generation in ascending order.
fn child_groups<'a>(
    parent: &'a FamilyMember,
    index: &MemberIndex<'a>,
    positions: &PositionMap,
    style: &ConnectionStyle,
) -> BTreeMap<i32, Vec<(&'a MemberId, Point)>> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut groups: BTreeMap<i32, Vec<(&'a MemberId, Point)>> = BTreeMap::new();

    let inferred = style
        .infer_children_from_parents
        .then(|| {
            index
                .iter()
                .filter(|m| m.parent_ids.contains(&parent.id))
                .map(|m| &m.id)
        })
        .into_iter()
        .flatten();

    for child_id in parent.children_ids.iter().chain(inferred) {
        if *child_id == parent.id || !seen.insert(child_id.as_str()) {
            continue;
        }
        let (Some(child), Some(at)) = (index.get(child_id), positions.get(child_id)) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(parent = %parent.id, child = %child_id, "skipping unplaced child");
            continue;
        };
        groups
            .entry(child.generation_or_default())
            .or_default()
            .push((&child.id, at));
    }
    groups
}

pub(crate) fn parent_child_connections(
    index: &MemberIndex<'_>,
    positions: &PositionMap,
    style: &ConnectionStyle,
) -> Vec<ParentChildConnection> {
    let mut out = Vec::new();
    for parent in index.iter() {
        let Some(parent_at) = positions.get(&parent.id) else {
            continue;
        };
        let groups = child_groups(parent, index, positions, style);
        for (generation, children) in groups {
            out.push(bracket(parent, parent_at, generation, &children, style));
        }
    }
    out
}

fn bracket(
    parent: &FamilyMember,
    parent_at: Point,
    generation: i32,
    children: &[(&MemberId, Point)],
    style: &ConnectionStyle,
) -> ParentChildConnection {
    let parent_bottom = style.bottom(parent_at);
    let junction_y = parent_bottom + style.junction_offset;

    let count = children.len() as f64;
    let centroid_x = children.iter().map(|(_, p)| p.x).sum::<f64>() / count;
    let top = children
        .iter()
        .map(|(_, p)| style.top(*p))
        .fold(f64::INFINITY, f64::min);

    let drop = Line::new((parent_at.x, parent_bottom), (parent_at.x, junction_y));
    let junction = Line::new((parent_at.x, junction_y), (centroid_x, junction_y));

    let (trunk, bracket, stubs) = if children.len() > 1 {
        let bracket_y = top - style.bracket_offset;
        let left = children.iter().map(|(_, p)| p.x).fold(f64::INFINITY, f64::min);
        let right = children
            .iter()
            .map(|(_, p)| p.x)
            .fold(f64::NEG_INFINITY, f64::max);
        let stubs = children
            .iter()
            .map(|(_, p)| Line::new((p.x, bracket_y), (p.x, style.top(*p))))
            .collect();
        (
            Line::new((centroid_x, junction_y), (centroid_x, bracket_y)),
            Some(Line::new((left, bracket_y), (right, bracket_y))),
            stubs,
        )
    } else {
        (
            Line::new((centroid_x, junction_y), (centroid_x, top)),
            None,
            Vec::new(),
        )
    };

    ParentChildConnection {
        parent: parent.id.clone(),
        generation,
        children: children.iter().map(|(id, _)| (*id).clone()).collect(),
        drop,
        junction,
        trunk,
        bracket,
        stubs,
    }
}
