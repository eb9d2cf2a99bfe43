// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Line, Point};
use lineage_layout::PositionMap;
use lineage_model::{MemberId, MemberIndex, Parents};

use crate::style::ConnectionStyle;

/// Dashed line over a group of members that record the same parents.
#[derive(Clone, Debug, PartialEq)]
pub struct SiblingConnection {
    /// Sorted, joined parent ids shared by the group, for display.
    pub signature: String,
    /// Members of the group in input order.
    pub members: Vec<MemberId>,
    /// Spans leftmost to rightmost member above the row.
    pub line: Line,
    /// One per member from the line down to its top edge.
    pub stubs: Vec<Line>,
    /// Dash and gap lengths for stroking `line`.
    pub dash: [f64; 2],
}

impl SiblingConnection {
    /// All segments of this connection.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        core::iter::once(self.line).chain(self.stubs.iter().copied())
    }
}

/// Groups positioned members by exact parent set.
///
/// Members without parents are never grouped. A child that records only one
/// of two parents forms a different group than its full siblings.
pub(crate) fn sibling_connections(
    index: &MemberIndex<'_>,
    positions: &PositionMap,
    style: &ConnectionStyle,
) -> Vec<SiblingConnection> {
    let mut slot: HashMap<Parents, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<(MemberId, Point)>)> = Vec::new();

    for member in index.iter() {
        if member.parent_ids.is_empty() {
            continue;
        }
        let Some(at) = positions.get(&member.id) else {
            continue;
        };
        let i = *slot.entry(member.parent_ids.sorted()).or_insert_with(|| {
            groups.push((member.parent_ids.signature(), Vec::new()));
            groups.len() - 1
        });
        groups[i].1.push((member.id.clone(), at));
    }

    groups
        .into_iter()
        .filter(|(_, group)| group.len() > 1)
        .map(|(signature, group)| {
            let top = group
                .iter()
                .map(|(_, p)| style.top(*p))
                .fold(f64::INFINITY, f64::min);
            let line_y = top - style.sibling_offset;
            let left = group.iter().map(|(_, p)| p.x).fold(f64::INFINITY, f64::min);
            let right = group
                .iter()
                .map(|(_, p)| p.x)
                .fold(f64::NEG_INFINITY, f64::max);
            let stubs = group
                .iter()
                .map(|(_, p)| Line::new((p.x, line_y), (p.x, style.top(*p))))
                .collect();
            SiblingConnection {
                signature,
                members: group.into_iter().map(|(id, _)| id).collect(),
                line: Line::new((left, line_y), (right, line_y)),
                stubs,
                dash: style.sibling_dash,
            }
        })
        .collect()
}
