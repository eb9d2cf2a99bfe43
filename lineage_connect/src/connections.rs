// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{BezPath, Line};
use lineage_layout::PositionMap;
use lineage_model::{FamilyMember, MemberIndex};

use crate::marriage::{MarriageConnection, marriage_connections};
use crate::parent_child::{ParentChildConnection, parent_child_connections};
use crate::sibling::{SiblingConnection, sibling_connections};
use crate::style::ConnectionStyle;

/// Relation a segment belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
    /// Part of a parent-child bracket.
    ParentChild,
    /// Part of a marriage line.
    Marriage,
    /// Part of a sibling line.
    Sibling,
}

/// One drawable segment with the relation it belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Relation.
    pub kind: ConnectionKind,
    /// Geometry in canvas coordinates.
    pub line: Line,
}

/// Every connector derived from one member list and position map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Connections {
    /// One entry per parent and child generation.
    pub parent_child: Vec<ParentChildConnection>,
    /// One entry per spouse pair.
    pub marriage: Vec<MarriageConnection>,
    /// One entry per group of two or more siblings.
    pub sibling: Vec<SiblingConnection>,
}

impl Connections {
    /// Returns `true` if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent_child.is_empty() && self.marriage.is_empty() && self.sibling.is_empty()
    }

    /// Iterates every segment, parent-child first, then marriage, then sibling.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let tag = |kind: ConnectionKind| move |line: Line| Segment { kind, line };
        let parent_child = self
            .parent_child
            .iter()
            .flat_map(ParentChildConnection::lines)
            .map(tag(ConnectionKind::ParentChild));
        let marriage = self
            .marriage
            .iter()
            .flat_map(MarriageConnection::lines)
            .map(tag(ConnectionKind::Marriage));
        let sibling = self
            .sibling
            .iter()
            .flat_map(SiblingConnection::lines)
            .map(tag(ConnectionKind::Sibling));
        parent_child.chain(marriage).chain(sibling)
    }

    /// All segments of one kind as a single path of disjoint subpaths.
    ///
    /// Sibling lines come out solid here; stroke them with
    /// [`SiblingConnection::dash`] when drawing them separately.
    #[must_use]
    pub fn to_path(&self, kind: ConnectionKind) -> BezPath {
        let mut path = BezPath::new();
        for segment in self.segments().filter(|s| s.kind == kind) {
            path.move_to(segment.line.p0);
            path.line_to(segment.line.p1);
        }
        path
    }
}

/// Derives the connectors for `members` placed at `positions`.
///
/// This is a pure function: call it again after every layout change. Any
/// relation whose endpoint has no record or no position is left out; the
/// rest of the diagram is unaffected.
#[must_use]
pub fn compute_connections(
    members: &[FamilyMember],
    positions: &PositionMap,
    style: &ConnectionStyle,
) -> Connections {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("compute_connections", members = members.len());
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let index = MemberIndex::new(members);
    let connections = Connections {
        parent_child: parent_child_connections(&index, positions, style),
        marriage: marriage_connections(&index, positions, style),
        sibling: sibling_connections(&index, positions, style),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        parent_child = connections.parent_child.len(),
        marriage = connections.marriage.len(),
        sibling = connections.sibling.len(),
        "computed connections"
    );

    connections
}
