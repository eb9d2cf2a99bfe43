// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Line, Point};
use lineage_layout::PositionMap;
use lineage_model::{FamilyMember, MaritalStatus, MemberId, MemberIndex};

use crate::style::ConnectionStyle;

/// What the decoration at the middle of a marriage line shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// An ongoing marriage.
    Married,
    /// Either partner is recorded as divorced.
    Divorced,
    /// Either partner is recorded as widowed or is deceased.
    Widowed,
}

/// Decoration at the midpoint of a marriage line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarriageMarker {
    /// Midpoint of the line.
    pub center: Point,
    /// What to draw.
    pub kind: MarkerKind,
}

/// Line between two spouses' cards.
#[derive(Clone, Debug, PartialEq)]
pub struct MarriageConnection {
    /// The partner on the left.
    pub left: MemberId,
    /// The partner on the right.
    pub right: MemberId,
    /// Between the inner card edges.
    pub line: Line,
    /// Decoration at the line's midpoint.
    pub marker: MarriageMarker,
    /// From each partner's inner edge, at its own Y, to the line; left first.
    pub stubs: [Line; 2],
}

impl MarriageConnection {
    /// All segments of this connection.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        core::iter::once(self.line).chain(self.stubs)
    }
}

fn marker_kind(a: &FamilyMember, b: &FamilyMember) -> MarkerKind {
    let statuses = [a.marital_status, b.marital_status];
    if statuses.contains(&MaritalStatus::Divorced) {
        MarkerKind::Divorced
    } else if statuses.contains(&MaritalStatus::Widowed) || !a.is_alive || !b.is_alive {
        MarkerKind::Widowed
    } else {
        MarkerKind::Married
    }
}

pub(crate) fn marriage_connections(
    index: &MemberIndex<'_>,
    positions: &PositionMap,
    style: &ConnectionStyle,
) -> Vec<MarriageConnection> {
    let mut processed: HashSet<(&str, &str)> = HashSet::new();
    let mut out = Vec::new();

    for member in index.iter() {
        let Some(spouse_id) = &member.spouse_id else {
            continue;
        };
        if *spouse_id == member.id || processed.contains(&(member.id.as_str(), spouse_id.as_str()))
        {
            continue;
        }
        let (Some(spouse), Some(a), Some(b)) = (
            index.get(spouse_id),
            positions.get(&member.id),
            positions.get(spouse_id),
        ) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(member = %member.id, spouse = %spouse_id, "skipping unplaced spouse");
            continue;
        };
        processed.insert((member.id.as_str(), spouse.id.as_str()));
        processed.insert((spouse.id.as_str(), member.id.as_str()));

        let ((left, left_at), (right, right_at)) = if b.x < a.x {
            ((spouse, b), (member, a))
        } else {
            ((member, a), (spouse, b))
        };
        out.push(couple(left, left_at, right, right_at, style));
    }
    out
}

fn couple(
    left: &FamilyMember,
    left_at: Point,
    right: &FamilyMember,
    right_at: Point,
    style: &ConnectionStyle,
) -> MarriageConnection {
    let half_w = style.half_card().x;
    let (mut x0, mut x1) = (left_at.x + half_w, right_at.x - half_w);
    if x0 > x1 {
        // Overlapping cards: fall back to the centers.
        (x0, x1) = (left_at.x, right_at.x);
    }
    let line_y = (left_at.y + right_at.y) / 2.0 + style.marriage_offset;
    let line = Line::new((x0, line_y), (x1, line_y));

    MarriageConnection {
        left: left.id.clone(),
        right: right.id.clone(),
        line,
        marker: MarriageMarker {
            center: line.midpoint(),
            kind: marker_kind(left, right),
        },
        stubs: [
            Line::new((x0, left_at.y), (x0, line_y)),
            Line::new((x1, right_at.y), (x1, line_y)),
        ],
    }
}
