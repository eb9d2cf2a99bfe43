// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage Connect: connector geometry for family-tree diagrams.
//!
//! [`compute_connections`] turns a member list and the card centers produced
//! by `lineage_layout` into drawable line segments:
//!
//! - [`ParentChildConnection`]: one bracket per parent and child generation.
//!   Children of different generations (for example recorded step or skip
//!   generation links) get separate brackets.
//! - [`MarriageConnection`]: one line per spouse pair between the inner card
//!   edges, with a [`MarriageMarker`] at its midpoint.
//! - [`SiblingConnection`]: one dashed line per group of members recording
//!   the same parent set.
//!
//! The function is pure and keeps no state; recompute after every layout.
//! References to members that are missing from the list or the position map
//! are skipped: the corresponding connector is simply absent.
//!
//! ## Minimal example
//!
//! ```rust
//! use lineage_connect::{ConnectionStyle, compute_connections};
//! use lineage_layout::{GenerationLayoutConfig, compute_positions};
//! use lineage_model::FamilyMember;
//!
//! let members = [
//!     FamilyMember::new("p", "Parent")
//!         .with_generation(0)
//!         .with_children(["a", "b", "c"]),
//!     FamilyMember::new("a", "A").with_generation(1),
//!     FamilyMember::new("b", "B").with_generation(1),
//!     FamilyMember::new("c", "C").with_generation(1),
//! ];
//! let layout = compute_positions(&members, &GenerationLayoutConfig::default());
//! let connections = compute_connections(&members, &layout.positions, &ConnectionStyle::default());
//!
//! let bracket = &connections.parent_child[0];
//! assert!(bracket.bracket.is_some());
//! assert_eq!(bracket.stubs.len(), 3);
//! ```
//!
//! Segments are `kurbo::Line`s in canvas coordinates. Use
//! [`Connections::segments`] to draw them one by one or
//! [`Connections::to_path`] to get one `BezPath` per relation kind.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod connections;
mod marriage;
mod parent_child;
mod sibling;
mod style;

pub use connections::{ConnectionKind, Connections, Segment, compute_connections};
pub use marriage::{MarkerKind, MarriageConnection, MarriageMarker};
pub use parent_child::ParentChildConnection;
pub use sibling::SiblingConnection;
pub use style::ConnectionStyle;
