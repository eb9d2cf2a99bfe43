// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage Layout: deterministic positions for family members.
//!
//! Given an ordered list of [`FamilyMember`](lineage_model::FamilyMember)
//! records, this crate computes a card center for every member. Two
//! positioners are provided:
//!
//! - [`compute_positions`]: groups members by generation and places each
//!   generation on a centered row of a padded canvas. Rows are stacked in
//!   ascending generation order and the whole tree is centered vertically.
//!   Also returns the canvas size.
//! - [`layout_by_tier`]: assigns each generation a fixed-Y band ([`Tier`]),
//!   orders members inside a band by name with spouses side by side, and
//!   constrains dragging to horizontal moves ([`constrain_drag`],
//!   [`NodeDrag`]).
//!
//! Both are pure functions of their input: the same members in the same order
//! always produce the same [`PositionMap`]. [`layout`] selects a positioner by
//! [`LayoutMode`], and [`LayoutCache`] memoizes the last result.
//!
//! Positions are in canvas coordinates, before any pan/zoom transform.
//! Relations that point at unknown members are irrelevant here; every member
//! in the input receives exactly one position.
//!
//! ## Minimal example
//!
//! ```rust
//! use lineage_layout::{GenerationLayoutConfig, compute_positions};
//! use lineage_model::FamilyMember;
//!
//! let members = [
//!     FamilyMember::new("a", "Ada").with_generation(0),
//!     FamilyMember::new("b", "Bo").with_generation(0),
//! ];
//! let layout = compute_positions(&members, &GenerationLayoutConfig::default());
//!
//! let a = layout.positions.get("a").unwrap();
//! let b = layout.positions.get("b").unwrap();
//! assert_eq!(b.x - a.x, 300.0);
//! assert_eq!(layout.canvas.width, 800.0);
//! ```
//!
//! ## Tier mode
//!
//! ```rust
//! use kurbo::Point;
//! use lineage_layout::{TierLayoutConfig, layout_by_tier};
//! use lineage_model::FamilyMember;
//!
//! let members = [
//!     FamilyMember::new("p", "Parent").with_generation(0),
//!     FamilyMember::new("c", "Child").with_generation(1),
//! ];
//! let layout = layout_by_tier(&members, &TierLayoutConfig::default());
//!
//! // Dragging a card can only move it sideways.
//! let pinned = layout.constrain_drag(&"c".into(), Point::new(40.0, 0.0));
//! assert_eq!(pinned, Point::new(40.0, layout.tiers[1].y));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std` feature.
//! - `libm`: forwards to Kurbo's `libm` feature for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for the configuration types.
//! - `tracing`: spans around layout passes and events for cache misses.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;
mod config;
mod generation;
mod positions;
mod tier;

pub use cache::{Layout, LayoutCache, LayoutConfig, LayoutMode, layout};
pub use config::{GenerationLayoutConfig, LayoutConfigError, TierLayoutConfig};
pub use generation::{GenerationBuckets, GenerationLayout, canvas_size, compute_positions};
pub use positions::PositionMap;
pub use tier::{NodeDrag, Tier, TierLayout, constrain_drag, layout_by_tier};
