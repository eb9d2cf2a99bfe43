// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mode selection and a single-entry memoization layer.

use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash, Hasher};

use hashbrown::DefaultHashBuilder;
use kurbo::{Point, Rect, Size};
use lineage_model::FamilyMember;

use crate::config::{GenerationLayoutConfig, TierLayoutConfig};
use crate::generation::compute_positions;
use crate::positions::PositionMap;
use crate::tier::{Tier, layout_by_tier};

/// Which positioner produces a [`Layout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// Centered rows on a padded canvas ([`compute_positions`]).
    #[default]
    Generation,
    /// Fixed bands with horizontal-only dragging ([`layout_by_tier`]).
    Tier,
}

/// Configuration for both layout modes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Settings for [`LayoutMode::Generation`].
    pub generation: GenerationLayoutConfig,
    /// Settings for [`LayoutMode::Tier`].
    pub tier: TierLayoutConfig,
}

/// Mode-independent layout result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    /// Mode that produced this layout.
    pub mode: LayoutMode,
    /// Card center of every member.
    pub positions: PositionMap,
    /// Top-left corner of the canvas. The origin in generation mode; the
    /// corner of the cards' bounding box in tier mode.
    pub origin: Point,
    /// Canvas extent. In tier mode this is the size of the cards' bounding box.
    pub canvas: Size,
    /// Bands; empty in generation mode.
    pub tiers: Vec<Tier>,
}

impl Layout {
    /// The canvas as a rectangle in canvas coordinates.
    #[must_use]
    pub fn canvas_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.canvas)
    }
}

/// Runs the positioner selected by `mode`.
#[must_use]
pub fn layout(members: &[FamilyMember], mode: LayoutMode, config: &LayoutConfig) -> Layout {
    match mode {
        LayoutMode::Generation => {
            let out = compute_positions(members, &config.generation);
            Layout {
                mode,
                positions: out.positions,
                origin: Point::ORIGIN,
                canvas: out.canvas,
                tiers: Vec::new(),
            }
        }
        LayoutMode::Tier => {
            let out = layout_by_tier(members, &config.tier);
            let bounds = out.bounds().unwrap_or(Rect::ZERO);
            Layout {
                mode,
                positions: out.positions,
                origin: bounds.origin(),
                canvas: bounds.size(),
                tiers: out.tiers,
            }
        }
    }
}

/// Memoizes the most recent [`layout`] call.
///
/// The key is a fingerprint of every input that can change the output: ids,
/// generations, names and spouse ids in input order, the mode, and the
/// configuration. A hit returns the stored layout; anything else recomputes.
/// Results are identical with or without the cache.
#[derive(Debug, Default)]
pub struct LayoutCache {
    hasher: DefaultHashBuilder,
    entry: Option<(u64, Layout)>,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the layout for the given input, recomputing only on change.
    pub fn layout(
        &mut self,
        members: &[FamilyMember],
        mode: LayoutMode,
        config: &LayoutConfig,
    ) -> &Layout {
        let key = self.fingerprint(members, mode, config);
        let fresh = matches!(&self.entry, Some((k, _)) if *k == key);
        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.entry = None;
            #[cfg(feature = "tracing")]
            tracing::debug!(members = members.len(), ?mode, "layout cache miss");
        }
        let (_, cached) = self
            .entry
            .get_or_insert_with(|| (key, layout(members, mode, config)));
        cached
    }

    /// Drops the stored layout.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of calls answered from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of calls that recomputed.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    fn fingerprint(&self, members: &[FamilyMember], mode: LayoutMode, config: &LayoutConfig) -> u64 {
        let mut state = self.hasher.build_hasher();
        mode.hash(&mut state);
        let g = &config.generation;
        let t = &config.tier;
        for value in [
            g.min_width,
            g.min_height,
            g.card_spacing,
            g.generation_height,
            g.padding,
            t.start_y,
            t.tier_height,
            t.node_width,
            t.node_height,
            t.spacing,
            t.center_x,
        ] {
            state.write_u64(value.to_bits());
        }
        state.write_usize(members.len());
        for member in members {
            member.id.hash(&mut state);
            member.generation.hash(&mut state);
            member.name.hash(&mut state);
            member.spouse_id.hash(&mut state);
        }
        state.finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn family() -> Vec<FamilyMember> {
        vec![
            FamilyMember::new("a", "A").with_generation(0),
            FamilyMember::new("b", "B").with_generation(1),
        ]
    }

    #[test]
    fn generation_mode_has_no_tiers() {
        let out = layout(&family(), LayoutMode::Generation, &LayoutConfig::default());
        assert!(out.tiers.is_empty());
        // Two generations: 350 + 2 * 200 exceeds the minimum height.
        assert_eq!(out.canvas, Size::new(800.0, 750.0));
        assert_eq!(out.canvas_rect(), Rect::new(0.0, 0.0, 800.0, 750.0));
    }

    #[test]
    fn tier_mode_canvas_is_card_bounds() {
        let out = layout(&family(), LayoutMode::Tier, &LayoutConfig::default());
        assert_eq!(out.tiers.len(), 2);
        assert_eq!(out.canvas, Size::new(200.0, 300.0));
        assert_eq!(out.canvas_rect(), Rect::new(-100.0, 50.0, 100.0, 350.0));
    }

    #[test]
    fn cache_hits_on_identical_input() {
        let members = family();
        let config = LayoutConfig::default();
        let mut cache = LayoutCache::new();

        let first = cache.layout(&members, LayoutMode::Generation, &config).clone();
        let second = cache.layout(&members, LayoutMode::Generation, &config).clone();
        assert_eq!(first, second);
        assert_eq!((cache.hits(), cache.misses()), (1, 1));
    }

    #[test]
    fn cache_misses_on_relevant_change() {
        let mut members = family();
        let config = LayoutConfig::default();
        let mut cache = LayoutCache::new();
        let _ = cache.layout(&members, LayoutMode::Generation, &config);

        members[1].generation = Some(0);
        let moved = cache.layout(&members, LayoutMode::Generation, &config).clone();
        assert_eq!(moved, layout(&members, LayoutMode::Generation, &config));

        let _ = cache.layout(&members, LayoutMode::Tier, &config);
        assert_eq!(cache.misses(), 3);

        cache.invalidate();
        let _ = cache.layout(&members, LayoutMode::Tier, &config);
        assert_eq!(cache.misses(), 4);
    }
}
