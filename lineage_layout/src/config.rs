// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

/// Error returned by the `validate` methods of the layout configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutConfigError {
    /// The named field is NaN or infinite.
    NonFinite {
        /// Field name.
        field: &'static str,
    },
    /// The named field is negative.
    Negative {
        /// Field name.
        field: &'static str,
    },
}

impl fmt::Display for LayoutConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "layout setting `{field}` must be finite"),
            Self::Negative { field } => {
                write!(f, "layout setting `{field}` must not be negative")
            }
        }
    }
}

impl core::error::Error for LayoutConfigError {}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), LayoutConfigError> {
    if !value.is_finite() {
        Err(LayoutConfigError::NonFinite { field })
    } else if value < 0.0 {
        Err(LayoutConfigError::Negative { field })
    } else {
        Ok(())
    }
}

/// Spacing and extents for [`compute_positions`](crate::compute_positions).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerationLayoutConfig {
    /// Smallest canvas width.
    pub min_width: f64,
    /// Smallest canvas height.
    pub min_height: f64,
    /// Horizontal distance between neighboring members of a generation.
    pub card_spacing: f64,
    /// Vertical distance between consecutive generations.
    pub generation_height: f64,
    /// Margin around the occupied area.
    pub padding: f64,
}

impl Default for GenerationLayoutConfig {
    fn default() -> Self {
        Self {
            min_width: 800.0,
            min_height: 600.0,
            card_spacing: 300.0,
            generation_height: 350.0,
            padding: 200.0,
        }
    }
}

impl GenerationLayoutConfig {
    /// Checks that every value is finite and non-negative.
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        check_non_negative("min_width", self.min_width)?;
        check_non_negative("min_height", self.min_height)?;
        check_non_negative("card_spacing", self.card_spacing)?;
        check_non_negative("generation_height", self.generation_height)?;
        check_non_negative("padding", self.padding)
    }
}

/// Band geometry for [`layout_by_tier`](crate::layout_by_tier).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TierLayoutConfig {
    /// Y of the first (lowest generation) tier.
    pub start_y: f64,
    /// Vertical distance between tiers.
    pub tier_height: f64,
    /// Card width.
    pub node_width: f64,
    /// Card height; only used for bounds.
    pub node_height: f64,
    /// Horizontal gap between neighboring cards.
    pub spacing: f64,
    /// X that every row is centered about.
    pub center_x: f64,
}

impl Default for TierLayoutConfig {
    fn default() -> Self {
        Self {
            start_y: 100.0,
            tier_height: 200.0,
            node_width: 200.0,
            node_height: 100.0,
            spacing: 50.0,
            center_x: 0.0,
        }
    }
}

impl TierLayoutConfig {
    /// Card size.
    #[must_use]
    pub fn node_size(&self) -> Size {
        Size::new(self.node_width, self.node_height)
    }

    /// Checks that every value is finite and that sizes are non-negative.
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        if !self.start_y.is_finite() {
            return Err(LayoutConfigError::NonFinite { field: "start_y" });
        }
        if !self.center_x.is_finite() {
            return Err(LayoutConfigError::NonFinite { field: "center_x" });
        }
        check_non_negative("tier_height", self.tier_height)?;
        check_non_negative("node_width", self.node_width)?;
        check_non_negative("node_height", self.node_height)?;
        check_non_negative("spacing", self.spacing)
    }
}
