// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

/// Error returned by [`ViewportConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportConfigError {
    /// The named field is NaN or infinite.
    NonFinite {
        /// Field name.
        field: &'static str,
    },
    /// The named field must be strictly positive.
    NonPositive {
        /// Field name.
        field: &'static str,
    },
    /// The named field is negative.
    Negative {
        /// Field name.
        field: &'static str,
    },
    /// `min_zoom` is larger than `max_zoom`.
    InvertedZoomRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// `initial_zoom` lies outside `[min_zoom, max_zoom]`.
    InitialZoomOutOfRange {
        /// Configured initial zoom.
        initial: f64,
    },
    /// `initial_zoom` is not a multiple of `zoom_precision`.
    InitialZoomOffGrid {
        /// Configured initial zoom.
        initial: f64,
        /// Configured precision.
        precision: f64,
    },
}

impl fmt::Display for ViewportConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "viewport setting `{field}` must be finite"),
            Self::NonPositive { field } => {
                write!(f, "viewport setting `{field}` must be greater than zero")
            }
            Self::Negative { field } => {
                write!(f, "viewport setting `{field}` must not be negative")
            }
            Self::InvertedZoomRange { min, max } => {
                write!(f, "minimum zoom {min}% is above maximum zoom {max}%")
            }
            Self::InitialZoomOutOfRange { initial } => {
                write!(f, "initial zoom {initial}% is outside the zoom range")
            }
            Self::InitialZoomOffGrid { initial, precision } => {
                write!(f, "initial zoom {initial}% is not a multiple of {precision}%")
            }
        }
    }
}

impl core::error::Error for ViewportConfigError {}

fn check(field: &'static str, value: f64, allow_zero: bool) -> Result<(), ViewportConfigError> {
    if !value.is_finite() {
        Err(ViewportConfigError::NonFinite { field })
    } else if value < 0.0 {
        Err(ViewportConfigError::Negative { field })
    } else if value == 0.0 && !allow_zero {
        Err(ViewportConfigError::NonPositive { field })
    } else {
        Ok(())
    }
}

/// Zoom limits, step sizes and gesture tuning for
/// [`ViewportController`](crate::ViewportController).
///
/// Zoom values are percentages: `100.0` draws one canvas unit per screen
/// pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportConfig {
    /// Smallest zoom percentage.
    pub min_zoom: f64,
    /// Largest zoom percentage.
    pub max_zoom: f64,
    /// Zoom percentage before any interaction and after [`reset`](crate::ViewportController::reset).
    pub initial_zoom: f64,
    /// Zoom values are rounded to a multiple of this; smaller changes are
    /// dropped.
    pub zoom_precision: f64,
    /// Zoom percentage per wheel unit at 0% zoom; grows with the current zoom.
    pub wheel_base_step: f64,
    /// Wheel units per raw wheel delta (one notch of 100 pixels is one unit by
    /// default).
    pub wheel_delta_scale: f64,
    /// Wheel input is coalesced for this long after the last applied step.
    pub wheel_coalesce_ms: u64,
    /// Accumulated wheel units that apply a step without waiting.
    pub wheel_threshold: f64,
    /// Zoom percentage per `+`/`-` key press.
    pub keyboard_zoom_step: f64,
    /// Zoom percentage per pixel of change in pinch distance.
    pub pinch_sensitivity: f64,
    /// Pixels per arrow key press.
    pub pan_step: f64,
    /// Background grid cell size in pixels.
    pub grid_cell_size: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: 25.0,
            max_zoom: 200.0,
            initial_zoom: 100.0,
            zoom_precision: 0.5,
            wheel_base_step: 5.0,
            wheel_delta_scale: 0.01,
            wheel_coalesce_ms: 100,
            wheel_threshold: 1.0,
            keyboard_zoom_step: 10.0,
            pinch_sensitivity: 0.5,
            pan_step: 50.0,
            grid_cell_size: 20.0,
        }
    }
}

impl ViewportConfig {
    /// Checks that the zoom range is positive and ordered, that the initial
    /// zoom is in range and on the precision grid, and that every step is
    /// finite and non-negative.
    pub fn validate(&self) -> Result<(), ViewportConfigError> {
        check("min_zoom", self.min_zoom, false)?;
        check("max_zoom", self.max_zoom, false)?;
        if self.min_zoom > self.max_zoom {
            return Err(ViewportConfigError::InvertedZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        check("initial_zoom", self.initial_zoom, false)?;
        if !(self.min_zoom..=self.max_zoom).contains(&self.initial_zoom) {
            return Err(ViewportConfigError::InitialZoomOutOfRange {
                initial: self.initial_zoom,
            });
        }
        check("zoom_precision", self.zoom_precision, false)?;
        let steps = self.initial_zoom / self.zoom_precision;
        if (steps - steps.round()).abs() > 1e-9 {
            return Err(ViewportConfigError::InitialZoomOffGrid {
                initial: self.initial_zoom,
                precision: self.zoom_precision,
            });
        }
        check("wheel_base_step", self.wheel_base_step, true)?;
        check("wheel_delta_scale", self.wheel_delta_scale, true)?;
        check("wheel_threshold", self.wheel_threshold, false)?;
        check("keyboard_zoom_step", self.keyboard_zoom_step, true)?;
        check("pinch_sensitivity", self.pinch_sensitivity, true)?;
        check("pan_step", self.pan_step, true)?;
        check("grid_cell_size", self.grid_cell_size, false)
    }

    /// Clamps `zoom` into the configured range and rounds it to the
    /// configured precision.
    #[must_use]
    pub fn normalize_zoom(&self, zoom: f64) -> f64 {
        let clamped = zoom.max(self.min_zoom).min(self.max_zoom);
        let rounded = if self.zoom_precision > 0.0 {
            (clamped / self.zoom_precision).round() * self.zoom_precision
        } else {
            clamped
        };
        rounded.max(self.min_zoom).min(self.max_zoom)
    }

    /// Wheel zoom step at `zoom` percent: `wheel_base_step * (1 + zoom/100 * 0.5)`.
    #[must_use]
    pub fn wheel_step(&self, zoom: f64) -> f64 {
        self.wheel_base_step * (1.0 + zoom / 100.0 * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ViewportConfig::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let config = ViewportConfig {
            min_zoom: 300.0,
            ..ViewportConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ViewportConfigError::InvertedZoomRange {
                min: 300.0,
                max: 200.0
            })
        );
    }

    #[test]
    fn zero_and_bad_values_are_named() {
        let zero_min = ViewportConfig {
            min_zoom: 0.0,
            ..ViewportConfig::default()
        };
        assert_eq!(
            zero_min.validate(),
            Err(ViewportConfigError::NonPositive { field: "min_zoom" })
        );

        let nan_step = ViewportConfig {
            pan_step: f64::NAN,
            ..ViewportConfig::default()
        };
        assert_eq!(
            nan_step.validate(),
            Err(ViewportConfigError::NonFinite { field: "pan_step" })
        );

        let initial = ViewportConfig {
            initial_zoom: 250.0,
            ..ViewportConfig::default()
        };
        assert_eq!(
            initial.validate().map_err(|e| e.to_string()),
            Err("initial zoom 250% is outside the zoom range".to_string())
        );
    }

    #[test]
    fn initial_zoom_must_sit_on_the_precision_grid() {
        let off_grid = ViewportConfig {
            initial_zoom: 100.3,
            ..ViewportConfig::default()
        };
        assert_eq!(
            off_grid.validate(),
            Err(ViewportConfigError::InitialZoomOffGrid {
                initial: 100.3,
                precision: 0.5
            })
        );

        let on_grid = ViewportConfig {
            initial_zoom: 87.5,
            ..ViewportConfig::default()
        };
        assert_eq!(on_grid.validate(), Ok(()));
    }

    #[test]
    fn normalize_rounds_to_half_percent_and_clamps() {
        let config = ViewportConfig::default();
        assert_eq!(config.normalize_zoom(101.26), 101.5);
        assert_eq!(config.normalize_zoom(101.24), 101.0);
        assert_eq!(config.normalize_zoom(10.0), 25.0);
        assert_eq!(config.normalize_zoom(999.0), 200.0);
    }

    #[test]
    fn wheel_step_grows_with_zoom() {
        let config = ViewportConfig::default();
        assert_eq!(config.wheel_step(0.0), 5.0);
        assert_eq!(config.wheel_step(100.0), 7.5);
        assert_eq!(config.wheel_step(200.0), 10.0);
    }
}
