//! Configuration options for the marker overlay.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::camera::Viewport;
use crate::error::{OverlayError, Result};

/// Tunable constants of the marker layout.
///
/// The defaults reproduce the classic layout: a square icon one fourteenth of
/// the viewport height, an arrow a quarter of the icon wide and half of it tall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayOptions {
    /// Viewport height divided by this gives the icon edge length.
    pub icon_divisor: f32,

    /// Arrow width as a fraction of the icon width.
    pub arrow_width_ratio: f32,

    /// Arrow height as a fraction of the icon height. Also sets the margin.
    pub arrow_height_ratio: f32,

    /// Forward nudge applied to points lying exactly on the camera plane.
    pub plane_epsilon: f32,

    /// Squared pixel distance above which a marker counts as clamped and gets an arrow.
    pub arrow_threshold_sq: f32,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            icon_divisor: 14.0,
            arrow_width_ratio: 0.25,
            arrow_height_ratio: 0.5,
            plane_epsilon: 1e-5,
            arrow_threshold_sq: 0.001,
        }
    }
}

impl OverlayOptions {
    /// Parses options from JSON text and validates them.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a JSON file and validates them.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every value is finite and in range.
    pub fn validate(&self) -> Result<()> {
        check_positive("icon_divisor", self.icon_divisor)?;
        check_positive("arrow_width_ratio", self.arrow_width_ratio)?;
        check_positive("arrow_height_ratio", self.arrow_height_ratio)?;
        check_positive("plane_epsilon", self.plane_epsilon)?;
        if !self.arrow_threshold_sq.is_finite() || self.arrow_threshold_sq < 0.0 {
            return Err(OverlayError::InvalidOption {
                name: "arrow_threshold_sq",
                reason: format!("expected a finite value >= 0, got {}", self.arrow_threshold_sq),
            });
        }
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OverlayError::InvalidOption {
            name,
            reason: format!("expected a finite value > 0, got {value}"),
        })
    }
}

/// Pixel sizes of the marker parts for one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerMetrics {
    /// Icon width and height.
    pub icon_size: Vec2,
    /// Half of `icon_size`.
    pub icon_ext: Vec2,
    /// Arrow width and height.
    pub arrow_size: Vec2,
    /// Half of `arrow_size`.
    pub arrow_ext: Vec2,
    /// Extra inset kept free around the icon for the arrow.
    pub margin: f32,
}

impl MarkerMetrics {
    /// Derives the metrics from the viewport height.
    #[must_use]
    pub fn new(viewport: Viewport, options: &OverlayOptions) -> Self {
        let edge = viewport.height() / options.icon_divisor;
        let icon_size = Vec2::splat(edge);
        let arrow_size = Vec2::new(
            icon_size.x * options.arrow_width_ratio,
            icon_size.y * options.arrow_height_ratio,
        );
        Self {
            icon_size,
            icon_ext: icon_size * 0.5,
            arrow_size,
            arrow_ext: arrow_size * 0.5,
            margin: arrow_size.y,
        }
    }

    /// Distance from the icon center to the arrow center.
    #[must_use]
    pub fn arrow_offset(&self) -> f32 {
        self.icon_ext.x + self.arrow_ext.y
    }
}
