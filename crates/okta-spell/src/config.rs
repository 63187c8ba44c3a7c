#![forbid(unsafe_code)]

//! Tunable constants for layout, gesture thresholds, and scene strokes.
//!
//! Every scale is relative to the circle radius (or, for
//! [`LayoutConfig::radius_scale`], to the smaller surface dimension), so a
//! config is independent of the actual surface size.

use std::fmt;

use okta_core::geometry::DEFAULT_RADIUS_SCALE;
use serde::{Deserialize, Serialize};

use crate::codec::ACTION_LIMIT;

// ---------------------------------------------------------------------------
// LayoutConfig
// ---------------------------------------------------------------------------

/// Configuration for the octagon layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Circle radius as a fraction of the smaller surface dimension.
    /// Default: 0.34
    pub radius_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius_scale: DEFAULT_RADIUS_SCALE,
        }
    }
}

// ---------------------------------------------------------------------------
// LogicConfig
// ---------------------------------------------------------------------------

/// Configuration for gesture hit testing and the skip rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicConfig {
    /// Hit radius for starting a drag, as a fraction of the circle radius.
    /// Default: 0.35
    pub start_threshold_scale: f32,

    /// Hit radius for ending a drag on a target vertex.
    /// Default: 0.35
    pub end_threshold_scale: f32,

    /// Hit radius for a tap on the current vertex.
    /// Default: 0.35
    pub tap_threshold_scale: f32,

    /// Steps that must exist before a skip is accepted.
    /// Default: 4
    pub min_actions_for_skip: usize,
}

impl Default for LogicConfig {
    fn default() -> Self {
        Self {
            start_threshold_scale: 0.35,
            end_threshold_scale: 0.35,
            tap_threshold_scale: 0.35,
            min_actions_for_skip: 4,
        }
    }
}

impl LogicConfig {
    /// Set all three hit thresholds at once.
    #[must_use]
    pub fn with_thresholds(mut self, scale: f32) -> Self {
        self.start_threshold_scale = scale;
        self.end_threshold_scale = scale;
        self.tap_threshold_scale = scale;
        self
    }

    /// Set the number of steps required before skipping.
    #[must_use]
    pub fn with_min_actions_for_skip(mut self, steps: usize) -> Self {
        self.min_actions_for_skip = steps;
        self
    }
}

// ---------------------------------------------------------------------------
// SceneConfig
// ---------------------------------------------------------------------------

/// Stroke geometry for the scene builder. All values scale the circle radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub base_line_width_scale: f32,
    pub vertex_radius_scale: f32,
    pub vertex_line_width_scale: f32,
    pub preview_line_width_scale: f32,
    /// Radius of the innermost marker ring around a vertex.
    pub ring_base_radius_scale: f32,
    /// Gap between stacked marker rings.
    pub ring_spacing_scale: f32,
    /// Dash and gap lengths for skip rings.
    pub skip_dash_scale: [f32; 2],
    pub skip_line_width_scale: f32,
    pub marker_line_width_scale: f32,
    /// Perpendicular spacing between parallel strokes on the same chord.
    pub curve_offset_scale: f32,
    pub connection_line_width_scale: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            base_line_width_scale: 0.003,
            vertex_radius_scale: 0.03,
            vertex_line_width_scale: 0.0075,
            preview_line_width_scale: 0.015,
            ring_base_radius_scale: 0.07,
            ring_spacing_scale: 0.035,
            skip_dash_scale: [0.015, 0.07],
            skip_line_width_scale: 0.012,
            marker_line_width_scale: 0.015,
            curve_offset_scale: 0.15,
            connection_line_width_scale: 0.017,
        }
    }
}

impl SceneConfig {
    fn scales(&self) -> [(&'static str, f32); 12] {
        [
            ("scene.base_line_width_scale", self.base_line_width_scale),
            ("scene.vertex_radius_scale", self.vertex_radius_scale),
            ("scene.vertex_line_width_scale", self.vertex_line_width_scale),
            ("scene.preview_line_width_scale", self.preview_line_width_scale),
            ("scene.ring_base_radius_scale", self.ring_base_radius_scale),
            ("scene.ring_spacing_scale", self.ring_spacing_scale),
            ("scene.skip_dash_scale[0]", self.skip_dash_scale[0]),
            ("scene.skip_dash_scale[1]", self.skip_dash_scale[1]),
            ("scene.skip_line_width_scale", self.skip_line_width_scale),
            ("scene.marker_line_width_scale", self.marker_line_width_scale),
            ("scene.curve_offset_scale", self.curve_offset_scale),
            ("scene.connection_line_width_scale", self.connection_line_width_scale),
        ]
    }
}

// ---------------------------------------------------------------------------
// OktagramConfig
// ---------------------------------------------------------------------------

/// Full widget configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OktagramConfig {
    pub layout: LayoutConfig,
    pub logic: LogicConfig,
    pub scene: SceneConfig,
}

impl OktagramConfig {
    /// Replace the layout section.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the logic section.
    #[must_use]
    pub fn with_logic(mut self, logic: LogicConfig) -> Self {
        self.logic = logic;
        self
    }

    /// Replace the scene section.
    #[must_use]
    pub fn with_scene(mut self, scene: SceneConfig) -> Self {
        self.scene = scene;
        self
    }

    /// Check that every scale is finite and positive and that the skip
    /// minimum fits within the action limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let logic = [
            ("layout.radius_scale", self.layout.radius_scale),
            ("logic.start_threshold_scale", self.logic.start_threshold_scale),
            ("logic.end_threshold_scale", self.logic.end_threshold_scale),
            ("logic.tap_threshold_scale", self.logic.tap_threshold_scale),
        ];
        for (field, value) in logic.into_iter().chain(self.scene.scales()) {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveScale { field, value });
            }
        }
        if self.logic.min_actions_for_skip > ACTION_LIMIT {
            return Err(ConfigError::SkipMinimumTooLarge {
                min_actions_for_skip: self.logic.min_actions_for_skip,
            });
        }
        Ok(())
    }
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A scale was zero, negative, NaN or infinite.
    NonPositiveScale { field: &'static str, value: f32 },
    /// Skipping could never become legal.
    SkipMinimumTooLarge { min_actions_for_skip: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScale { field, value } => {
                write!(f, "config field {field} must be finite and > 0 (got {value})")
            }
            Self::SkipMinimumTooLarge {
                min_actions_for_skip,
            } => write!(
                f,
                "logic.min_actions_for_skip = {min_actions_for_skip} exceeds the action limit {ACTION_LIMIT}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
