use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Public chart bootstrap configuration.
///
/// Every field has a default so partial JSON documents load. Bounds left as
/// `None` are derived from the initial data (see [`super::ResolvedBounds`]).
/// The configuration is fixed once the chart is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPieConfig {
    /// Side of the square chart area in pixels.
    #[serde(default = "default_size")]
    pub size: f64,
    /// Corner rounding of segment arcs, in chart-local units.
    #[serde(default)]
    pub corner_radius: f64,
    /// Ordinal palette for category fills; empty selects the default palette.
    #[serde(default)]
    pub category_colors: Vec<Color>,
    #[serde(default)]
    pub segment_minimum: Option<f64>,
    #[serde(default)]
    pub segment_maximum: Option<f64>,
    #[serde(default)]
    pub category_minimum: Option<f64>,
    #[serde(default)]
    pub category_maximum: Option<f64>,
    /// Domain maximum of the segment weighting scale.
    #[serde(default)]
    pub segment_scale_maximum: Option<f64>,
    /// Domain maximum of the category radius scale.
    #[serde(default)]
    pub category_scale_maximum: Option<f64>,
    #[serde(default)]
    pub integer_value_stepping: bool,
    #[serde(default)]
    pub category_stacking: bool,
    #[serde(default = "default_true")]
    pub segments_draggable: bool,
    #[serde(default = "default_true")]
    pub categories_draggable: bool,
    #[serde(default)]
    pub drag_segment_and_category_together: bool,
    #[serde(default)]
    pub show_segment_labels: bool,
    /// Prefix for element ids; a random token is generated when omitted.
    #[serde(default)]
    pub id_prefix: Option<String>,
    /// Curve flattening tolerance for arc paths.
    #[serde(default = "default_arc_tolerance")]
    pub arc_tolerance: f64,
}

impl Default for DragPieConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            corner_radius: 0.0,
            category_colors: Vec::new(),
            segment_minimum: None,
            segment_maximum: None,
            category_minimum: None,
            category_maximum: None,
            segment_scale_maximum: None,
            category_scale_maximum: None,
            integer_value_stepping: false,
            category_stacking: false,
            segments_draggable: true,
            categories_draggable: true,
            drag_segment_and_category_together: false,
            show_segment_labels: false,
            id_prefix: None,
            arc_tolerance: default_arc_tolerance(),
        }
    }
}

impl DragPieConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn with_category_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.category_colors = colors.into_iter().collect();
        self
    }

    /// Sets explicit segment value bounds.
    #[must_use]
    pub fn with_segment_bounds(mut self, minimum: f64, maximum: f64) -> Self {
        self.segment_minimum = Some(minimum);
        self.segment_maximum = Some(maximum);
        self
    }

    /// Sets explicit category value bounds.
    #[must_use]
    pub fn with_category_bounds(mut self, minimum: f64, maximum: f64) -> Self {
        self.category_minimum = Some(minimum);
        self.category_maximum = Some(maximum);
        self
    }

    #[must_use]
    pub fn with_segment_scale_maximum(mut self, maximum: f64) -> Self {
        self.segment_scale_maximum = Some(maximum);
        self
    }

    #[must_use]
    pub fn with_category_scale_maximum(mut self, maximum: f64) -> Self {
        self.category_scale_maximum = Some(maximum);
        self
    }

    #[must_use]
    pub fn with_integer_value_stepping(mut self, enabled: bool) -> Self {
        self.integer_value_stepping = enabled;
        self
    }

    #[must_use]
    pub fn with_category_stacking(mut self, enabled: bool) -> Self {
        self.category_stacking = enabled;
        self
    }

    #[must_use]
    pub fn with_segments_draggable(mut self, enabled: bool) -> Self {
        self.segments_draggable = enabled;
        self
    }

    #[must_use]
    pub fn with_categories_draggable(mut self, enabled: bool) -> Self {
        self.categories_draggable = enabled;
        self
    }

    #[must_use]
    pub fn with_drag_segment_and_category_together(mut self, enabled: bool) -> Self {
        self.drag_segment_and_category_together = enabled;
        self
    }

    #[must_use]
    pub fn with_segment_labels(mut self, enabled: bool) -> Self {
        self.show_segment_labels = enabled;
        self
    }

    #[must_use]
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_arc_tolerance(mut self, tolerance: f64) -> Self {
        self.arc_tolerance = tolerance;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_size() -> f64 {
    500.0
}

fn default_true() -> bool {
    true
}

fn default_arc_tolerance() -> f64 {
    0.1
}
