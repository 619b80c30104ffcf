use serde::{Deserialize, Serialize};

use crate::core::Segment;
use crate::interaction::InteractionMode;
use crate::render::{ArcRole, Color, ShapeKey, ShapeState};

use super::ResolvedBounds;

/// One rendered arc as it appears in a [`PieSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSnapshot {
    pub key: ShapeKey,
    pub role: ArcRole,
    pub element_id: String,
    pub classes: String,
    /// SVG path data in chart-local units.
    pub path: String,
    pub fill: Option<Color>,
    pub state: ShapeState,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSnapshot {
    pub id_prefix: String,
    pub size: f64,
    pub bounds: ResolvedBounds,
    pub segment_scale_domain: (f64, f64),
    pub category_scale_domain: (f64, f64),
    pub interaction_mode: InteractionMode,
    pub selected: Option<ShapeKey>,
    pub hovered: Option<ShapeKey>,
    pub data: Vec<Segment>,
    /// Arcs in draw order.
    pub shapes: Vec<ShapeSnapshot>,
}
