use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{DragPie, PieSnapshot, ShapeSnapshot};

impl<R: Renderer> DragPie<R> {
    /// Builds a deterministic snapshot of data, bounds and the last frame.
    #[must_use]
    pub fn snapshot(&self) -> PieSnapshot {
        PieSnapshot {
            id_prefix: self.id_prefix.clone(),
            size: self.config.size,
            bounds: self.bounds,
            segment_scale_domain: self.scales.segment.domain(),
            category_scale_domain: self.scales.category.domain(),
            interaction_mode: self.interaction.mode(),
            selected: self.interaction.selected().cloned(),
            hovered: self.interaction.hovered().cloned(),
            data: self.data.clone(),
            shapes: self
                .last_frame
                .arcs()
                .map(|arc| ShapeSnapshot {
                    key: arc.key.clone(),
                    role: arc.role,
                    element_id: arc.element_id.clone(),
                    classes: arc.css_classes(),
                    path: arc.path.to_svg(),
                    fill: arc.fill,
                    state: arc.state,
                })
                .collect(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
