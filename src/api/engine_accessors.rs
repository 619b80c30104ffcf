use crate::core::Segment;
use crate::error::ChartResult;
use crate::interaction::InteractionMode;
use crate::render::{RenderFrame, Renderer, ShapeKey};

use super::{DragPie, DragPieConfig, ResolvedBounds};

impl<R: Renderer> DragPie<R> {
    /// Renderer holding the drawn chart.
    #[must_use]
    pub fn chart_element(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn config(&self) -> &DragPieConfig {
        &self.config
    }

    #[must_use]
    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }

    #[must_use]
    pub fn bounds(&self) -> ResolvedBounds {
        self.bounds
    }

    #[must_use]
    pub fn data(&self) -> &[Segment] {
        &self.data
    }

    /// Mutable access for host-side edits. Call [`DragPie::refresh`]
    /// afterwards; nothing is redrawn automatically.
    pub fn data_mut(&mut self) -> &mut Vec<Segment> {
        &mut self.data
    }

    #[must_use]
    pub fn last_frame(&self) -> &RenderFrame {
        &self.last_frame
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ShapeKey> {
        self.interaction.selected()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&ShapeKey> {
        self.interaction.hovered()
    }

    /// Clears the selection and restyles the affected shape.
    pub fn clear_selected(&mut self) -> ChartResult<Option<ShapeKey>> {
        let previous = self.interaction.clear_selected();
        if previous.is_some() {
            self.restyle()?;
        }
        Ok(previous)
    }
}
