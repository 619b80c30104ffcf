use crate::core::{ArcGenerator, PieAccessors, Segment};
use crate::error::ChartResult;
use crate::interaction::{DragGesture, InteractionState};
use crate::render::{OrdinalColorScale, RenderFrame, Renderer, ShapeReconciler};

use super::bounds::ChartScales;
use super::{DragPieConfig, PieEvents, ResolvedBounds};

/// Main chart facade consumed by host applications.
///
/// `DragPie` owns the segment data, resolves bounds and scales once at
/// creation, turns drag gestures into bounded value adjustments and keeps
/// the renderer reconciled with the latest frame.
pub struct DragPie<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: DragPieConfig,
    pub(super) accessors: Box<dyn PieAccessors>,
    pub(super) events: Box<dyn PieEvents>,
    pub(super) data: Vec<Segment>,
    pub(super) bounds: ResolvedBounds,
    pub(super) scales: ChartScales,
    pub(super) colors: OrdinalColorScale,
    pub(super) segment_arc: ArcGenerator,
    pub(super) interaction: InteractionState,
    pub(super) gesture: DragGesture,
    pub(super) reconciler: ShapeReconciler,
    pub(super) last_frame: RenderFrame,
    pub(super) id_prefix: String,
}

impl<R: Renderer> DragPie<R> {
    /// Redraws from current data, e.g. after mutating it through
    /// [`DragPie::data_mut`]. Bounds and scales are not re-derived.
    pub fn refresh(&mut self) -> ChartResult<()> {
        self.draw()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
