mod color_scale;
mod frame;
mod null_renderer;
mod primitives;
mod reconciler;
mod svg_renderer;

pub use color_scale::{CATEGORY10, OrdinalColorScale};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPrimitive, ArcRole, Color, LabelPrimitive, ScenePrimitive, ShapeKey, ShapeState,
};
pub use reconciler::{ReconcileReport, ShapeReconciler};
pub use svg_renderer::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// The engine never touches backend elements directly: a
/// [`ShapeReconciler`] diffs each deterministic [`RenderFrame`] against the
/// live set and issues keyed create/update/remove calls, then hands the whole
/// frame over for ordering.
pub trait Renderer {
    fn create(&mut self, primitive: &ScenePrimitive) -> ChartResult<()>;

    fn update(&mut self, primitive: &ScenePrimitive) -> ChartResult<()>;

    fn remove(&mut self, key: &ShapeKey) -> ChartResult<()>;

    /// Called once per reconciliation after every element call.
    fn finish_frame(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let _ = frame;
        Ok(())
    }
}
