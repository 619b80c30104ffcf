use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, ScenePrimitive, ShapeKey};

/// No-op renderer used by tests and headless engine usage.
///
/// It counts every reconciliation call and still validates each finished
/// frame so tests catch invalid geometry without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
    pub frames: usize,
    pub last_arc_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn create(&mut self, _primitive: &ScenePrimitive) -> ChartResult<()> {
        self.created += 1;
        Ok(())
    }

    fn update(&mut self, _primitive: &ScenePrimitive) -> ChartResult<()> {
        self.updated += 1;
        Ok(())
    }

    fn remove(&mut self, _key: &ShapeKey) -> ChartResult<()> {
        self.removed += 1;
        Ok(())
    }

    fn finish_frame(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames += 1;
        self.last_arc_count = frame.arcs().count();
        self.last_label_count = frame.labels().count();
        Ok(())
    }
}
