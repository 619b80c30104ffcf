use std::collections::HashSet;

use kurbo::{Point, Shape};

use crate::error::{ChartError, ChartResult};
use crate::render::{ArcPrimitive, LabelPrimitive, ScenePrimitive, ShapeKey};

/// Backend-agnostic scene for one draw pass.
///
/// Geometry is expressed in chart-local units centered on the pie; the
/// chart occupies a `size` x `size` pixel square and local units are scaled
/// by [`RenderFrame::local_scale`]. Primitives are stored in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub size: f64,
    /// Local-unit radius mapped onto half of `size`.
    pub extent_radius: f64,
    pub primitives: Vec<ScenePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(size: f64, extent_radius: f64) -> Self {
        Self {
            size,
            extent_radius,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: ScenePrimitive) {
        self.primitives.push(primitive);
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcPrimitive> {
        self.primitives.iter().filter_map(ScenePrimitive::as_arc)
    }

    pub fn arcs_mut(&mut self) -> impl Iterator<Item = &mut ArcPrimitive> {
        self.primitives.iter_mut().filter_map(|primitive| match primitive {
            ScenePrimitive::Arc(arc) => Some(arc),
            ScenePrimitive::Label(_) => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &LabelPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            ScenePrimitive::Label(label) => Some(label),
            ScenePrimitive::Arc(_) => None,
        })
    }

    #[must_use]
    pub fn arc(&self, key: &ShapeKey) -> Option<&ArcPrimitive> {
        self.arcs().find(|arc| &arc.key == key)
    }

    /// Draw-order position of a primitive.
    #[must_use]
    pub fn z_index(&self, key: &ShapeKey) -> Option<usize> {
        self.primitives
            .iter()
            .position(|primitive| primitive.key() == key)
    }

    /// Pixels per local unit.
    #[must_use]
    pub fn local_scale(&self) -> f64 {
        if self.extent_radius <= 0.0 {
            return 1.0;
        }
        self.size / (2.0 * self.extent_radius)
    }

    /// Converts a chart pixel position into local coordinates.
    #[must_use]
    pub fn to_local(&self, pointer: Point) -> Point {
        let scale = self.local_scale();
        Point::new(
            pointer.x / scale - self.extent_radius,
            pointer.y / scale - self.extent_radius,
        )
    }

    /// Topmost arc under a chart pixel position.
    #[must_use]
    pub fn hit_test(&self, pointer: Point) -> Option<&ShapeKey> {
        let local = self.to_local(pointer);
        self.primitives
            .iter()
            .rev()
            .filter_map(ScenePrimitive::as_arc)
            .find(|arc| arc.path.contains(local))
            .map(|arc| &arc.key)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ChartError::InvalidData(
                "frame size must be finite and > 0".to_owned(),
            ));
        }

        let mut seen = HashSet::with_capacity(self.primitives.len());
        for primitive in &self.primitives {
            primitive.validate()?;
            if !seen.insert(primitive.key()) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate shape key in frame: {:?}",
                    primitive.key()
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
