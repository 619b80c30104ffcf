use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, ScenePrimitive, ShapeKey};

/// Counts of renderer calls issued by one reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileReport {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl ReconcileReport {
    /// `true` when the renderer received no create/update/remove call.
    #[must_use]
    pub fn is_noop(self) -> bool {
        self.created == 0 && self.updated == 0 && self.removed == 0
    }
}

/// Keyed diff between the live element set and the next frame.
///
/// Missing keys are created, changed primitives updated, stale keys removed;
/// identical primitives are left alone so redrawing unchanged data issues no
/// renderer calls.
#[derive(Debug, Default)]
pub struct ShapeReconciler {
    live: IndexMap<ShapeKey, ScenePrimitive>,
}

impl ShapeReconciler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `frame` to `renderer`. The frame must already be validated.
    pub fn reconcile<R>(
        &mut self,
        frame: &RenderFrame,
        renderer: &mut R,
    ) -> ChartResult<ReconcileReport>
    where
        R: Renderer + ?Sized,
    {
        let mut report = ReconcileReport::default();
        let mut next = IndexMap::with_capacity(frame.primitives.len());

        for primitive in &frame.primitives {
            let key = primitive.key();
            match self.live.get(key) {
                None => {
                    renderer.create(primitive)?;
                    report.created += 1;
                }
                Some(previous) if previous != primitive => {
                    renderer.update(primitive)?;
                    report.updated += 1;
                }
                Some(_) => report.unchanged += 1,
            }
            next.insert(key.clone(), primitive.clone());
        }

        for key in self.live.keys() {
            if !next.contains_key(key) {
                renderer.remove(key)?;
                report.removed += 1;
            }
        }

        self.live = next;
        renderer.finish_frame(frame)?;

        trace!(
            created = report.created,
            updated = report.updated,
            removed = report.removed,
            unchanged = report.unchanged,
            "reconciled frame"
        );
        Ok(report)
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn contains(&self, key: &ShapeKey) -> bool {
        self.live.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{LabelPrimitive, NullRenderer};

    fn label(segment_id: &str, text: &str) -> ScenePrimitive {
        ScenePrimitive::Label(LabelPrimitive {
            key: ShapeKey::label(segment_id),
            element_id: format!("p-label-{segment_id}"),
            segment_index: 0,
            text: text.to_owned(),
            path_element_id: format!("p-segment-{segment_id}"),
        })
    }

    fn frame(primitives: Vec<ScenePrimitive>) -> RenderFrame {
        let mut frame = RenderFrame::new(500.0, 100.0);
        for primitive in primitives {
            frame.push(primitive);
        }
        frame
    }

    #[test]
    fn identical_frame_issues_no_renderer_calls() {
        let mut reconciler = ShapeReconciler::new();
        let mut renderer = NullRenderer::default();
        let next = frame(vec![label("a", "A"), label("b", "B")]);

        let first = reconciler.reconcile(&next, &mut renderer).expect("first");
        assert_eq!(first.created, 2);
        assert!(!first.is_noop());
        assert_eq!(reconciler.live_count(), 2);

        let second = reconciler.reconcile(&next, &mut renderer).expect("second");
        assert!(second.is_noop());
        assert_eq!(second.unchanged, 2);
        assert_eq!(renderer.frames, 2);
    }

    #[test]
    fn changed_and_stale_keys_are_updated_and_removed() {
        let mut reconciler = ShapeReconciler::new();
        let mut renderer = NullRenderer::default();
        let first = frame(vec![label("a", "A"), label("b", "B")]);
        reconciler.reconcile(&first, &mut renderer).expect("first");

        let next = frame(vec![label("a", "Renamed")]);
        let report = reconciler.reconcile(&next, &mut renderer).expect("next");

        let expected = ReconcileReport {
            created: 0,
            updated: 1,
            removed: 1,
            unchanged: 0,
        };
        assert_eq!(report, expected);
        assert_eq!(reconciler.live_count(), 1);
        assert!(reconciler.contains(&ShapeKey::label("a")));
        assert!(!reconciler.contains(&ShapeKey::label("b")));
    }
}
