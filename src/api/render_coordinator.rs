use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{ArcGenerator, PieLayout, SegmentArc};
use crate::error::ChartResult;
use crate::render::{
    ArcPrimitive, ArcRole, LabelPrimitive, RenderFrame, Renderer, ScenePrimitive, ShapeKey,
    ShapeState,
};

use super::DragPie;
use super::bounds::{INNER_RADIUS, OUTER_RADIUS};
use super::validation::validate_segment_ids;

/// Per-pass pairing of a category with its owning segment.
#[derive(Debug, Clone, Copy)]
struct CategoryArc {
    segment_index: usize,
    category_index: usize,
    value: f64,
    outer_radius: f64,
}

impl<R: Renderer> DragPie<R> {
    /// Full draw pass: layout, frame validation, reconciliation.
    pub(super) fn draw(&mut self) -> ChartResult<()> {
        self.events.start_redraw(&self.data);

        let frame = self.build_frame()?;
        frame.validate()?;
        let report = self.reconciler.reconcile(&frame, &mut self.renderer)?;
        self.last_frame = frame;

        debug!(
            segments = self.data.len(),
            primitives = self.last_frame.primitives.len(),
            created = report.created,
            updated = report.updated,
            removed = report.removed,
            "drew drag pie"
        );
        self.events.end_redraw(&self.data, &self.last_frame);
        Ok(())
    }

    /// Reapplies interaction flags to the last frame without re-running
    /// layout or redraw events.
    pub(super) fn restyle(&mut self) -> ChartResult<()> {
        let mut frame = self.last_frame.clone();
        self.apply_shape_states(&mut frame);
        if frame == self.last_frame {
            return Ok(());
        }
        let report = self.reconciler.reconcile(&frame, &mut self.renderer)?;
        trace!(updated = report.updated, "restyled drag pie");
        self.last_frame = frame;
        Ok(())
    }

    fn build_frame(&mut self) -> ChartResult<RenderFrame> {
        validate_segment_ids(&self.data)?;

        let scale = self.scales.segment;
        let weights: Vec<f64> = self
            .data
            .iter()
            .map(|segment| scale.map(self.accessors.segment_value(segment)))
            .collect();
        let arcs = PieLayout::default().arcs(&weights, |left, right| {
            self.accessors
                .compare_segments(&self.data[left], &self.data[right])
        });

        let mut frame = RenderFrame::new(self.config.size, OUTER_RADIUS);
        for arc in &arcs {
            let segment = &self.data[arc.data_index];
            frame.push(ScenePrimitive::Arc(ArcPrimitive {
                key: ShapeKey::segment(&segment.id),
                role: ArcRole::Segment,
                element_id: self.segment_element_id(&segment.id),
                segment_index: arc.data_index,
                path: self.segment_arc.path(arc.start_angle, arc.end_angle),
                fill: None,
                state: ShapeState::default(),
            }));
        }

        for arc in &arcs {
            self.push_category_arcs(&mut frame, arc);
        }

        if self.config.show_segment_labels {
            for (index, segment) in self.data.iter().enumerate() {
                let text = self.accessors.segment_name(segment);
                if text.is_empty() {
                    continue;
                }
                frame.push(ScenePrimitive::Label(LabelPrimitive {
                    key: ShapeKey::label(&segment.id),
                    element_id: format!("{}-label-{}", self.id_prefix, segment.id),
                    segment_index: index,
                    text: text.to_owned(),
                    path_element_id: self.segment_element_id(&segment.id),
                }));
            }
        }

        self.interaction
            .forget_missing(|key| frame.arc(key).is_some());
        self.apply_shape_states(&mut frame);
        Ok(frame)
    }

    /// Category bands of one segment in draw order.
    fn push_category_arcs(&mut self, frame: &mut RenderFrame, arc: &SegmentArc) {
        let segment = &self.data[arc.data_index];
        let mut working: SmallVec<[CategoryArc; 8]> = SmallVec::new();
        let mut running_total = 0.0;
        for (category_index, category) in segment.categories.iter().enumerate() {
            let value = self.accessors.category_value(category);
            let extent = if self.config.category_stacking {
                running_total += value;
                running_total
            } else {
                value
            };
            working.push(CategoryArc {
                segment_index: arc.data_index,
                category_index,
                value,
                outer_radius: (INNER_RADIUS + self.scales.category.map(extent)).max(INNER_RADIUS),
            });
        }

        // Largest first so smaller bands stay visible on top.
        if self.config.category_stacking {
            working.sort_by_key(|entry| Reverse(entry.category_index));
        } else {
            working.sort_by_key(|entry| Reverse(OrderedFloat(entry.value)));
        }

        for entry in working {
            let category = &segment.categories[entry.category_index];
            let fill = self.colors.color_for(&category.id);
            let path = ArcGenerator::new(INNER_RADIUS, entry.outer_radius)
                .with_tolerance(self.config.arc_tolerance)
                .path(arc.start_angle, arc.end_angle);
            frame.push(ScenePrimitive::Arc(ArcPrimitive {
                key: ShapeKey::category(&segment.id, entry.category_index),
                role: ArcRole::Category,
                element_id: format!(
                    "{}-category-{}",
                    self.segment_element_id(&segment.id),
                    entry.category_index
                ),
                segment_index: entry.segment_index,
                path,
                fill: Some(fill),
                state: ShapeState::default(),
            }));
        }
    }

    fn apply_shape_states(&self, frame: &mut RenderFrame) {
        for arc in frame.arcs_mut() {
            arc.state = self.interaction.shape_state(&arc.key);
        }
    }

    fn segment_element_id(&self, segment_id: &str) -> String {
        format!("{}-segment-{segment_id}", self.id_prefix)
    }
}
