use kurbo::{Point, Vec2};
use tracing::{debug, trace};

use crate::core::{AdjustmentOutcome, adjust_category, adjust_segment};
use crate::error::ChartResult;
use crate::render::{Renderer, ShapeKey};

use super::DragPie;
use super::interaction_controller::segment_index;

impl<R: Renderer> DragPie<R> {
    /// Starts dragging `target`.
    ///
    /// Returns `false` when a drag is already active, the shape kind is not
    /// draggable, or the target no longer exists.
    pub fn drag_start(&mut self, target: &ShapeKey) -> ChartResult<bool> {
        if self.interaction.is_dragging() {
            return Ok(false);
        }
        let draggable = match target {
            ShapeKey::Segment { .. } => self.config.segments_draggable,
            ShapeKey::Category { .. } => self.config.categories_draggable,
            ShapeKey::Label { .. } => false,
        };
        if !draggable || !self.target_exists(target) {
            trace!(?target, "drag start ignored");
            return Ok(false);
        }

        let cleared = self.interaction.begin_drag(target.clone());
        debug!(?target, ?cleared, "drag started");
        self.restyle()?;
        Ok(true)
    }

    /// Applies one drag tick.
    ///
    /// `delta` is in chart-local units (the pie radius is 100); `pointer` is
    /// the chart pixel position reported to callbacks. Returns `true` when a
    /// value changed and the chart redrew.
    pub fn drag_move(&mut self, delta: Vec2, pointer: Point) -> ChartResult<bool> {
        let Some(target) = self.interaction.drag_target().cloned() else {
            return Ok(false);
        };
        let Some(index) = segment_index(&self.data, target.segment_id()) else {
            return Ok(false);
        };

        let stepping = self.config.integer_value_stepping;
        let applied = match target.category_index() {
            None => {
                let outcome = adjust_segment(
                    self.accessors.as_ref(),
                    &mut self.data[index],
                    delta.x,
                    self.bounds.segment(),
                    stepping,
                );
                log_outcome(&target, outcome);
                if outcome.is_applied() {
                    self.events.segment_drag(&self.data[index], pointer);
                }
                outcome.is_applied()
            }
            Some(category_index) => {
                if category_index >= self.data[index].categories.len() {
                    return Ok(false);
                }
                // The category is only tried when the segment rejects.
                let together = self.config.drag_segment_and_category_together && {
                    let outcome = adjust_segment(
                        self.accessors.as_ref(),
                        &mut self.data[index],
                        delta.x / 2.0,
                        self.bounds.segment(),
                        stepping,
                    );
                    log_outcome(&ShapeKey::segment(target.segment_id()), outcome);
                    outcome.is_applied()
                };
                let applied = together || {
                    let outcome = adjust_category(
                        self.accessors.as_ref(),
                        &mut self.data[index],
                        category_index,
                        delta.y,
                        self.bounds.category(),
                        stepping,
                    );
                    log_outcome(&target, outcome);
                    outcome.is_applied()
                };
                if applied {
                    let segment = &self.data[index];
                    self.events
                        .category_drag(&segment.categories[category_index], segment, pointer);
                }
                applied
            }
        };

        if applied {
            self.draw()?;
        }
        Ok(applied)
    }

    /// Ends the active drag and replays a hover deferred during it against
    /// the shape under `pointer`.
    pub fn drag_end(&mut self, pointer: Point) -> ChartResult<()> {
        if !self.interaction.is_dragging() {
            return Ok(());
        }
        let deferred = self.interaction.end_drag();
        debug!(replay = deferred.is_some(), "drag ended");
        if deferred.is_some() {
            self.apply_hover_at(pointer)?;
        }
        self.restyle()
    }

    fn target_exists(&self, target: &ShapeKey) -> bool {
        let Some(index) = segment_index(&self.data, target.segment_id()) else {
            return false;
        };
        match target.category_index() {
            Some(category_index) => category_index < self.data[index].categories.len(),
            None => true,
        }
    }
}

fn log_outcome(target: &ShapeKey, outcome: AdjustmentOutcome) {
    match outcome {
        AdjustmentOutcome::Applied { previous, value } => {
            trace!(?target, previous, value, "adjustment applied");
        }
        AdjustmentOutcome::Rejected(reason) => {
            trace!(?target, ?reason, "adjustment rejected");
        }
    }
}
