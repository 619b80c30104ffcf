use kurbo::Point;
use tracing::trace;

use crate::core::Segment;
use crate::error::ChartResult;
use crate::interaction::{ClickOutcome, HoverOutcome};
use crate::render::{Renderer, ShapeKey};

use super::DragPie;

impl<R: Renderer> DragPie<R> {
    /// Pointer entered `target`. Deferred while dragging.
    pub fn mouse_over(&mut self, target: &ShapeKey, pointer: Point) -> ChartResult<()> {
        if !self.is_interactive(target) {
            return Ok(());
        }
        if self.interaction.pointer_over(target.clone(), pointer) == HoverOutcome::Applied {
            self.dispatch_hover(target, pointer, true);
            self.restyle()?;
        }
        Ok(())
    }

    /// Pointer left `target`. Deferred while dragging.
    pub fn mouse_out(&mut self, target: &ShapeKey, pointer: Point) -> ChartResult<()> {
        if self.interaction.pointer_out(target, pointer) == HoverOutcome::Applied {
            self.dispatch_hover(target, pointer, false);
            self.restyle()?;
        }
        Ok(())
    }

    /// Toggles exclusive selection on `target`.
    ///
    /// Returns `None` for unknown or non-interactive targets. A click on the
    /// dragged shape that completes a drag is reported as
    /// [`ClickOutcome::Suppressed`] and fires no callback.
    pub fn click(
        &mut self,
        target: &ShapeKey,
        pointer: Point,
    ) -> ChartResult<Option<ClickOutcome>> {
        if !self.is_interactive(target) {
            return Ok(None);
        }
        let outcome = self.interaction.click(target);
        if outcome == ClickOutcome::Suppressed {
            trace!(?target, "click suppressed after drag");
            return Ok(Some(outcome));
        }

        let selected = outcome.is_selected();
        if let Some((segment, category_index)) = resolve(&self.data, target) {
            match category_index {
                Some(index) => self.events.category_click(
                    &segment.categories[index],
                    segment,
                    pointer,
                    selected,
                ),
                None => self.events.segment_click(segment, pointer, selected),
            }
        }
        self.restyle()?;
        Ok(Some(outcome))
    }

    /// Press at a chart pixel position. Returns the shape hit, if any.
    pub fn pointer_down(&mut self, pointer: Point) -> ChartResult<Option<ShapeKey>> {
        self.interaction.on_press();
        let hit = self.last_frame.hit_test(pointer).cloned();
        match &hit {
            Some(target) => self.gesture.press(target.clone(), pointer),
            None => self.gesture.cancel(),
        }
        Ok(hit)
    }

    /// Pointer motion in chart pixels: drives an active drag and hover
    /// tracking. Returns `true` when a drag tick changed a value.
    pub fn pointer_move(&mut self, pointer: Point) -> ChartResult<bool> {
        let mut changed = false;
        if let Some(step) = self.gesture.update(pointer) {
            if step.started {
                self.drag_start(&step.target)?;
            }
            if self.interaction.is_dragging() {
                let local_delta = step.delta / self.last_frame.local_scale();
                changed = self.drag_move(local_delta, pointer)?;
            }
        }
        self.track_hover(pointer)?;
        Ok(changed)
    }

    /// Release in chart pixels: ends a drag and clicks the shape when the
    /// press and release hit the same one.
    pub fn pointer_up(&mut self, pointer: Point) -> ChartResult<Option<ClickOutcome>> {
        let release = self.gesture.release(pointer);
        self.drag_end(pointer)?;

        let Some(release) = release else {
            return Ok(None);
        };
        let hit = self.last_frame.hit_test(pointer).cloned();
        if hit.as_ref() != Some(&release.target) {
            return Ok(None);
        }
        self.click(&release.target, pointer)
    }

    /// Pointer left the chart area.
    pub fn pointer_leave(&mut self, pointer: Point) -> ChartResult<()> {
        if self.interaction.is_dragging() {
            self.interaction.defer_hover(None, pointer);
            return Ok(());
        }
        if let Some(hovered) = self.interaction.hovered().cloned() {
            self.mouse_out(&hovered, pointer)?;
        }
        Ok(())
    }

    fn track_hover(&mut self, pointer: Point) -> ChartResult<()> {
        if self.interaction.is_dragging() {
            let hit = self.last_frame.hit_test(pointer).cloned();
            self.interaction.defer_hover(hit, pointer);
            return Ok(());
        }
        self.apply_hover_at(pointer)
    }

    /// Moves hover to whatever shape is under `pointer`, firing out/over.
    pub(super) fn apply_hover_at(&mut self, pointer: Point) -> ChartResult<()> {
        let hit = self.last_frame.hit_test(pointer).cloned();
        let current = self.interaction.hovered().cloned();
        if hit == current {
            return Ok(());
        }
        if let Some(previous) = current {
            self.mouse_out(&previous, pointer)?;
        }
        if let Some(next) = hit {
            self.mouse_over(&next, pointer)?;
        }
        Ok(())
    }

    fn dispatch_hover(&mut self, target: &ShapeKey, pointer: Point, entered: bool) {
        let Some((segment, category_index)) = resolve(&self.data, target) else {
            return;
        };
        match (category_index, entered) {
            (None, true) => self.events.segment_mouseover(segment, pointer),
            (None, false) => self.events.segment_mouseout(segment, pointer),
            (Some(index), true) => {
                self.events
                    .category_mouseover(&segment.categories[index], segment, pointer);
            }
            (Some(index), false) => {
                self.events
                    .category_mouseout(&segment.categories[index], segment, pointer);
            }
        }
    }

    fn is_interactive(&self, target: &ShapeKey) -> bool {
        !matches!(target, ShapeKey::Label { .. }) && resolve(&self.data, target).is_some()
    }
}

pub(super) fn segment_index(data: &[Segment], segment_id: &str) -> Option<usize> {
    data.iter().position(|segment| segment.id == segment_id)
}

/// Segment owning `target` plus the category index for category shapes.
fn resolve<'a>(data: &'a [Segment], target: &ShapeKey) -> Option<(&'a Segment, Option<usize>)> {
    let segment = &data[segment_index(data, target.segment_id())?];
    match target.category_index() {
        Some(index) if index < segment.categories.len() => Some((segment, Some(index))),
        Some(_) => None,
        None => Some((segment, None)),
    }
}
