//! Transient pointer state owned by one chart.
//!
//! All transitions are explicit so hover deferral, click suppression and
//! exclusive selection can be exercised without a renderer.

mod gesture;

pub use gesture::{DragGesture, GestureMove, GestureRelease};

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::render::{ShapeKey, ShapeState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

/// Latest hover seen while dragging, replayed once the drag ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeferredHover {
    /// Shape entered last, `None` when the last event left a shape.
    pub target: Option<ShapeKey>,
    /// Chart pixel position of the hover event.
    pub pointer: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverOutcome {
    /// Hover callbacks should fire now.
    Applied,
    /// Recorded for replay at drag end.
    Deferred,
    /// Nothing changed (repeated enter, or leaving a shape not hovered).
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// Click ended a drag gesture on the same shape and is dropped.
    Suppressed,
    Selected,
    Deselected,
}

impl ClickOutcome {
    #[must_use]
    pub fn is_selected(self) -> bool {
        matches!(self, Self::Selected)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    drag_target: Option<ShapeKey>,
    deferred_hover: Option<DeferredHover>,
    selected: Option<ShapeKey>,
    hovered: Option<ShapeKey>,
    suppress_click: Option<ShapeKey>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            drag_target: None,
            deferred_hover: None,
            selected: None,
            hovered: None,
            suppress_click: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.mode == InteractionMode::Dragging
    }

    #[must_use]
    pub fn drag_target(&self) -> Option<&ShapeKey> {
        self.drag_target.as_ref()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ShapeKey> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&ShapeKey> {
        self.hovered.as_ref()
    }

    #[must_use]
    pub fn deferred_hover(&self) -> Option<&DeferredHover> {
        self.deferred_hover.as_ref()
    }

    /// Marks the start of a new press; a stale suppression from an earlier
    /// drag must not swallow this gesture's click.
    pub fn on_press(&mut self) {
        self.suppress_click = None;
    }

    /// Enters `Dragging` on `target` and clears the selection.
    ///
    /// Returns the previously selected key, if any.
    pub fn begin_drag(&mut self, target: ShapeKey) -> Option<ShapeKey> {
        self.mode = InteractionMode::Dragging;
        self.drag_target = Some(target);
        self.deferred_hover = None;
        self.suppress_click = None;
        self.selected.take()
    }

    /// Returns to `Idle`. The pending deferred hover, if any, is handed back
    /// for replay. A click on the dragged shape that completes this gesture
    /// is suppressed.
    pub fn end_drag(&mut self) -> Option<DeferredHover> {
        if !self.is_dragging() {
            return None;
        }
        self.mode = InteractionMode::Idle;
        self.suppress_click = self.drag_target.take();
        self.deferred_hover.take()
    }

    /// Records the latest hover for replay. Later records replace earlier
    /// ones.
    pub fn defer_hover(&mut self, target: Option<ShapeKey>, pointer: Point) {
        self.deferred_hover = Some(DeferredHover { target, pointer });
    }

    pub fn pointer_over(&mut self, target: ShapeKey, pointer: Point) -> HoverOutcome {
        if self.is_dragging() {
            self.defer_hover(Some(target), pointer);
            return HoverOutcome::Deferred;
        }
        if self.hovered.as_ref() == Some(&target) {
            return HoverOutcome::Ignored;
        }
        self.hovered = Some(target);
        HoverOutcome::Applied
    }

    pub fn pointer_out(&mut self, target: &ShapeKey, pointer: Point) -> HoverOutcome {
        if self.is_dragging() {
            self.defer_hover(None, pointer);
            return HoverOutcome::Deferred;
        }
        if self.hovered.as_ref() != Some(target) {
            return HoverOutcome::Ignored;
        }
        self.hovered = None;
        HoverOutcome::Applied
    }

    /// Toggles exclusive selection on `target`.
    ///
    /// Only the first click after a drag can be suppressed, and only when it
    /// lands on the shape that was dragged.
    pub fn click(&mut self, target: &ShapeKey) -> ClickOutcome {
        if self.is_dragging() {
            return ClickOutcome::Suppressed;
        }
        if self.suppress_click.take().as_ref() == Some(target) {
            return ClickOutcome::Suppressed;
        }
        if self.selected.as_ref() == Some(target) {
            self.selected = None;
            ClickOutcome::Deselected
        } else {
            self.selected = Some(target.clone());
            ClickOutcome::Selected
        }
    }

    pub fn clear_selected(&mut self) -> Option<ShapeKey> {
        self.selected.take()
    }

    /// Visual flags for `key` derived from the current state.
    #[must_use]
    pub fn shape_state(&self, key: &ShapeKey) -> ShapeState {
        ShapeState {
            selected: self.selected.as_ref() == Some(key),
            dragging: self.is_dragging() && self.drag_target.as_ref() == Some(key),
            hovered: self.hovered.as_ref() == Some(key),
        }
    }

    /// Drops selection and hover references to shapes that no longer exist.
    pub fn forget_missing<F>(&mut self, mut exists: F)
    where
        F: FnMut(&ShapeKey) -> bool,
    {
        if self.selected.as_ref().is_some_and(|key| !exists(key)) {
            self.selected = None;
        }
        if self.hovered.as_ref().is_some_and(|key| !exists(key)) {
            self.hovered = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> ShapeKey {
        ShapeKey::segment("a")
    }

    fn b() -> ShapeKey {
        ShapeKey::segment("b")
    }

    #[test]
    fn selection_is_exclusive() {
        let mut state = InteractionState::default();
        assert_eq!(state.click(&a()), ClickOutcome::Selected);
        assert_eq!(state.click(&b()), ClickOutcome::Selected);
        assert_eq!(state.selected(), Some(&b()));
        assert!(!state.shape_state(&a()).selected);
        assert_eq!(state.click(&b()), ClickOutcome::Deselected);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn drag_clears_selection_and_suppresses_trailing_click() {
        let mut state = InteractionState::default();
        state.click(&a());
        assert_eq!(state.begin_drag(b()), Some(a()));
        assert!(state.shape_state(&b()).dragging);
        assert_eq!(state.end_drag(), None);
        assert_eq!(state.click(&b()), ClickOutcome::Suppressed);
        assert_eq!(state.click(&b()), ClickOutcome::Selected);
    }

    #[test]
    fn click_on_other_shape_after_drag_is_not_suppressed() {
        let mut state = InteractionState::default();
        state.begin_drag(a());
        state.end_drag();
        assert_eq!(state.click(&b()), ClickOutcome::Selected);
        assert_eq!(state.click(&a()), ClickOutcome::Selected);
        assert_eq!(state.selected(), Some(&a()));
    }

    #[test]
    fn new_press_resets_click_suppression() {
        let mut state = InteractionState::default();
        state.begin_drag(a());
        state.end_drag();
        state.on_press();
        assert_eq!(state.click(&a()), ClickOutcome::Selected);
    }

    #[test]
    fn hover_during_drag_keeps_only_latest_record() {
        let mut state = InteractionState::default();
        state.begin_drag(a());
        assert_eq!(
            state.pointer_over(b(), Point::new(1.0, 1.0)),
            HoverOutcome::Deferred
        );
        assert_eq!(
            state.pointer_out(&b(), Point::new(2.0, 2.0)),
            HoverOutcome::Deferred
        );
        assert_eq!(state.hovered(), None);

        let replay = state.end_drag().expect("deferred hover");
        assert_eq!(replay.target, None);
        assert_eq!(replay.pointer, Point::new(2.0, 2.0));
        assert_eq!(state.deferred_hover(), None);
    }

    #[test]
    fn repeated_enter_is_ignored() {
        let mut state = InteractionState::default();
        assert_eq!(state.pointer_over(a(), Point::ZERO), HoverOutcome::Applied);
        assert_eq!(state.pointer_over(a(), Point::ZERO), HoverOutcome::Ignored);
        assert_eq!(state.pointer_out(&b(), Point::ZERO), HoverOutcome::Ignored);
        assert_eq!(state.pointer_out(&a(), Point::ZERO), HoverOutcome::Applied);
    }

    #[test]
    fn forgetting_missing_keys_drops_references() {
        let mut state = InteractionState::default();
        state.click(&a());
        state.pointer_over(b(), Point::ZERO);
        state.forget_missing(|key| key == &b());
        assert_eq!(state.selected(), None);
        assert_eq!(state.hovered(), Some(&b()));
    }
}
