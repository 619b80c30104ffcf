use kurbo::Point;

use crate::core::{Category, DefaultAccessors, PieAccessors, Segment};
use crate::render::RenderFrame;

/// Host callbacks for chart events.
///
/// Every method defaults to a no-op, so hosts implement only what they
/// observe. Pointer positions are chart pixels. Category callbacks also
/// receive the owning segment.
pub trait PieEvents {
    fn segment_drag(&mut self, _segment: &Segment, _pointer: Point) {}

    /// `selected` is the selection state after the click.
    fn segment_click(&mut self, _segment: &Segment, _pointer: Point, _selected: bool) {}

    fn segment_mouseover(&mut self, _segment: &Segment, _pointer: Point) {}

    fn segment_mouseout(&mut self, _segment: &Segment, _pointer: Point) {}

    fn category_drag(&mut self, _category: &Category, _segment: &Segment, _pointer: Point) {}

    fn category_click(
        &mut self,
        _category: &Category,
        _segment: &Segment,
        _pointer: Point,
        _selected: bool,
    ) {
    }

    fn category_mouseover(&mut self, _category: &Category, _segment: &Segment, _pointer: Point) {}

    fn category_mouseout(&mut self, _category: &Category, _segment: &Segment, _pointer: Point) {}

    /// Fires before layout is recomputed.
    fn start_redraw(&mut self, _data: &[Segment]) {}

    /// Fires after the renderer has been reconciled with `frame`.
    fn end_redraw(&mut self, _data: &[Segment], _frame: &RenderFrame) {}
}

/// Event sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvents;

impl PieEvents for NoopEvents {}

/// Pluggable behavior injected at chart creation.
pub struct PieHooks {
    pub accessors: Box<dyn PieAccessors>,
    pub events: Box<dyn PieEvents>,
}

impl Default for PieHooks {
    fn default() -> Self {
        Self {
            accessors: Box::new(DefaultAccessors),
            events: Box::new(NoopEvents),
        }
    }
}

impl PieHooks {
    #[must_use]
    pub fn with_accessors(mut self, accessors: impl PieAccessors + 'static) -> Self {
        self.accessors = Box::new(accessors);
        self
    }

    #[must_use]
    pub fn with_events(mut self, events: impl PieEvents + 'static) -> Self {
        self.events = Box::new(events);
        self
    }
}
