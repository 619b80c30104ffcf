use std::cell::RefCell;
use std::rc::Rc;

use drag_pie::api::{DragPie, DragPieConfig, PieEvents, PieHooks};
use drag_pie::core::{Category, Point, Segment, Vec2};
use drag_pie::interaction::{ClickOutcome, InteractionMode};
use drag_pie::render::{NullRenderer, ShapeKey};

#[derive(Clone, Default)]
struct EventLog(Rc<RefCell<Vec<String>>>);

impl EventLog {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    fn push(&self, entry: String) {
        self.0.borrow_mut().push(entry);
    }
}

impl PieEvents for EventLog {
    fn segment_drag(&mut self, segment: &Segment, _pointer: Point) {
        self.push(format!("drag:{}", segment.id));
    }

    fn segment_click(&mut self, segment: &Segment, _pointer: Point, selected: bool) {
        self.push(format!("click:{}:{selected}", segment.id));
    }

    fn segment_mouseover(&mut self, segment: &Segment, _pointer: Point) {
        self.push(format!("over:{}", segment.id));
    }

    fn segment_mouseout(&mut self, segment: &Segment, _pointer: Point) {
        self.push(format!("out:{}", segment.id));
    }

    fn category_click(
        &mut self,
        category: &Category,
        segment: &Segment,
        _pointer: Point,
        selected: bool,
    ) {
        self.push(format!("click:{}/{}:{selected}", segment.id, category.id));
    }

    fn category_mouseover(&mut self, category: &Category, segment: &Segment, _pointer: Point) {
        self.push(format!("over:{}/{}", segment.id, category.id));
    }

    fn category_mouseout(&mut self, category: &Category, segment: &Segment, _pointer: Point) {
        self.push(format!("out:{}/{}", segment.id, category.id));
    }
}

/// Two half-pie segments: `a` covers the right half, `b` the left half.
/// With the default 500px size one local unit is 2.5px around (250, 250).
fn chart(data: Vec<Segment>) -> (DragPie<NullRenderer>, EventLog) {
    let log = EventLog::default();
    let chart = DragPie::with_hooks(
        NullRenderer::default(),
        data,
        DragPieConfig::default().with_segment_bounds(5.0, 100.0),
        PieHooks::default().with_events(log.clone()),
    )
    .expect("chart init");
    (chart, log)
}

fn halves() -> Vec<Segment> {
    vec![Segment::new("a", "A", 50.0), Segment::new("b", "B", 50.0)]
}

fn local(x: f64, y: f64) -> Point {
    Point::new(250.0 + x * 2.5, 250.0 + y * 2.5)
}

#[test]
fn selection_is_exclusive() {
    let (mut chart, log) = chart(halves());
    let a = ShapeKey::segment("a");
    let b = ShapeKey::segment("b");

    assert_eq!(
        chart.click(&a, Point::ZERO).expect("click a"),
        Some(ClickOutcome::Selected)
    );
    assert_eq!(
        chart.click(&b, Point::ZERO).expect("click b"),
        Some(ClickOutcome::Selected)
    );

    assert_eq!(chart.selected(), Some(&b));
    let frame = chart.last_frame();
    assert!(!frame.arc(&a).expect("a").state.selected);
    assert!(frame.arc(&b).expect("b").state.selected);
    assert_eq!(log.take(), vec!["click:a:true", "click:b:true"]);

    assert_eq!(
        chart.click(&b, Point::ZERO).expect("click b again"),
        Some(ClickOutcome::Deselected)
    );
    assert_eq!(chart.selected(), None);
    assert_eq!(log.take(), vec!["click:b:false"]);
}

#[test]
fn clear_selected_restyles_without_redraw_events() {
    let (mut chart, _) = chart(halves());
    let a = ShapeKey::segment("a");
    chart.click(&a, Point::ZERO).expect("click");
    let updated = chart.chart_element().updated;

    assert_eq!(chart.clear_selected().expect("clear"), Some(a.clone()));
    assert_eq!(chart.chart_element().updated, updated + 1);
    assert!(!chart.last_frame().arc(&a).expect("a").state.selected);
    assert_eq!(chart.clear_selected().expect("clear again"), None);
}

#[test]
fn drag_start_clears_selection_and_flags_the_target() {
    let (mut chart, _) = chart(halves());
    let a = ShapeKey::segment("a");
    let b = ShapeKey::segment("b");
    chart.click(&a, Point::ZERO).expect("click");

    assert!(chart.drag_start(&b).expect("drag start"));
    assert_eq!(chart.interaction_mode(), InteractionMode::Dragging);
    assert_eq!(chart.selected(), None);
    assert!(chart.last_frame().arc(&b).expect("b").state.dragging);

    chart.drag_end(Point::ZERO).expect("drag end");
    assert_eq!(chart.interaction_mode(), InteractionMode::Idle);
    assert!(!chart.last_frame().arc(&b).expect("b").state.dragging);
}

#[test]
fn hover_during_drag_is_deferred_and_replayed_once() {
    let (mut chart, log) = chart(halves());
    let a = ShapeKey::segment("a");
    let b = ShapeKey::segment("b");

    chart.drag_start(&a).expect("drag start");
    chart.mouse_over(&b, local(-50.0, 0.0)).expect("over b");
    chart.mouse_out(&b, local(-50.0, 0.0)).expect("out b");
    chart.mouse_over(&b, local(-50.0, 0.0)).expect("over b");
    assert!(log.take().is_empty());
    assert_eq!(chart.hovered(), None);

    chart.drag_end(local(-50.0, 0.0)).expect("drag end");
    assert_eq!(log.take(), vec!["over:b"]);
    assert_eq!(chart.hovered(), Some(&b));

    chart.drag_end(local(50.0, 0.0)).expect("second end");
    assert!(log.take().is_empty());
}

#[test]
fn hover_outside_a_drag_fires_immediately() {
    let (mut chart, log) = chart(halves());
    let a = ShapeKey::segment("a");

    chart.mouse_over(&a, Point::ZERO).expect("over");
    chart.mouse_over(&a, Point::ZERO).expect("repeat over");
    assert!(chart.last_frame().arc(&a).expect("a").state.hovered);
    chart.mouse_out(&a, Point::ZERO).expect("out");

    assert_eq!(log.take(), vec!["over:a", "out:a"]);
}

#[test]
fn pointer_drag_suppresses_the_trailing_click() {
    let (mut chart, log) = chart(halves());
    let a = ShapeKey::segment("a");

    assert_eq!(
        chart.pointer_down(local(50.0, 0.0)).expect("down"),
        Some(a.clone())
    );
    // 25px to the right is 10 local units.
    assert!(chart.pointer_move(local(60.0, 0.0)).expect("move"));
    assert_eq!(chart.data()[0].value, 60.0);
    assert_eq!(chart.interaction_mode(), InteractionMode::Dragging);

    let click = chart.pointer_up(local(60.0, 0.0)).expect("up");
    assert_eq!(click, Some(ClickOutcome::Suppressed));
    assert_eq!(chart.selected(), None);
    assert_eq!(chart.interaction_mode(), InteractionMode::Idle);

    let entries = log.take();
    assert!(entries.contains(&"drag:a".to_owned()));
    assert!(!entries.iter().any(|entry| entry.starts_with("click")));

    chart.pointer_down(local(50.0, 10.0)).expect("down");
    let click = chart.pointer_up(local(50.0, 10.0)).expect("up");
    assert_eq!(click, Some(ClickOutcome::Selected));
    assert_eq!(chart.selected(), Some(&a));
}

#[test]
fn click_on_another_shape_after_a_drag_still_selects() {
    let (mut chart, log) = chart(halves());
    let a = ShapeKey::segment("a");
    let b = ShapeKey::segment("b");

    chart.drag_start(&a).expect("drag start");
    chart.drag_end(Point::ZERO).expect("drag end");

    assert_eq!(
        chart.click(&b, Point::ZERO).expect("click b"),
        Some(ClickOutcome::Selected)
    );
    assert_eq!(chart.selected(), Some(&b));
    assert_eq!(log.take(), vec!["click:b:true"]);

    assert_eq!(
        chart.click(&a, Point::ZERO).expect("click a"),
        Some(ClickOutcome::Selected)
    );
    assert_eq!(chart.selected(), Some(&a));
}

#[test]
fn pointer_release_off_the_dragged_shape_leaves_later_clicks_intact() {
    let (mut chart, _) = chart(halves());
    let b = ShapeKey::segment("b");

    chart.pointer_down(local(50.0, 0.0)).expect("down");
    assert!(chart.pointer_move(local(60.0, 0.0)).expect("move"));
    assert_eq!(chart.pointer_up(local(-50.0, 0.0)).expect("up"), None);

    assert_eq!(
        chart.click(&b, Point::ZERO).expect("click b"),
        Some(ClickOutcome::Selected)
    );
}

#[test]
fn pointer_hover_tracks_the_topmost_shape() {
    let data = vec![
        Segment::new("a", "A", 50.0).with_category(Category::new("x", 10.0)),
        Segment::new("b", "B", 50.0),
    ];
    let (mut chart, log) = chart(data);

    // Category band reaches radius 90; the segment rim stays reachable.
    chart.pointer_move(local(40.0, 0.0)).expect("move");
    chart.pointer_move(local(95.0, 0.0)).expect("move");
    chart.pointer_move(local(-40.0, 0.0)).expect("move");
    chart.pointer_leave(local(-200.0, 0.0)).expect("leave");

    assert_eq!(
        log.take(),
        vec!["over:a/x", "out:a/x", "over:a", "out:a", "over:b", "out:b"]
    );
}

#[test]
fn category_click_reports_the_parent_segment() {
    let data = vec![
        Segment::new("a", "A", 50.0).with_category(Category::new("x", 10.0)),
        Segment::new("b", "B", 50.0),
    ];
    let (mut chart, log) = chart(data);

    chart.pointer_down(local(40.0, 0.0)).expect("down");
    chart.pointer_up(local(40.0, 0.0)).expect("up");

    assert_eq!(log.take(), vec!["click:a/x:true"]);
    assert_eq!(chart.selected(), Some(&ShapeKey::category("a", 0)));
}

#[test]
fn non_draggable_press_and_move_still_clicks() {
    let log = EventLog::default();
    let mut chart = DragPie::with_hooks(
        NullRenderer::default(),
        halves(),
        DragPieConfig::default().with_segments_draggable(false),
        PieHooks::default().with_events(log.clone()),
    )
    .expect("chart init");

    chart.pointer_down(local(50.0, 0.0)).expect("down");
    assert!(!chart.pointer_move(local(55.0, 0.0)).expect("move"));
    assert_eq!(chart.interaction_mode(), InteractionMode::Idle);
    let click = chart.pointer_up(local(55.0, 0.0)).expect("up");

    assert_eq!(click, Some(ClickOutcome::Selected));
    assert_eq!(chart.data()[0].value, 50.0);
}

#[test]
fn low_level_drag_moves_keep_working_across_redraws() {
    let (mut chart, log) = chart(halves());
    let a = ShapeKey::segment("a");
    chart.drag_start(&a).expect("drag start");

    let step = Vec2::new(5.0, 0.0);
    for _ in 0..3 {
        assert!(chart.drag_move(step, Point::ZERO).expect("move"));
    }
    chart.drag_end(Point::ZERO).expect("drag end");

    assert_eq!(chart.data()[0].value, 65.0);
    assert_eq!(log.take(), vec!["drag:a", "drag:a", "drag:a"]);
}
