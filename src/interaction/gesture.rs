use kurbo::{Point, Vec2};

use crate::render::ShapeKey;

/// One pointer move reported by [`DragGesture::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct GestureMove {
    /// Shape the gesture was pressed on.
    pub target: ShapeKey,
    /// `true` for the first movement after the press.
    pub started: bool,
    pub delta: Vec2,
    pub pointer: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureRelease {
    pub target: ShapeKey,
    /// `true` when the pointer moved between press and release.
    pub moved: bool,
    pub pointer: Point,
}

/// Press/move/release tracker turning pointer positions into drag deltas.
///
/// A drag only starts on the first non-zero movement, so a plain press and
/// release stays a click.
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    target: Option<ShapeKey>,
    last_pos: Option<Point>,
    moved: bool,
}

impl DragGesture {
    pub fn press(&mut self, target: ShapeKey, pointer: Point) {
        self.target = Some(target);
        self.last_pos = Some(pointer);
        self.moved = false;
    }

    /// Movement since the last update, `None` without an active press or
    /// when the pointer did not move.
    pub fn update(&mut self, pointer: Point) -> Option<GestureMove> {
        let target = self.target.clone()?;
        let last = self.last_pos.replace(pointer)?;
        let delta = pointer - last;
        if delta == Vec2::ZERO {
            return None;
        }

        let started = !self.moved;
        self.moved = true;
        Some(GestureMove {
            target,
            started,
            delta,
            pointer,
        })
    }

    pub fn release(&mut self, pointer: Point) -> Option<GestureRelease> {
        let target = self.target.take()?;
        let moved = std::mem::take(&mut self.moved);
        self.last_pos = None;
        Some(GestureRelease {
            target,
            moved,
            pointer,
        })
    }

    /// Abandons the gesture without a release.
    pub fn cancel(&mut self) {
        self.target = None;
        self.last_pos = None;
        self.moved = false;
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.target.is_some()
    }

    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }
}
