//! Bounds-checked value adjustment for drag gestures.
//!
//! Adjustments only touch values through [`PieAccessors`]; geometry is
//! recomputed by the next draw. A rejected adjustment leaves the data
//! untouched.

use serde::{Deserialize, Serialize};

use super::accessors::PieAccessors;
use super::types::Segment;

/// Inclusive value range an adjustment must land in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueBounds {
    pub minimum: f64,
    pub maximum: f64,
}

impl ValueBounds {
    #[must_use]
    pub const fn new(minimum: f64, maximum: f64) -> Self {
        Self { minimum, maximum }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.minimum && value <= self.maximum
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    ZeroDelta,
    OutOfBounds,
    Vetoed,
    MissingCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AdjustmentOutcome {
    Applied { previous: f64, value: f64 },
    Rejected(RejectReason),
}

impl AdjustmentOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Delta actually applied for a raw pointer delta.
#[must_use]
pub fn stepped_delta(delta: f64, integer_value_stepping: bool) -> f64 {
    if integer_value_stepping {
        delta.floor()
    } else {
        delta
    }
}

/// Moves a segment value by `delta` (positive grows the segment).
pub fn adjust_segment(
    accessors: &dyn PieAccessors,
    segment: &mut Segment,
    delta: f64,
    bounds: ValueBounds,
    integer_value_stepping: bool,
) -> AdjustmentOutcome {
    let step = stepped_delta(delta, integer_value_stepping);
    if step == 0.0 || !step.is_finite() {
        return AdjustmentOutcome::Rejected(RejectReason::ZeroDelta);
    }

    let previous = accessors.segment_value(segment);
    let value = previous + step;
    if !bounds.contains(value) {
        return AdjustmentOutcome::Rejected(RejectReason::OutOfBounds);
    }
    if !accessors.set_segment_value(segment, value) {
        return AdjustmentOutcome::Rejected(RejectReason::Vetoed);
    }

    AdjustmentOutcome::Applied { previous, value }
}

/// Moves a category value by `-delta`.
///
/// Vertical pointer deltas grow downward on screen, so an upward drag
/// (negative delta) grows the category.
pub fn adjust_category(
    accessors: &dyn PieAccessors,
    segment: &mut Segment,
    category_index: usize,
    delta: f64,
    bounds: ValueBounds,
    integer_value_stepping: bool,
) -> AdjustmentOutcome {
    let step = stepped_delta(delta, integer_value_stepping);
    if step == 0.0 || !step.is_finite() {
        return AdjustmentOutcome::Rejected(RejectReason::ZeroDelta);
    }

    let Some(category) = segment.categories.get(category_index) else {
        return AdjustmentOutcome::Rejected(RejectReason::MissingCategory);
    };
    let previous = accessors.category_value(category);
    let value = previous - step;
    if !bounds.contains(value) {
        return AdjustmentOutcome::Rejected(RejectReason::OutOfBounds);
    }
    if !accessors.set_category_value(segment, category_index, value) {
        return AdjustmentOutcome::Rejected(RejectReason::Vetoed);
    }

    AdjustmentOutcome::Applied { previous, value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, DefaultAccessors};

    #[test]
    fn integer_stepping_floors_the_delta() {
        assert_eq!(stepped_delta(3.7, true), 3.0);
        assert_eq!(stepped_delta(-0.5, true), -1.0);
        assert_eq!(stepped_delta(3.7, false), 3.7);
    }

    #[test]
    fn fractional_delta_below_one_is_zero_with_stepping() {
        let mut segment = Segment::new("a", "A", 40.0);
        let outcome = adjust_segment(
            &DefaultAccessors,
            &mut segment,
            0.4,
            ValueBounds::new(5.0, 100.0),
            true,
        );
        assert_eq!(
            outcome,
            AdjustmentOutcome::Rejected(RejectReason::ZeroDelta)
        );
        assert_eq!(segment.value, 40.0);
    }

    #[test]
    fn missing_category_is_rejected() {
        let mut segment = Segment::new("a", "A", 40.0).with_category(Category::new("c", 10.0));
        let outcome = adjust_category(
            &DefaultAccessors,
            &mut segment,
            4,
            1.0,
            ValueBounds::new(0.0, 100.0),
            false,
        );
        assert_eq!(
            outcome,
            AdjustmentOutcome::Rejected(RejectReason::MissingCategory)
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = ValueBounds::new(5.0, 60.0);
        assert!(bounds.contains(5.0));
        assert!(bounds.contains(60.0));
        assert!(!bounds.contains(60.000_1));
        assert!(!bounds.contains(f64::NAN));
    }
}
