use std::cmp::Ordering;

use super::types::{Category, Segment};

/// Reads and writes segment/category values and names on host data.
///
/// Every method has a default that uses the conventional `value`/`name`
/// fields, so implementors override only what differs. Setters return
/// `false` to veto a mutation; the chart then treats the adjustment as
/// rejected and skips the redraw.
pub trait PieAccessors {
    fn segment_value(&self, segment: &Segment) -> f64 {
        segment.value
    }

    fn set_segment_value(&self, segment: &mut Segment, value: f64) -> bool {
        segment.value = value;
        true
    }

    fn segment_name<'a>(&self, segment: &'a Segment) -> &'a str {
        &segment.name
    }

    fn category_value(&self, category: &Category) -> f64 {
        category.value
    }

    /// Writes a category value. The parent segment is handed over whole so
    /// implementors can validate against sibling state.
    fn set_category_value(&self, segment: &mut Segment, category_index: usize, value: f64) -> bool {
        match segment.categories.get_mut(category_index) {
            Some(category) => {
                category.value = value;
                true
            }
            None => false,
        }
    }

    fn category_name<'a>(&self, category: &'a Category) -> Option<&'a str> {
        category.name.as_deref()
    }

    /// Ordering used by the pie layout to allocate angles.
    fn compare_segments(&self, left: &Segment, right: &Segment) -> Ordering {
        self.segment_name(left).cmp(self.segment_name(right))
    }
}

/// Accessor set that uses every default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAccessors;

impl PieAccessors for DefaultAccessors {}
