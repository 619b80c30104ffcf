//! Value bounds and scales resolved once at chart creation.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{LinearScale, PieAccessors, Segment, ValueBounds};
use crate::error::ChartResult;

use super::DragPieConfig;

/// Inner radius of every arc, in chart-local units.
pub const INNER_RADIUS: f64 = 0.0;
/// Outer radius of segment arcs; also the local extent of the chart.
pub const OUTER_RADIUS: f64 = 100.0;
/// Band outside the category range left as a grab handle on the segment.
pub const OUTER_BUFFER_ZONE: f64 = 10.0;

/// Share of a domain maximum used as the default minimum.
const DEFAULT_MINIMUM_RATIO: f64 = 0.05;

/// Read-only snapshot of the bounds adjustments are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedBounds {
    pub segment_minimum: f64,
    pub segment_maximum: f64,
    pub category_minimum: f64,
    pub category_maximum: f64,
}

impl ResolvedBounds {
    #[must_use]
    pub fn segment(self) -> ValueBounds {
        ValueBounds::new(self.segment_minimum, self.segment_maximum)
    }

    #[must_use]
    pub fn category(self) -> ValueBounds {
        ValueBounds::new(self.category_minimum, self.category_maximum)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ChartScales {
    /// Segment value to layout weight.
    pub(super) segment: LinearScale,
    /// Category value to radius.
    pub(super) category: LinearScale,
}

pub(super) fn resolve_bounds_and_scales(
    config: &DragPieConfig,
    data: &[Segment],
    accessors: &dyn PieAccessors,
) -> ChartResult<(ResolvedBounds, ChartScales)> {
    let max_segment_value = data
        .iter()
        .map(|segment| accessors.segment_value(segment))
        .fold(0.0_f64, f64::max);
    let segment_domain = config
        .segment_scale_maximum
        .or(config.segment_maximum)
        .unwrap_or(max_segment_value);
    let segment = LinearScale::with_derived_domain(segment_domain, OUTER_RADIUS)?;

    let max_category_value = data
        .iter()
        .flat_map(|segment| segment.categories.iter())
        .map(|category| accessors.category_value(category))
        .fold(0.0_f64, f64::max);
    let category_maximum = config.category_maximum.unwrap_or(max_category_value);

    let bounds = ResolvedBounds {
        segment_minimum: config
            .segment_minimum
            .unwrap_or(segment.domain().1 * DEFAULT_MINIMUM_RATIO),
        segment_maximum: config.segment_maximum.unwrap_or(f64::MAX),
        category_minimum: config
            .category_minimum
            .unwrap_or(category_maximum * DEFAULT_MINIMUM_RATIO),
        category_maximum,
    };
    if bounds.segment_minimum > bounds.segment_maximum
        || bounds.category_minimum > bounds.category_maximum
    {
        warn!(?bounds, "resolved bounds are empty; every adjustment will be rejected");
    }

    let category_domain = config.category_scale_maximum.unwrap_or_else(|| {
        data.iter()
            .map(|segment| {
                let largest = segment
                    .categories
                    .iter()
                    .map(|category| accessors.category_value(category))
                    .fold(bounds.category_maximum, f64::max);
                largest * segment.categories.len() as f64
            })
            .fold(0.0_f64, f64::max)
    });
    let category =
        LinearScale::with_derived_domain(category_domain, OUTER_RADIUS - OUTER_BUFFER_ZONE)?;

    Ok((bounds, ChartScales { segment, category }))
}
