//! Angular layout for pie segments.
//!
//! Angles are radians measured clockwise from 12 o'clock and cover one full
//! turn. Segments are allocated in comparator order but reported in data
//! order, so callers can pair each arc with its segment by position.

use std::cmp::Ordering;
use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// Angular span of one segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentArc {
    /// Position of the segment in the input sequence.
    pub data_index: usize,
    /// Position of the segment in allocation order.
    pub sort_index: usize,
    /// Value the angle was allocated from (already scaled).
    pub layout_value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl SegmentArc {
    #[must_use]
    pub fn sweep(self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Pie layout over `[start_angle, end_angle]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieLayout {
    start_angle: f64,
    end_angle: f64,
}

impl Default for PieLayout {
    fn default() -> Self {
        Self {
            start_angle: 0.0,
            end_angle: TAU,
        }
    }
}

impl PieLayout {
    #[must_use]
    pub fn new(start_angle: f64, end_angle: f64) -> Self {
        Self {
            start_angle,
            end_angle,
        }
    }

    /// Computes one arc per value.
    ///
    /// Non-positive and non-finite values receive a zero-width arc. Ties in
    /// `compare` keep input order.
    pub fn arcs<F>(self, values: &[f64], mut compare: F) -> Vec<SegmentArc>
    where
        F: FnMut(usize, usize) -> Ordering,
    {
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&left, &right| compare(left, right));

        let sum: f64 = values
            .iter()
            .copied()
            .filter(|value| value.is_finite() && *value > 0.0)
            .sum();
        let span = self.end_angle - self.start_angle;
        let k = if sum > 0.0 { span / sum } else { 0.0 };

        let mut arcs = vec![
            SegmentArc {
                data_index: 0,
                sort_index: 0,
                layout_value: 0.0,
                start_angle: self.start_angle,
                end_angle: self.start_angle,
            };
            values.len()
        ];

        let mut angle = self.start_angle;
        for (sort_index, &data_index) in order.iter().enumerate() {
            let value = values[data_index];
            let width = if value.is_finite() && value > 0.0 {
                value * k
            } else {
                0.0
            };
            arcs[data_index] = SegmentArc {
                data_index,
                sort_index,
                layout_value: value,
                start_angle: angle,
                end_angle: angle + width,
            };
            angle += width;
        }

        arcs
    }
}
