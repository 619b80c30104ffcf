pub mod accessors;
pub mod adjustment;
pub mod arc;
pub mod pie_layout;
pub mod scale;
pub mod types;

pub use accessors::{DefaultAccessors, PieAccessors};
pub use adjustment::{
    AdjustmentOutcome, RejectReason, ValueBounds, adjust_category, adjust_segment, stepped_delta,
};
pub use arc::ArcGenerator;
pub use kurbo::{Point, Vec2};
pub use pie_layout::{PieLayout, SegmentArc};
pub use scale::LinearScale;
pub use types::{Category, Segment};
