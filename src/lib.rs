//! drag-pie: a headless, draggable pie chart engine.
//!
//! Segments are pie wedges whose angular share follows their value. Each
//! segment may carry nested categories drawn as radial bands inside the
//! wedge. Both can be resized by pointer drag; every adjustment is checked
//! against configured bounds before the chart redraws.
//!
//! Rendering is delegated to a [`render::Renderer`] that receives
//! create/update/remove calls keyed by stable shape keys, so the engine runs
//! unchanged against the bundled [`render::NullRenderer`],
//! [`render::SvgRenderer`] or a host backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DragPie, DragPieConfig, PieEvents, PieHooks};
pub use core::{Category, DefaultAccessors, PieAccessors, Segment};
pub use error::{ChartError, ChartResult};
