mod bounds;
mod drag_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod events;
mod interaction_controller;
mod render_coordinator;
mod snapshot_controller;
mod validation;

pub use bounds::{INNER_RADIUS, OUTER_BUFFER_ZONE, OUTER_RADIUS, ResolvedBounds};
pub use engine::DragPie;
pub use engine_config::DragPieConfig;
pub use engine_snapshot::{PieSnapshot, ShapeSnapshot};
pub use events::{NoopEvents, PieEvents, PieHooks};
