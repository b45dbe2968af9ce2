pub mod classify;
pub mod deadzone;
pub mod edges;
pub mod layouts;
pub mod snapshot;

// Re-exports
pub use classify::{is_device_enabled, is_gamepad, normalize_axis};
pub use edges::{ActionEdges, RepeatTiming};
pub use layouts::{ControllerLayout, layout_for};
pub use snapshot::{raw_snapshot, standard_snapshot};
