pub mod operations;
pub mod pipelines;
pub mod pure;
pub mod types;

// Re-exports
pub use pipelines::{GamepadPoller, PollOutput};
pub use types::{ActionEvent, ControllerId, GamepadAction, LayoutKind};
