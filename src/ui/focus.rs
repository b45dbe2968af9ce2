pub mod operations;
pub mod pipelines;
pub mod pure;
pub mod types;

// Re-exports
pub use operations::{FocusController, Focusable, FocusableResponse, FocusRingStyle};
pub use pipelines::{DirectionalNavigator, NavOutcome, NavigatorSettings};
pub use types::{FocusKey, NavDirection, NavigationEdges, ViewGraph};
