pub mod handle_input;
pub mod navigator;

// Re-exports
pub use handle_input::{apply_nav_input, NavOutcome};
pub use navigator::{DirectionalNavigator, NavigatorSettings};
