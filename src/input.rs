pub mod operations;
pub mod pure;
pub mod types;

// Re-exports
pub use operations::InputMethodDetector;
pub use pure::platform_events;
pub use types::{InputMethod, PlatformEvent};
