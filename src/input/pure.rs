pub mod method;

// Re-exports
pub use method::{next_method, platform_events};
