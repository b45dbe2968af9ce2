pub mod controller;
pub mod focusable;
pub mod highlight;

// Re-exports
pub use controller::FocusController;
pub use focusable::{Focusable, FocusableResponse};
pub use highlight::{draw_focus_ring, FocusRingStyle};
