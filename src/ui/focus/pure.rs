pub mod input_map;
pub mod navigation;

// Re-exports
pub use input_map::{key_direction, map_action_to_nav, map_key_to_nav};
pub use navigation::{next_focus, reachable_from, unknown_targets};
