pub mod colors;

// Re-export all colors and functions
pub use colors::{
    apply_theme, card_frame, nav_frame, panel_frame, ACCENT, ACCENT_GLOW, BG_DARK, TEXT_MUTED,
    TEXT_PRIMARY,
};
