pub mod focus;
pub mod theme;
