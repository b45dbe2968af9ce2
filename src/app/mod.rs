mod app;
mod app_input;
mod app_pages;
mod app_panels;
pub mod views;

pub use app::DeckApp;
