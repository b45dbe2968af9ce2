// Input method operations

pub mod detector;

pub use detector::InputMethodDetector;
