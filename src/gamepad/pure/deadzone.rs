// Stick deadzone and bounds-tolerant state reads (pure functions)

use crate::gamepad::types::ButtonState;

/// Axis magnitude a stick must exceed before it counts as pressed
pub const STICK_THRESHOLD: f32 = 0.5;

/// True when the axis is strictly past the negative threshold.
/// Absent axes read as centered.
pub fn axis_negative(axes: &[f32], index: usize) -> bool {
    axes.get(index).is_some_and(|v| *v < -STICK_THRESHOLD)
}

/// True when the axis is strictly past the positive threshold.
pub fn axis_positive(axes: &[f32], index: usize) -> bool {
    axes.get(index).is_some_and(|v| *v > STICK_THRESHOLD)
}

/// Absent buttons read as released
pub fn button_pressed(buttons: &[ButtonState], index: usize) -> bool {
    buttons.get(index).is_some_and(|b| b.pressed)
}
