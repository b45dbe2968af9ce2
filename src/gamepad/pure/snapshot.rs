// Button/axis array construction from device state (pure functions)
//
// The device reader hands us lookups into the kernel's key and axis state;
// these functions decide the ordering a layout expects.

use evdev::{AbsoluteAxisCode, KeyCode};

use crate::gamepad::pure::deadzone::STICK_THRESHOLD;
use crate::gamepad::types::ButtonState;

/// Kernel codes in W3C standard-gamepad index order
pub const STANDARD_BUTTONS: [KeyCode; 17] = [
    KeyCode::BTN_SOUTH,
    KeyCode::BTN_EAST,
    KeyCode::BTN_WEST,
    KeyCode::BTN_NORTH,
    KeyCode::BTN_TL,
    KeyCode::BTN_TR,
    KeyCode::BTN_TL2,
    KeyCode::BTN_TR2,
    KeyCode::BTN_SELECT,
    KeyCode::BTN_START,
    KeyCode::BTN_THUMBL,
    KeyCode::BTN_THUMBR,
    KeyCode::BTN_DPAD_UP,
    KeyCode::BTN_DPAD_DOWN,
    KeyCode::BTN_DPAD_LEFT,
    KeyCode::BTN_DPAD_RIGHT,
    KeyCode::BTN_MODE,
];

pub const STANDARD_AXES: [AbsoluteAxisCode; 4] = [
    AbsoluteAxisCode::ABS_X,
    AbsoluteAxisCode::ABS_Y,
    AbsoluteAxisCode::ABS_RX,
    AbsoluteAxisCode::ABS_RY,
];

/// First button code that belongs to a controller rather than a keyboard
const FIRST_PAD_BUTTON: u16 = KeyCode::BTN_0.0;

/// Build standard-ordered arrays. Pads that expose the d-pad as a hat
/// (most Xbox-style pads under xpad) get it folded into buttons 12-15.
pub fn standard_snapshot(
    is_down: impl Fn(KeyCode) -> bool,
    axis: impl Fn(AbsoluteAxisCode) -> Option<f32>,
) -> (Vec<ButtonState>, Vec<f32>) {
    let hat_x = axis(AbsoluteAxisCode::ABS_HAT0X).unwrap_or(0.0);
    let hat_y = axis(AbsoluteAxisCode::ABS_HAT0Y).unwrap_or(0.0);

    let buttons = STANDARD_BUTTONS
        .iter()
        .enumerate()
        .map(|(i, code)| {
            let hat = match i {
                12 => hat_y < -STICK_THRESHOLD,
                13 => hat_y > STICK_THRESHOLD,
                14 => hat_x < -STICK_THRESHOLD,
                15 => hat_x > STICK_THRESHOLD,
                _ => false,
            };
            ButtonState::new(is_down(*code) || hat)
        })
        .collect();

    let axes = STANDARD_AXES
        .iter()
        .map(|code| axis(*code).unwrap_or(0.0))
        .collect();

    (buttons, axes)
}

/// Build device-native arrays: controller buttons and axes in ascending code order
pub fn raw_snapshot(
    supported_buttons: &[KeyCode],
    supported_axes: &[AbsoluteAxisCode],
    is_down: impl Fn(KeyCode) -> bool,
    axis: impl Fn(AbsoluteAxisCode) -> Option<f32>,
) -> (Vec<ButtonState>, Vec<f32>) {
    let mut codes: Vec<KeyCode> = supported_buttons
        .iter()
        .copied()
        .filter(|code| code.0 >= FIRST_PAD_BUTTON)
        .collect();
    codes.sort_by_key(|code| code.0);

    let mut axis_codes = supported_axes.to_vec();
    axis_codes.sort_by_key(|code| code.0);

    let buttons = codes.into_iter().map(|code| ButtonState::new(is_down(code))).collect();
    let axes = axis_codes
        .into_iter()
        .map(|code| axis(code).unwrap_or(0.0))
        .collect();

    (buttons, axes)
}
