//! Controller layout decoders
//!
//! Each layout maps one controller family's button/axis indices onto the
//! abstract [`GamepadAction`] vocabulary. Decoders are stateless: they are
//! called once per tick per controller and emit every action with its current
//! pressed state. Press/release edges are the caller's concern.
//!
//! Indices that the device does not report read as "not pressed", so any
//! layout can be pointed at unknown or partially populated hardware.

use std::collections::HashMap;

use crate::gamepad::pure::deadzone::{axis_negative, axis_positive, button_pressed};
use crate::gamepad::types::{ButtonState, ControllerId, GamepadAction, LayoutKind, Mapping};

/// A controller family's decoder
pub trait ControllerLayout: Sync {
    fn kind(&self) -> LayoutKind;

    fn name(&self) -> &'static str;

    /// Ordering the device reader must produce for [`ControllerLayout::decode`]
    fn mapping(&self) -> Mapping;

    fn decode(
        &self,
        buttons: &[ButtonState],
        axes: &[f32],
        controller_index: usize,
        emit: &mut dyn FnMut(GamepadAction, bool, usize),
    );
}

// =============================================================================
// Standard (Xbox-style) layout
// =============================================================================

/// W3C standard ordering. Fallback for every controller without a table entry.
pub struct StandardLayout;

mod standard {
    pub const FACE_SOUTH: usize = 0;
    pub const FACE_EAST: usize = 1;
    pub const FACE_WEST: usize = 2;
    pub const FACE_NORTH: usize = 3;
    pub const DPAD_UP: usize = 12;
    pub const DPAD_DOWN: usize = 13;
    pub const DPAD_LEFT: usize = 14;
    pub const DPAD_RIGHT: usize = 15;
    pub const LEFT_X: usize = 0;
    pub const LEFT_Y: usize = 1;
    pub const RIGHT_X: usize = 2;
    pub const RIGHT_Y: usize = 3;
}

/// Decode a standard-mapped controller
pub fn check_standard(
    buttons: &[ButtonState],
    axes: &[f32],
    controller_index: usize,
    emit: &mut dyn FnMut(GamepadAction, bool, usize),
) {
    use standard::*;

    emit_dpad(
        emit,
        controller_index,
        [
            button_pressed(buttons, DPAD_UP),
            button_pressed(buttons, DPAD_DOWN),
            button_pressed(buttons, DPAD_LEFT),
            button_pressed(buttons, DPAD_RIGHT),
        ],
    );
    emit_sticks(emit, axes, controller_index, (LEFT_X, LEFT_Y), (RIGHT_X, RIGHT_Y));

    emit(GamepadAction::MainAction, button_pressed(buttons, FACE_SOUTH), controller_index);
    emit(GamepadAction::AltAction, button_pressed(buttons, FACE_WEST), controller_index);
    emit(GamepadAction::Back, button_pressed(buttons, FACE_EAST), controller_index);
    emit(GamepadAction::RightClick, button_pressed(buttons, FACE_NORTH), controller_index);
}

impl ControllerLayout for StandardLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Standard
    }

    fn name(&self) -> &'static str {
        "standard"
    }

    fn mapping(&self) -> Mapping {
        Mapping::Standard
    }

    fn decode(
        &self,
        buttons: &[ButtonState],
        axes: &[f32],
        controller_index: usize,
        emit: &mut dyn FnMut(GamepadAction, bool, usize),
    ) {
        check_standard(buttons, axes, controller_index, emit);
    }
}

// =============================================================================
// DualShock clone layout
// =============================================================================

/// Generic PlayStation-style USB clones that report raw DirectInput ordering.
/// The d-pad arrives as a hat on two axes instead of buttons.
pub struct DualShockCloneLayout;

mod dualshock_clone {
    pub const TRIANGLE: usize = 0;
    pub const CIRCLE: usize = 1;
    pub const CROSS: usize = 2;
    pub const SQUARE: usize = 3;
    pub const LEFT_X: usize = 0;
    pub const LEFT_Y: usize = 1;
    pub const RIGHT_X: usize = 2;
    pub const RIGHT_Y: usize = 3;
    pub const HAT_X: usize = 4;
    pub const HAT_Y: usize = 5;
}

/// Decode a raw-mapped PlayStation clone
pub fn check_dualshock_clone(
    buttons: &[ButtonState],
    axes: &[f32],
    controller_index: usize,
    emit: &mut dyn FnMut(GamepadAction, bool, usize),
) {
    use dualshock_clone::*;

    emit_dpad(
        emit,
        controller_index,
        [
            axis_negative(axes, HAT_Y),
            axis_positive(axes, HAT_Y),
            axis_negative(axes, HAT_X),
            axis_positive(axes, HAT_X),
        ],
    );
    emit_sticks(emit, axes, controller_index, (LEFT_X, LEFT_Y), (RIGHT_X, RIGHT_Y));

    emit(GamepadAction::MainAction, button_pressed(buttons, CROSS), controller_index);
    emit(GamepadAction::AltAction, button_pressed(buttons, SQUARE), controller_index);
    emit(GamepadAction::Back, button_pressed(buttons, CIRCLE), controller_index);
    emit(GamepadAction::RightClick, button_pressed(buttons, TRIANGLE), controller_index);
}

impl ControllerLayout for DualShockCloneLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::DualShockClone
    }

    fn name(&self) -> &'static str {
        "dualshock-clone"
    }

    fn mapping(&self) -> Mapping {
        Mapping::Raw
    }

    fn decode(
        &self,
        buttons: &[ButtonState],
        axes: &[f32],
        controller_index: usize,
        emit: &mut dyn FnMut(GamepadAction, bool, usize),
    ) {
        check_dualshock_clone(buttons, axes, controller_index, emit);
    }
}

// =============================================================================
// Shared emit helpers
// =============================================================================

/// `pad` is [up, down, left, right]
fn emit_dpad(emit: &mut dyn FnMut(GamepadAction, bool, usize), idx: usize, pad: [bool; 4]) {
    emit(GamepadAction::PadUp, pad[0], idx);
    emit(GamepadAction::PadDown, pad[1], idx);
    emit(GamepadAction::PadLeft, pad[2], idx);
    emit(GamepadAction::PadRight, pad[3], idx);
}

fn emit_sticks(
    emit: &mut dyn FnMut(GamepadAction, bool, usize),
    axes: &[f32],
    idx: usize,
    left: (usize, usize),
    right: (usize, usize),
) {
    emit(GamepadAction::LeftStickUp, axis_negative(axes, left.1), idx);
    emit(GamepadAction::LeftStickDown, axis_positive(axes, left.1), idx);
    emit(GamepadAction::LeftStickLeft, axis_negative(axes, left.0), idx);
    emit(GamepadAction::LeftStickRight, axis_positive(axes, left.0), idx);
    emit(GamepadAction::RightStickUp, axis_negative(axes, right.1), idx);
    emit(GamepadAction::RightStickDown, axis_positive(axes, right.1), idx);
    emit(GamepadAction::RightStickLeft, axis_negative(axes, right.0), idx);
    emit(GamepadAction::RightStickRight, axis_positive(axes, right.0), idx);
}

// =============================================================================
// Layout selection
// =============================================================================

static STANDARD: StandardLayout = StandardLayout;
static DUALSHOCK_CLONE: DualShockCloneLayout = DualShockCloneLayout;

/// Controllers known to need a non-standard decoder
const KNOWN_LAYOUTS: &[(ControllerId, LayoutKind)] = &[
    // "Twin USB Joystick" / PlayStation-to-USB adapters
    (ControllerId::new(0x0810, 0x0001), LayoutKind::DualShockClone),
    (ControllerId::new(0x0810, 0x0003), LayoutKind::DualShockClone),
];

pub fn layout_by_kind(kind: LayoutKind) -> &'static dyn ControllerLayout {
    match kind {
        LayoutKind::Standard => &STANDARD,
        LayoutKind::DualShockClone => &DUALSHOCK_CLONE,
    }
}

/// Pick the decoder for a controller, once, at connection time.
/// User overrides win over the built-in table; unknown hardware gets the standard layout.
pub fn layout_for(
    id: ControllerId,
    overrides: &HashMap<ControllerId, LayoutKind>,
) -> &'static dyn ControllerLayout {
    let kind = overrides
        .get(&id)
        .copied()
        .or_else(|| {
            KNOWN_LAYOUTS
                .iter()
                .find(|(known, _)| *known == id)
                .map(|(_, kind)| *kind)
        })
        .unwrap_or(LayoutKind::Standard);
    layout_by_kind(kind)
}
