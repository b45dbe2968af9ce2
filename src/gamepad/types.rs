//! Gamepad data types shared by the decoders, the device reader and the poller

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Abstract action vocabulary
// =============================================================================

/// Normalized controller input, independent of any physical layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadAction {
    PadUp,
    PadDown,
    PadLeft,
    PadRight,
    LeftStickUp,
    LeftStickDown,
    LeftStickLeft,
    LeftStickRight,
    RightStickUp,
    RightStickDown,
    RightStickLeft,
    RightStickRight,
    MainAction,
    AltAction,
    Back,
    RightClick,
}

impl GamepadAction {
    /// Every action, in the order decoders emit them
    pub const ALL: [GamepadAction; 16] = [
        GamepadAction::PadUp,
        GamepadAction::PadDown,
        GamepadAction::PadLeft,
        GamepadAction::PadRight,
        GamepadAction::LeftStickUp,
        GamepadAction::LeftStickDown,
        GamepadAction::LeftStickLeft,
        GamepadAction::LeftStickRight,
        GamepadAction::RightStickUp,
        GamepadAction::RightStickDown,
        GamepadAction::RightStickLeft,
        GamepadAction::RightStickRight,
        GamepadAction::MainAction,
        GamepadAction::AltAction,
        GamepadAction::Back,
        GamepadAction::RightClick,
    ];

    /// Directional actions repeat while held; buttons fire once per press
    pub fn is_directional(self) -> bool {
        !matches!(
            self,
            GamepadAction::MainAction
                | GamepadAction::AltAction
                | GamepadAction::Back
                | GamepadAction::RightClick
        )
    }
}

/// One decoded action for one controller on one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEvent {
    pub action: GamepadAction,
    pub pressed: bool,
    pub controller_index: usize,
}

// =============================================================================
// Raw snapshot
// =============================================================================

/// State of a single button as read from the device
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonState {
    pub pressed: bool,
    pub value: f32,
}

impl ButtonState {
    pub fn new(pressed: bool) -> Self {
        Self {
            pressed,
            value: if pressed { 1.0 } else { 0.0 },
        }
    }
}

/// Button/axis arrays for one controller at one instant.
/// Axes are normalized to [-1.0, 1.0].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GamepadSnapshot {
    pub controller_index: usize,
    pub id: ControllerId,
    pub buttons: Vec<ButtonState>,
    pub axes: Vec<f32>,
}

// =============================================================================
// Controller identity and layouts
// =============================================================================

/// USB vendor/product pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ControllerId {
    pub vendor: u16,
    pub product: u16,
}

impl ControllerId {
    pub const fn new(vendor: u16, product: u16) -> Self {
        Self { vendor, product }
    }

    /// Parse the "vvvv:pppp" form used in the settings file
    pub fn parse(s: &str) -> Option<Self> {
        let (vendor, product) = s.split_once(':')?;
        Some(Self {
            vendor: u16::from_str_radix(vendor.trim(), 16).ok()?,
            product: u16::from_str_radix(product.trim(), 16).ok()?,
        })
    }

    /// Short brand name for the vendor, empty when unknown
    pub fn type_prefix(&self) -> &'static str {
        match self.vendor {
            0x045e => "Xbox",
            0x054c => "PS",
            0x057e => "Switch",
            0x28de => "Steam",
            _ => "",
        }
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}", self.vendor, self.product)
    }
}

/// Known decoder layouts, selectable from the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LayoutKind {
    #[default]
    Standard,
    DualShockClone,
}

/// How the device reader orders buttons and axes for a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    /// W3C "standard gamepad" ordering (face buttons 0-3, d-pad 12-15)
    Standard,
    /// Device-native ordering: supported BTN_* and ABS_* codes ascending
    Raw,
}
