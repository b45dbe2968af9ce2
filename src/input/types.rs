// Input modality types

use eframe::egui;

/// The modality the user is currently driving the UI with
#[derive(Clone, PartialEq, Eq, Copy, Debug, Default)]
pub enum InputMethod {
    Keyboard,
    Gamepad,
    Touch,
    #[default]
    Mouse,
}

impl InputMethod {
    pub fn label(self) -> &'static str {
        match self {
            Self::Keyboard => "Keyboard",
            Self::Gamepad => "Controller",
            Self::Touch => "Touch",
            Self::Mouse => "Mouse",
        }
    }
}

/// Raw platform events the detector cares about
#[derive(Clone, PartialEq, Debug)]
pub enum PlatformEvent {
    KeyDown(egui::Key),
    MouseMove,
    TouchStart,
    /// A controller appeared (hotplug or presence poll), by controller index
    GamepadConnected(usize),
    GamepadDisconnected(usize),
    /// A decoded gamepad action was newly pressed
    GamepadActivity(usize),
}
