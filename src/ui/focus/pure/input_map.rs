// Input mapping from decoded gamepad actions and keys to NavInput

use eframe::egui::Key;

use crate::gamepad::types::GamepadAction;
use crate::ui::focus::types::{NavDirection, NavInput};

/// Scroll distance per right-stick firing, in points
pub const SCROLL_STEP: f32 = 60.0;

/// Map a gamepad action to a navigation input
pub fn map_action_to_nav(action: GamepadAction) -> Option<NavInput> {
    match action {
        // D-pad and left stick -> Directional navigation
        GamepadAction::PadUp | GamepadAction::LeftStickUp => {
            Some(NavInput::Direction(NavDirection::Up))
        }
        GamepadAction::PadDown | GamepadAction::LeftStickDown => {
            Some(NavInput::Direction(NavDirection::Down))
        }
        GamepadAction::PadLeft | GamepadAction::LeftStickLeft => {
            Some(NavInput::Direction(NavDirection::Left))
        }
        GamepadAction::PadRight | GamepadAction::LeftStickRight => {
            Some(NavInput::Direction(NavDirection::Right))
        }

        // Face buttons
        GamepadAction::MainAction => Some(NavInput::Activate),
        GamepadAction::Back => Some(NavInput::Back),
        GamepadAction::AltAction => Some(NavInput::Alt),
        GamepadAction::RightClick => Some(NavInput::Context),

        // Right stick scrolls the content area
        GamepadAction::RightStickUp => Some(NavInput::Scroll(-SCROLL_STEP)),
        GamepadAction::RightStickDown => Some(NavInput::Scroll(SCROLL_STEP)),

        // Not navigation inputs
        GamepadAction::RightStickLeft | GamepadAction::RightStickRight => None,
    }
}

/// Direction for an arrow key
pub fn key_direction(key: Key) -> Option<NavDirection> {
    match key {
        Key::ArrowUp => Some(NavDirection::Up),
        Key::ArrowDown => Some(NavDirection::Down),
        Key::ArrowLeft => Some(NavDirection::Left),
        Key::ArrowRight => Some(NavDirection::Right),
        _ => None,
    }
}

/// Keys handled by the navigator. Enter/Space are the focused element's own business.
pub fn map_key_to_nav(key: Key) -> Option<NavInput> {
    match key {
        Key::Escape | Key::Backspace => Some(NavInput::Back),
        _ => key_direction(key).map(NavInput::Direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpad_and_stick_share_directions() {
        assert_eq!(
            map_action_to_nav(GamepadAction::PadUp),
            Some(NavInput::Direction(NavDirection::Up))
        );
        assert_eq!(
            map_action_to_nav(GamepadAction::LeftStickRight),
            Some(NavInput::Direction(NavDirection::Right))
        );
    }

    #[test]
    fn test_face_buttons() {
        assert_eq!(map_action_to_nav(GamepadAction::MainAction), Some(NavInput::Activate));
        assert_eq!(map_action_to_nav(GamepadAction::Back), Some(NavInput::Back));
        assert_eq!(map_action_to_nav(GamepadAction::AltAction), Some(NavInput::Alt));
        assert_eq!(map_action_to_nav(GamepadAction::RightClick), Some(NavInput::Context));
    }

    #[test]
    fn test_right_stick() {
        assert_eq!(
            map_action_to_nav(GamepadAction::RightStickUp),
            Some(NavInput::Scroll(-SCROLL_STEP))
        );
        assert_eq!(map_action_to_nav(GamepadAction::RightStickLeft), None);
    }

    #[test]
    fn test_keys() {
        assert_eq!(
            map_key_to_nav(Key::ArrowLeft),
            Some(NavInput::Direction(NavDirection::Left))
        );
        assert_eq!(map_key_to_nav(Key::Escape), Some(NavInput::Back));
        assert_eq!(map_key_to_nav(Key::Enter), None);
        assert_eq!(map_key_to_nav(Key::Space), None);
    }
}
