// Apply navigation inputs to a view's focus store
//
// Directions and activation are handled here; everything else is handed back
// to the view as a NavOutcome.

use crate::ui::focus::operations::FocusController;
use crate::ui::focus::types::NavInput;

/// Result of handling a navigation input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavOutcome {
    /// Focus followed an edge
    Moved,
    /// No edge in that direction, or nothing mounted to activate
    Stayed,
    /// The focused element will activate on its next draw
    ActivationRequested,
    Back,
    Alt,
    Context,
    Scroll(f32),
}

pub fn apply_nav_input(focus: &mut FocusController, input: NavInput) -> NavOutcome {
    match input {
        NavInput::Direction(direction) => {
            if focus.navigate(direction) {
                NavOutcome::Moved
            } else {
                NavOutcome::Stayed
            }
        }
        NavInput::Activate => {
            if focus.request_activation() {
                NavOutcome::ActivationRequested
            } else {
                NavOutcome::Stayed
            }
        }
        NavInput::Back => NavOutcome::Back,
        NavInput::Alt => NavOutcome::Alt,
        NavInput::Context => NavOutcome::Context,
        NavInput::Scroll(delta) => NavOutcome::Scroll(delta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::focus::types::{FocusKey, NavDirection, NavigationEdges, ViewGraph};

    fn focus() -> FocusController {
        let edges = NavigationEdges::new().row(&["a", "b"]);
        FocusController::new(ViewGraph::new(edges, "a"))
    }

    #[test]
    fn directions_move_or_stay() {
        let mut focus = focus();
        assert_eq!(
            apply_nav_input(&mut focus, NavInput::Direction(NavDirection::Right)),
            NavOutcome::Moved
        );
        assert_eq!(
            apply_nav_input(&mut focus, NavInput::Direction(NavDirection::Right)),
            NavOutcome::Stayed
        );
        assert_eq!(focus.focused(), Some(&FocusKey::from("b")));
    }

    #[test]
    fn activate_queues_for_focused_element() {
        let mut focus = focus();
        focus.begin_frame();
        focus.mount(&FocusKey::from("a"), false);
        focus.end_frame();
        assert_eq!(
            apply_nav_input(&mut focus, NavInput::Activate),
            NavOutcome::ActivationRequested
        );
        assert!(focus.take_activation(&FocusKey::from("a")));
    }

    #[test]
    fn activate_without_mounted_element_stays() {
        let mut focus = focus();
        assert_eq!(apply_nav_input(&mut focus, NavInput::Activate), NavOutcome::Stayed);
        assert!(!focus.take_activation(&FocusKey::from("a")));
    }

    #[test]
    fn other_inputs_pass_through() {
        let mut focus = focus();
        assert_eq!(apply_nav_input(&mut focus, NavInput::Back), NavOutcome::Back);
        assert_eq!(apply_nav_input(&mut focus, NavInput::Scroll(60.0)), NavOutcome::Scroll(60.0));
        assert_eq!(focus.generation(), 0);
    }
}
