// Press-edge detection and hold-to-repeat for decoded actions
//
// Decoders report levels every tick; this turns them into discrete firings.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::gamepad::types::{ActionEvent, GamepadAction};

/// Hold-to-repeat timing for directional actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatTiming {
    /// Delay before the first repeat
    pub initial_delay: Duration,
    /// Time between repeats
    pub repeat_rate: Duration,
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(300),
            repeat_rate: Duration::from_millis(80),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fire: Instant,
}

/// Tracks which actions are held per controller
#[derive(Debug, Default)]
pub struct ActionEdges {
    timing: RepeatTiming,
    held: HashMap<(usize, GamepadAction), Held>,
}

impl ActionEdges {
    pub fn new(timing: RepeatTiming) -> Self {
        Self {
            timing,
            held: HashMap::new(),
        }
    }

    /// Feed one decoded level. Returns true when the action fires on this tick.
    pub fn update(&mut self, event: ActionEvent, now: Instant) -> bool {
        let key = (event.controller_index, event.action);

        match (event.pressed, self.held.get_mut(&key)) {
            // Newly pressed
            (true, None) => {
                self.held.insert(key, Held { since: now, last_fire: now });
                true
            }
            // Still held - only directions repeat
            (true, Some(held)) => {
                if !event.action.is_directional() {
                    return false;
                }
                let hold_duration = now.saturating_duration_since(held.since);
                let since_last = now.saturating_duration_since(held.last_fire);
                if hold_duration > self.timing.initial_delay && since_last > self.timing.repeat_rate {
                    held.last_fire = now;
                    true
                } else {
                    false
                }
            }
            // Released
            (false, Some(_)) => {
                self.held.remove(&key);
                false
            }
            (false, None) => false,
        }
    }

    /// Forget everything held, e.g. when polling stops
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Drop held state for a controller that went away
    pub fn forget_controller(&mut self, controller_index: usize) {
        self.held.retain(|(idx, _), _| *idx != controller_index);
    }

    pub fn is_held(&self, controller_index: usize, action: GamepadAction) -> bool {
        self.held.contains_key(&(controller_index, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(action: GamepadAction, pressed: bool) -> ActionEvent {
        ActionEvent {
            action,
            pressed,
            controller_index: 0,
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_once_on_press() {
        let mut edges = ActionEdges::default();
        let t0 = Instant::now();
        assert!(edges.update(ev(GamepadAction::MainAction, true), t0));
        assert!(!edges.update(ev(GamepadAction::MainAction, true), t0 + ms(16)));
        assert!(!edges.update(ev(GamepadAction::MainAction, true), t0 + ms(2000)));
    }

    #[test]
    fn release_rearms() {
        let mut edges = ActionEdges::default();
        let t0 = Instant::now();
        assert!(edges.update(ev(GamepadAction::Back, true), t0));
        assert!(!edges.update(ev(GamepadAction::Back, false), t0 + ms(16)));
        assert!(!edges.is_held(0, GamepadAction::Back));
        assert!(edges.update(ev(GamepadAction::Back, true), t0 + ms(32)));
    }

    #[test]
    fn released_level_never_fires() {
        let mut edges = ActionEdges::default();
        let t0 = Instant::now();
        assert!(!edges.update(ev(GamepadAction::PadDown, false), t0));
        assert!(!edges.update(ev(GamepadAction::PadDown, false), t0 + ms(500)));
    }

    #[test]
    fn held_direction_repeats_after_delay() {
        let mut edges = ActionEdges::default();
        let t0 = Instant::now();
        assert!(edges.update(ev(GamepadAction::PadDown, true), t0));
        // Inside the initial delay
        assert!(!edges.update(ev(GamepadAction::PadDown, true), t0 + ms(200)));
        // Past the initial delay
        assert!(edges.update(ev(GamepadAction::PadDown, true), t0 + ms(310)));
        // Too soon for the next repeat
        assert!(!edges.update(ev(GamepadAction::PadDown, true), t0 + ms(350)));
        assert!(edges.update(ev(GamepadAction::PadDown, true), t0 + ms(400)));
    }

    #[test]
    fn controllers_are_tracked_separately() {
        let mut edges = ActionEdges::default();
        let t0 = Instant::now();
        let second = ActionEvent {
            action: GamepadAction::MainAction,
            pressed: true,
            controller_index: 1,
        };
        assert!(edges.update(ev(GamepadAction::MainAction, true), t0));
        assert!(edges.update(second, t0));

        edges.forget_controller(1);
        assert!(edges.is_held(0, GamepadAction::MainAction));
        assert!(!edges.is_held(1, GamepadAction::MainAction));
    }
}
