//! Directional navigator
//!
//! Turns arrow keys and decoded gamepad actions into focus moves on the
//! current view's [`FocusController`]. One navigator lives exactly as long
//! as its view: it owns the gamepad polling task and stops it on drop.

use std::time::{Duration, Instant};

use eframe::egui::Key;

use super::handle_input::{apply_nav_input, NavOutcome};
use crate::config::{ArrowKeyPolicy, DeckConfig};
use crate::gamepad::pipelines::PollerSettings;
use crate::gamepad::pure::{ActionEdges, RepeatTiming};
use crate::gamepad::{GamepadPoller, PollOutput};
use crate::input::{InputMethod, InputMethodDetector, PlatformEvent};
use crate::ui::focus::operations::FocusController;
use crate::ui::focus::pure::{map_action_to_nav, map_key_to_nav};
use crate::ui::focus::types::NavInput;

#[derive(Debug, Clone)]
pub struct NavigatorSettings {
    pub arrow_keys: ArrowKeyPolicy,
    pub repeat: RepeatTiming,
    /// Treat controllers found by the first enumeration as connection events.
    /// Only the app's first view does; later views would otherwise flip the
    /// input method to gamepad on every view switch.
    pub announce_existing: bool,
    /// None disables gamepad input entirely
    pub poller: Option<PollerSettings>,
}

impl NavigatorSettings {
    pub fn from_config(cfg: &DeckConfig, gamepad: bool) -> Self {
        Self {
            arrow_keys: cfg.arrow_keys,
            repeat: RepeatTiming {
                initial_delay: Duration::from_millis(cfg.repeat_initial_delay_ms),
                repeat_rate: Duration::from_millis(cfg.repeat_rate_ms),
            },
            announce_existing: true,
            poller: gamepad.then(|| PollerSettings::from_config(cfg)),
        }
    }
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            arrow_keys: ArrowKeyPolicy::default(),
            repeat: RepeatTiming::default(),
            announce_existing: true,
            poller: Some(PollerSettings::default()),
        }
    }
}

pub struct DirectionalNavigator {
    arrow_keys: ArrowKeyPolicy,
    announce_existing: bool,
    edges: ActionEdges,
    poller: Option<GamepadPoller>,
}

impl DirectionalNavigator {
    pub fn new(settings: NavigatorSettings) -> Self {
        Self {
            arrow_keys: settings.arrow_keys,
            announce_existing: settings.announce_existing,
            edges: ActionEdges::new(settings.repeat),
            poller: settings.poller.map(GamepadPoller::new),
        }
    }

    pub fn start(&mut self) {
        if let Some(poller) = self.poller.as_mut() {
            poller.start();
        }
    }

    /// Stop the polling task and release its devices. Safe to call twice.
    pub fn stop(&mut self) {
        if let Some(poller) = self.poller.as_mut() {
            poller.stop();
        }
        self.edges.clear();
    }

    /// Hand the held-action state over to the next view's navigator. A
    /// button held through a view switch must not fire again there.
    pub fn take_held(&mut self) -> ActionEdges {
        std::mem::take(&mut self.edges)
    }

    pub fn keep_held(&mut self, edges: ActionEdges) {
        self.edges = edges;
    }

    pub fn is_running(&self) -> bool {
        self.poller.as_ref().is_some_and(|p| p.is_running())
    }

    pub fn controller_names(&self) -> Vec<(usize, String)> {
        self.poller
            .as_ref()
            .map(|p| p.controller_names())
            .unwrap_or_default()
    }

    /// Handle a key press. `method_before` is the input method as it was
    /// before this key event reached the detector.
    pub fn on_key(
        &mut self,
        key: Key,
        method_before: InputMethod,
        focus: &mut FocusController,
    ) -> Option<NavOutcome> {
        let input = map_key_to_nav(key)?;
        if matches!(input, NavInput::Direction(_))
            && self.arrow_keys == ArrowKeyPolicy::GamepadOnly
            && method_before != InputMethod::Gamepad
        {
            return None;
        }
        Some(apply_nav_input(focus, input))
    }

    /// Poll controllers once and apply what they did
    pub fn tick(
        &mut self,
        now: Instant,
        detector: &mut InputMethodDetector,
        focus: &mut FocusController,
    ) -> Vec<NavOutcome> {
        let Some(poller) = self.poller.as_mut() else {
            return Vec::new();
        };
        let output = poller.tick(now);
        self.apply(output, now, detector, focus)
    }

    /// Feed one poll's worth of connection changes and action levels
    pub fn apply(
        &mut self,
        output: PollOutput,
        now: Instant,
        detector: &mut InputMethodDetector,
        focus: &mut FocusController,
    ) -> Vec<NavOutcome> {
        let announced = output
            .existing
            .iter()
            .filter(|_| self.announce_existing)
            .chain(&output.connected);
        for (index, _) in announced {
            detector.observe(&PlatformEvent::GamepadConnected(*index));
        }
        for index in &output.disconnected {
            self.edges.forget_controller(*index);
            detector.observe(&PlatformEvent::GamepadDisconnected(*index));
        }

        let mut outcomes = Vec::new();
        for event in output.actions {
            if !self.edges.update(event, now) {
                continue;
            }
            detector.observe(&PlatformEvent::GamepadActivity(event.controller_index));
            if let Some(input) = map_action_to_nav(event.action) {
                outcomes.push(apply_nav_input(focus, input));
            }
        }
        outcomes
    }
}

impl Drop for DirectionalNavigator {
    fn drop(&mut self) {
        self.stop();
    }
}
