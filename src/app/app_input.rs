// Input handling for keyboard/gamepad navigation

use std::time::Instant;

use super::app::DeckApp;
use super::views::{game_index, ViewKind};
use crate::input::{platform_events, PlatformEvent};
use crate::ui::focus::NavOutcome;

use eframe::egui;

impl DeckApp {
    /// Run this frame's raw events and gamepad state through the detector and navigator
    pub(super) fn handle_raw_input(&mut self, raw_input: &egui::RawInput) {
        let mut outcomes = Vec::new();

        for event in platform_events(&raw_input.events) {
            // Arrow gating looks at the method before this key landed
            let method_before = self.detector.current();
            self.detector.observe(&event);
            if let PlatformEvent::KeyDown(key) = event {
                outcomes.extend(self.view.navigator.on_key(key, method_before, &mut self.view.focus));
            }
        }

        let view = &mut self.view;
        outcomes.extend(view.navigator.tick(Instant::now(), &mut self.detector, &mut view.focus));

        for outcome in outcomes {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: NavOutcome) {
        match outcome {
            NavOutcome::Moved => self.view.scroll_to_focus = true,
            NavOutcome::Stayed | NavOutcome::ActivationRequested => {}
            NavOutcome::Back => self.go_back(),
            NavOutcome::Alt => self.toggle_favorite(),
            NavOutcome::Context => {
                if let Some(key) = self.view.focus.focused() {
                    self.status = format!("No options for {}", key);
                }
            }
            NavOutcome::Scroll(delta) => self.view.pending_scroll += delta,
        }
    }

    /// Back returns to the library; in the library it jumps to the tab bar
    fn go_back(&mut self) {
        match self.view.kind {
            ViewKind::Library => {
                self.view.focus.set_focus(ViewKind::Library.tab_key());
                self.view.scroll_to_focus = true;
            }
            ViewKind::News | ViewKind::Mods => self.switch_view(ViewKind::Library, false),
        }
    }

    fn toggle_favorite(&mut self) {
        if self.view.kind != ViewKind::Library {
            return;
        }
        let Some(index) = self.view.focus.focused().and_then(game_index) else {
            return;
        };
        if let Some(game) = self.games.get_mut(index) {
            game.favorite = !game.favorite;
            self.status = match game.favorite {
                true => format!("Added {} to favorites", game.title),
                false => format!("Removed {} from favorites", game.title),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeckConfig;
    use crate::gamepad::{ActionEvent, GamepadAction, PollOutput};
    use crate::input::InputMethod;
    use std::time::Duration;
    use crate::ui::focus::FocusKey;
    use eframe::egui::{Event, Key, Modifiers, RawInput};

    fn app() -> DeckApp {
        DeckApp::new(DeckConfig::default(), false)
    }

    fn keys(keys: &[Key]) -> RawInput {
        RawInput {
            events: keys
                .iter()
                .map(|key| Event::Key {
                    key: *key,
                    physical_key: None,
                    pressed: true,
                    repeat: false,
                    modifiers: Modifiers::NONE,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn arrows_move_focus_and_set_keyboard_mode() {
        let mut app = app();
        app.handle_raw_input(&keys(&[Key::ArrowRight, Key::ArrowDown]));
        assert_eq!(app.view.focus.focused(), Some(&FocusKey::from("game:4")));
        assert_eq!(app.detector.current(), InputMethod::Keyboard);
        assert!(app.view.scroll_to_focus);
    }

    #[test]
    fn escape_leaves_secondary_view() {
        let mut app = app();
        app.switch_view(ViewKind::News, true);
        app.handle_raw_input(&keys(&[Key::Escape]));
        assert_eq!(app.view.kind, ViewKind::Library);
        assert_eq!(app.view.focus.focused(), Some(&FocusKey::from("game:0")));
    }

    #[test]
    fn escape_in_library_focuses_tab() {
        let mut app = app();
        app.handle_raw_input(&keys(&[Key::ArrowDown, Key::Escape]));
        assert_eq!(app.view.focus.focused(), Some(&ViewKind::Library.tab_key()));
    }

    #[test]
    fn alt_toggles_favorite_on_focused_game() {
        let mut app = app();
        app.view.focus.set_focus(FocusKey::from("game:2"));
        app.apply_outcome(NavOutcome::Alt);
        assert!(app.games[2].favorite);
        app.apply_outcome(NavOutcome::Alt);
        assert!(!app.games[2].favorite);
    }

    #[test]
    fn scroll_accumulates_until_drawn() {
        let mut app = app();
        app.apply_outcome(NavOutcome::Scroll(60.0));
        app.apply_outcome(NavOutcome::Scroll(60.0));
        assert_eq!(app.view.pending_scroll, 120.0);
    }

    /// Feed one poll with `action` held on controller 0 to the current view
    fn hold(app: &mut DeckApp, action: GamepadAction, now: Instant) {
        let output = PollOutput {
            actions: vec![ActionEvent {
                action,
                pressed: true,
                controller_index: 0,
            }],
            ..Default::default()
        };
        let view = &mut app.view;
        let outcomes = view.navigator.apply(output, now, &mut app.detector, &mut view.focus);
        for outcome in outcomes {
            app.apply_outcome(outcome);
        }
    }

    #[test]
    fn held_back_fires_once_across_view_switch() {
        let mut app = app();
        app.switch_view(ViewKind::News, true);
        let start = Instant::now();

        hold(&mut app, GamepadAction::Back, start);
        assert_eq!(app.view.kind, ViewKind::Library);
        assert_eq!(app.view.focus.focused(), Some(&FocusKey::from("game:0")));

        // Next frame, B still down: the library must not see a second Back
        hold(&mut app, GamepadAction::Back, start + Duration::from_millis(16));
        assert_eq!(app.view.focus.focused(), Some(&FocusKey::from("game:0")));
    }

    #[test]
    fn switching_view_rebuilds_focus_store() {
        let mut app = app();
        app.handle_raw_input(&keys(&[Key::ArrowRight]));
        app.switch_view(ViewKind::Mods, true);
        assert_eq!(app.view.kind, ViewKind::Mods);
        assert_eq!(app.view.focus.focused(), Some(&FocusKey::from("mod:0:install")));
        assert_eq!(app.view.focus.generation(), 0);
        assert!(app.view.focus_tab);
    }
}
