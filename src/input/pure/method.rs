// Input method transitions and host event translation (pure functions)

use eframe::egui;

use crate::input::types::{InputMethod, PlatformEvent};

/// The method an event switches to, or None if the event does not qualify.
/// The most recent qualifying event always wins; there is no priority.
pub fn next_method(event: &PlatformEvent) -> Option<InputMethod> {
    match event {
        PlatformEvent::KeyDown(_) => Some(InputMethod::Keyboard),
        PlatformEvent::MouseMove => Some(InputMethod::Mouse),
        PlatformEvent::TouchStart => Some(InputMethod::Touch),
        PlatformEvent::GamepadConnected(_) | PlatformEvent::GamepadActivity(_) => {
            Some(InputMethod::Gamepad)
        }
        PlatformEvent::GamepadDisconnected(_) => None,
    }
}

/// Translate one frame of egui raw input into platform events, in arrival order.
///
/// Touch screens also produce pointer motion; pointer motion in a batch that
/// contains touch events is attributed to the touch, not the mouse.
pub fn platform_events(events: &[egui::Event]) -> Vec<PlatformEvent> {
    let has_touch = events
        .iter()
        .any(|e| matches!(e, egui::Event::Touch { .. }));

    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key { key, pressed: true, .. } => Some(PlatformEvent::KeyDown(*key)),
            egui::Event::MouseMoved(_) if !has_touch => Some(PlatformEvent::MouseMove),
            egui::Event::PointerMoved(_) if !has_touch => Some(PlatformEvent::MouseMove),
            egui::Event::Touch {
                phase: egui::TouchPhase::Start,
                ..
            } => Some(PlatformEvent::TouchStart),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(key: egui::Key, pressed: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: egui::Modifiers::default(),
        }
    }

    fn touch(phase: egui::TouchPhase) -> egui::Event {
        egui::Event::Touch {
            device_id: egui::TouchDeviceId(0),
            id: egui::TouchId(0),
            phase,
            pos: egui::pos2(10.0, 10.0),
            force: None,
        }
    }

    #[test]
    fn every_source_qualifies() {
        assert_eq!(
            next_method(&PlatformEvent::KeyDown(egui::Key::A)),
            Some(InputMethod::Keyboard)
        );
        assert_eq!(next_method(&PlatformEvent::MouseMove), Some(InputMethod::Mouse));
        assert_eq!(next_method(&PlatformEvent::TouchStart), Some(InputMethod::Touch));
        assert_eq!(
            next_method(&PlatformEvent::GamepadConnected(0)),
            Some(InputMethod::Gamepad)
        );
        assert_eq!(
            next_method(&PlatformEvent::GamepadActivity(1)),
            Some(InputMethod::Gamepad)
        );
    }

    #[test]
    fn disconnect_does_not_qualify() {
        assert_eq!(next_method(&PlatformEvent::GamepadDisconnected(0)), None);
    }

    #[test]
    fn key_press_and_pointer_motion_translate_in_order() {
        let events = vec![
            key(egui::Key::ArrowDown, true),
            key(egui::Key::ArrowDown, false),
            egui::Event::PointerMoved(egui::pos2(3.0, 4.0)),
        ];
        assert_eq!(
            platform_events(&events),
            vec![
                PlatformEvent::KeyDown(egui::Key::ArrowDown),
                PlatformEvent::MouseMove
            ]
        );
    }

    #[test]
    fn touch_batch_suppresses_pointer_motion() {
        let events = vec![
            touch(egui::TouchPhase::Start),
            egui::Event::PointerMoved(egui::pos2(10.0, 10.0)),
            touch(egui::TouchPhase::Move),
        ];
        assert_eq!(platform_events(&events), vec![PlatformEvent::TouchStart]);
    }

    #[test]
    fn unrelated_events_are_ignored() {
        let events = vec![egui::Event::Copy, egui::Event::Text("a".into())];
        assert!(platform_events(&events).is_empty());
    }
}
