//! Focusable element wrapper
//!
//! Wraps arbitrary contents, registers its key with the view's
//! [`FocusController`] and paints the focus ring when that key is focused.
//! It keeps no state of its own; everything it shows is read from the store.

use eframe::egui::{self, Key, Response, Sense, Ui};

use super::controller::FocusController;
use super::highlight::{draw_focus_ring, FocusRingStyle};
use crate::ui::focus::types::FocusKey;

pub struct Focusable<'a> {
    key: FocusKey,
    active: bool,
    on_click: Option<Box<dyn FnOnce() + 'a>>,
    ring: Option<&'a FocusRingStyle>,
}

/// What happened to a focusable this frame
pub struct FocusableResponse {
    pub response: Response,
    /// Focused after this frame's draw
    pub focused: bool,
    /// Clicked, Enter/Space while focused, or a gamepad activation
    pub activated: bool,
}

impl<'a> Focusable<'a> {
    pub fn new(key: impl Into<FocusKey>) -> Self {
        Self {
            key: key.into(),
            active: false,
            on_click: None,
            ring: None,
        }
    }

    /// Take focus the first frame this element is drawn
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn on_click(mut self, f: impl FnOnce() + 'a) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn ring(mut self, style: &'a FocusRingStyle) -> Self {
        self.ring = Some(style);
        self
    }

    pub fn show(
        self,
        ui: &mut Ui,
        focus: &mut FocusController,
        add_contents: impl FnOnce(&mut Ui),
    ) -> FocusableResponse {
        let Focusable {
            key,
            active,
            on_click,
            ring,
        } = self;

        focus.mount(&key, active);

        let response = egui::Frame::NONE
            .show(ui, add_contents)
            .response
            .interact(Sense::click());

        let was_focused = focus.is_focused(&key);
        let key_activation = was_focused
            && ui.input(|i| i.key_pressed(Key::Enter) || i.key_pressed(Key::Space));
        let pad_activation = focus.take_activation(&key);
        let activated = response.clicked() || key_activation || pad_activation;

        if activated {
            tracing::debug!("focus: activated {}", key);
            focus.set_focus(key.clone());
            if let Some(f) = on_click {
                f();
            }
        }

        let focused = focus.is_focused(&key);
        if focused {
            let default_style;
            let style = match ring {
                Some(style) => style,
                None => {
                    default_style = FocusRingStyle::default();
                    &default_style
                }
            };
            draw_focus_ring(ui, response.rect, style);
        }

        FocusableResponse {
            response,
            focused,
            activated,
        }
    }
}
