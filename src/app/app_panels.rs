// Tab bar and status bar

use super::app::DeckApp;
use super::views::ViewKind;
use crate::input::InputMethod;
use crate::ui::focus::Focusable;
use crate::ui::theme::{ACCENT, TEXT_MUTED, TEXT_PRIMARY};

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

pub fn tab_icon(kind: ViewKind) -> &'static str {
    match kind {
        ViewKind::Library => icons::BOOKS,
        ViewKind::News => icons::NEWSPAPER,
        ViewKind::Mods => icons::PUZZLE_PIECE,
    }
}

pub fn method_icon(method: InputMethod) -> &'static str {
    match method {
        InputMethod::Keyboard => icons::KEYBOARD,
        InputMethod::Gamepad => icons::GAME_CONTROLLER,
        InputMethod::Touch => icons::HAND_POINTING,
        InputMethod::Mouse => icons::MOUSE,
    }
}

/// Button glyph hints shown while a gamepad is driving the UI
pub fn glyph_hints(kind: ViewKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        ViewKind::Library => &[("A", "Play"), ("Y", "Favorite"), ("B", "Tabs")],
        ViewKind::News => &[("A", "Read"), ("B", "Back")],
        ViewKind::Mods => &[("A", "Select"), ("B", "Back")],
    }
}

impl DeckApp {
    /// Returns the view whose tab was activated this frame
    pub(super) fn display_tab_bar(&mut self, ui: &mut Ui) -> Option<ViewKind> {
        let mut next = None;
        ui.horizontal(|ui| {
            for kind in ViewKind::ALL {
                let selected = kind == self.view.kind;
                let tab = Focusable::new(kind.tab_key())
                    .active(selected && self.view.focus_tab)
                    .ring(&self.ring)
                    .show(ui, &mut self.view.focus, |ui| {
                        let color = if selected { ACCENT } else { TEXT_MUTED };
                        ui.add_space(4.0);
                        ui.add(
                            egui::Label::new(
                                RichText::new(format!("{} {}", tab_icon(kind), kind.title()))
                                    .size(18.0)
                                    .color(color),
                            )
                            .selectable(false),
                        );
                    });
                if tab.activated {
                    next = Some(kind);
                }
                ui.add_space(12.0);
            }
        });
        next
    }

    pub(super) fn display_status_bar(&mut self, ui: &mut Ui) {
        let method = self.detector.current();
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} {}", method_icon(method), method.label()))
                    .color(TEXT_PRIMARY),
            );
            if !self.status.is_empty() {
                ui.separator();
                ui.label(RichText::new(&self.status).color(TEXT_MUTED));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if method == InputMethod::Gamepad {
                    // Right-to-left, so reverse to keep the hints in reading order
                    for (glyph, action) in glyph_hints(self.view.kind).iter().rev() {
                        ui.label(RichText::new(*action).color(TEXT_MUTED));
                        ui.label(RichText::new(*glyph).strong().color(ACCENT));
                        ui.add_space(8.0);
                    }
                }
                for (index, name) in self.view.navigator.controller_names() {
                    ui.label(
                        RichText::new(format!("{} {}: {}", icons::GAME_CONTROLLER, index + 1, name))
                            .small()
                            .color(TEXT_MUTED),
                    );
                }
            });
        });
    }
}
