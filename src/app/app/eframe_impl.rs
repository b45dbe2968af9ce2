//! eframe::App implementation for DeckApp

use std::time::Duration;

use super::DeckApp;
use crate::ui::theme;
use eframe::egui;

/// Gamepads are polled once per frame; keep frames coming while one may be in use
const GAMEPAD_FRAME: Duration = Duration::from_millis(16);

impl eframe::App for DeckApp {
    fn raw_input_hook(&mut self, _ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        if !raw_input.focused {
            return;
        }
        self.handle_raw_input(raw_input);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen_rect = ctx.screen_rect();
        ctx.layer_painter(egui::LayerId::background())
            .rect_filled(screen_rect, 0.0, theme::BG_DARK);

        self.view.focus.begin_frame();
        let mut next_view = None;

        egui::TopBottomPanel::top("tab_bar")
            .frame(theme::nav_frame())
            .show(ctx, |ui| {
                next_view = self.display_tab_bar(ui);
            });

        egui::TopBottomPanel::bottom("status_bar")
            .frame(theme::nav_frame())
            .show(ctx, |ui| self.display_status_bar(ui));

        egui::CentralPanel::default()
            .frame(theme::panel_frame())
            .show(ctx, |ui| self.display_content(ui));

        let unmounted = self.view.focus.end_frame();
        if !unmounted.is_empty() {
            tracing::trace!("focus: unmounted {:?}", unmounted);
        }
        self.view.scroll_to_focus = false;

        if let Some(kind) = next_view {
            self.switch_view(kind, true);
        }

        if self.view.navigator.is_running() {
            ctx.request_repaint_after(GAMEPAD_FRAME);
        }
    }
}
