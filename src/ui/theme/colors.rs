//! Dark palette tuned for couch distance and a visible focus ring

use eframe::egui::{self, Color32, CornerRadius, Margin, Stroke};

pub const BG_DARK: Color32 = Color32::from_rgb(18, 20, 26);
pub const BG_MID: Color32 = Color32::from_rgb(28, 31, 40);
pub const BG_LIGHT: Color32 = Color32::from_rgb(44, 48, 60);

pub const ACCENT: Color32 = Color32::from_rgb(80, 180, 255);
pub const ACCENT_DIM: Color32 = Color32::from_rgb(50, 110, 160);
/// Focus ring color
pub const ACCENT_GLOW: Color32 = Color32::from_rgb(100, 200, 255);

pub const SELECTION_BG: Color32 = Color32::from_rgb(36, 58, 84);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 233, 240);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(130, 136, 150);

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_MID;
    visuals.window_fill = BG_MID;
    visuals.extreme_bg_color = BG_DARK;
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.selection.bg_fill = SELECTION_BG;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT_DIM);
    ctx.set_visuals(visuals);
}

/// Frame for grid tiles and list rows
pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(BG_LIGHT)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(10))
}

/// Frame for the tab bar and status bar
pub fn nav_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(BG_MID)
        .inner_margin(Margin::symmetric(8, 4))
}

pub fn panel_frame() -> egui::Frame {
    egui::Frame::NONE.fill(BG_DARK).inner_margin(Margin::same(12))
}
