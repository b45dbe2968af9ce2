// Focus ring rendering operations (egui-dependent)

use eframe::egui::{Color32, Rect, Stroke, StrokeKind, Ui};

use crate::config::FocusRingConfig;
use crate::ui::theme::ACCENT_GLOW;

/// Focus ring styling configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FocusRingStyle {
    pub stroke_width: f32,
    pub color: Color32,
    pub corner_radius: f32,
    pub padding: f32,
}

impl Default for FocusRingStyle {
    fn default() -> Self {
        Self::from_config(&FocusRingConfig::default())
    }
}

impl FocusRingStyle {
    pub fn from_config(config: &FocusRingConfig) -> Self {
        Self {
            // Invisible rings are worse than thin ones
            stroke_width: config.stroke_width.max(1.0),
            color: ACCENT_GLOW,
            corner_radius: config.corner_radius.clamp(0.0, u8::MAX as f32),
            padding: config.padding.max(0.0),
        }
    }

    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.stroke_width, self.color)
    }

    /// Rect the ring is painted on, for a widget occupying `rect`
    pub fn ring_rect(&self, rect: Rect) -> Rect {
        rect.expand(self.padding)
    }
}

/// Draw a focus ring around a rectangle
pub fn draw_focus_ring(ui: &Ui, rect: Rect, style: &FocusRingStyle) {
    ui.painter().rect_stroke(
        style.ring_rect(rect),
        style.corner_radius as u8,
        style.stroke(),
        StrokeKind::Outside,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn style_follows_config() {
        let style = FocusRingStyle::from_config(&FocusRingConfig {
            stroke_width: 4.0,
            corner_radius: 10.0,
            padding: 3.0,
        });
        assert_eq!(style.stroke_width, 4.0);
        assert_eq!(style.corner_radius, 10.0);
        assert_eq!(style.color, ACCENT_GLOW);
    }

    #[test]
    fn nonsense_config_is_clamped() {
        let style = FocusRingStyle::from_config(&FocusRingConfig {
            stroke_width: 0.0,
            corner_radius: -5.0,
            padding: -1.0,
        });
        assert_eq!(style.stroke_width, 1.0);
        assert_eq!(style.corner_radius, 0.0);
        assert_eq!(style.padding, 0.0);
    }

    #[test]
    fn ring_surrounds_widget() {
        let style = FocusRingStyle::default();
        let rect = Rect::from_min_max(pos2(10.0, 10.0), pos2(50.0, 30.0));
        let ring = style.ring_rect(rect);
        assert!(ring.contains_rect(rect));
        assert_eq!(ring.width(), rect.width() + 2.0 * style.padding);
    }
}
