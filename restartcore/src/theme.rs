//! Restart theme
//!
//! Blue onboarding backdrop, red slide handle, white text. Home uses the
//! light system look with the same red accent.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct RestartColors;

impl RestartColors {
    pub const BLUE: Color32 = Color32::from_rgb(37, 146, 207);
    pub const RED: Color32 = Color32::from_rgb(235, 83, 80);
    pub const WHITE: Color32 = Color32::WHITE;
    pub const SECONDARY: Color32 = Color32::from_rgb(120, 120, 128);

    /// White at the given opacity, for the translucent track capsules.
    pub fn white_alpha(opacity: f32) -> Color32 {
        Color32::from_white_alpha((opacity.clamp(0.0, 1.0) * 255.0) as u8)
    }

    /// Black at the given opacity, for the inner handle shade.
    pub fn black_alpha(opacity: f32) -> Color32 {
        Color32::from_black_alpha((opacity.clamp(0.0, 1.0) * 255.0) as u8)
    }
}

pub struct RestartTheme {
    pub font_size_body: f32,
    pub font_size_title: f32,
    pub font_size_hero: f32,
    pub item_spacing: f32,
}

impl Default for RestartTheme {
    fn default() -> Self {
        Self {
            font_size_body: 16.0,
            font_size_title: 20.0,
            font_size_hero: 60.0,
            item_spacing: 20.0,
        }
    }
}

impl RestartTheme {
    pub fn hero_font(&self) -> FontId {
        FontId::new(self.font_size_hero, FontFamily::Proportional)
    }

    pub fn title_font(&self) -> FontId {
        FontId::new(self.font_size_title, FontFamily::Proportional)
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_body - 3.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_title, FontFamily::Proportional)),
            (TextStyle::Heading, self.title_font()),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.panel_fill = RestartColors::WHITE;
        visuals.window_rounding = Rounding::same(12.0);

        // Prominent capsule buttons
        let pill = |ws: &mut egui::style::WidgetVisuals| {
            ws.rounding = Rounding::same(24.0);
            ws.bg_stroke = Stroke::NONE;
        };
        pill(&mut visuals.widgets.inactive);
        pill(&mut visuals.widgets.hovered);
        pill(&mut visuals.widgets.active);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, self.item_spacing);
        style.spacing.button_padding = egui::vec2(20.0, 12.0);

        ctx.set_style(style);
    }
}
