//! Painting helpers for the slide track and the Restart button

use egui::{Align2, FontId, Painter, Pos2, Rect, Response, Sense, Ui, Vec2, Widget};

use crate::theme::RestartColors;

/// Static part of the slide track: an outer and an inset translucent capsule
/// with the call to action in the middle.
pub fn paint_track(painter: &Painter, rect: Rect, label: &str, font: FontId, handle_width: f32) {
    let rounding = rect.height() / 2.0;
    painter.rect_filled(rect, rounding, RestartColors::white_alpha(0.2));
    let inner = rect.shrink(8.0);
    painter.rect_filled(inner, inner.height() / 2.0, RestartColors::white_alpha(0.2));

    // Nudged right so it reads as centered beside the resting handle
    let label_pos = rect.center() + Vec2::new(handle_width / 4.0, 0.0);
    painter.text(label_pos, Align2::CENTER_CENTER, label, font, RestartColors::WHITE);
}

/// Red capsule growing behind the handle.
pub fn paint_fill(painter: &Painter, track: Rect, fill_width: f32) {
    let width = fill_width.clamp(0.0, track.width());
    let rect = Rect::from_min_size(track.min, Vec2::new(width, track.height()));
    painter.rect_filled(rect, track.height() / 2.0, RestartColors::RED);
}

/// The draggable circle with its double chevron.
pub fn paint_handle(painter: &Painter, center: Pos2, diameter: f32) {
    let radius = diameter / 2.0;
    painter.circle_filled(center, radius, RestartColors::RED);
    painter.circle_filled(center, radius - 8.0, RestartColors::black_alpha(0.15));
    painter.text(
        center,
        Align2::CENTER_CENTER,
        "»",
        FontId::proportional(radius * 0.8),
        RestartColors::WHITE,
    );
}

/// Large filled capsule button with a leading glyph.
pub struct CapsuleButton<'a> {
    icon: &'a str,
    text: &'a str,
}

impl<'a> CapsuleButton<'a> {
    pub fn new(icon: &'a str, text: &'a str) -> Self {
        Self { icon, text }
    }
}

impl<'a> Widget for CapsuleButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let font = FontId::proportional(20.0);
        let label = format!("{}  {}", self.icon, self.text);
        let text_width = ui.fonts(|f| {
            label.chars().map(|c| f.glyph_width(&font, c)).sum::<f32>()
        });
        let padding = Vec2::new(24.0, 14.0);
        let desired = Vec2::new(text_width, font.size) + padding * 2.0;
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = if response.is_pointer_button_down_on() {
                RestartColors::RED.gamma_multiply(0.8)
            } else if response.hovered() {
                RestartColors::RED.gamma_multiply(0.9)
            } else {
                RestartColors::RED
            };
            let painter = ui.painter();
            painter.rect_filled(rect, rect.height() / 2.0, fill);
            painter.text(rect.center(), Align2::CENTER_CENTER, label, font, RestartColors::WHITE);
        }

        response
    }
}
