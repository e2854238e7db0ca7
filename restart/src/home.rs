//! Home screen shown once onboarding is done

use egui::{Align, Layout, RichText, Ui};
use restartcore::theme::{RestartColors, RestartTheme};
use restartcore::widgets::CapsuleButton;

const QUOTE: &str = "The time that leads to mastery is dependent on the intensity of our focus.";
const UNSAVED_NOTICE: &str = "Progress could not be saved and will reset next launch.";

/// Draws the screen; returns true when Restart was tapped.
/// `storage_degraded` adds a notice that the flag only lives in memory.
pub fn show(ui: &mut Ui, theme: &RestartTheme, storage_degraded: bool) -> bool {
    let mut restart = false;
    let height = ui.available_height();

    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(height * 0.2);

        let diameter = (ui.available_width() * 0.5).min(height * 0.3);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), diameter / 2.0, RestartColors::BLUE.gamma_multiply(0.2));
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "🧑",
            egui::FontId::proportional(diameter * 0.6),
            RestartColors::BLUE,
        );

        ui.label(
            RichText::new(QUOTE)
                .size(theme.font_size_title)
                .color(RestartColors::SECONDARY),
        );

        ui.add_space((ui.available_height() - 80.0).max(0.0) / 2.0);

        if ui.add(CapsuleButton::new("⟲", "Restart")).clicked() {
            restart = true;
        }

        if storage_degraded {
            ui.small(RichText::new(UNSAVED_NOTICE).color(RestartColors::RED));
        }
    });

    restart
}
