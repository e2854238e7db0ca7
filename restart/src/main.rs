//! Restart - onboarding with a slide-to-confirm button

mod app;
mod audio;
mod home;
mod onboarding;
mod settle;

use app::RestartApp;
use eframe::NativeOptions;
use restartcore::{AppConfig, RestartTheme};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Restart"),
        ..Default::default()
    };

    eframe::run_native(
        "Restart",
        options,
        Box::new(move |cc| {
            let theme = RestartTheme::default();
            theme.apply(&cc.egui_ctx);
            Box::new(RestartApp::new(cc, config, theme))
        }),
    )
}
