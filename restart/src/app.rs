//! Restart - first-run onboarding app
//!
//! Shows the onboarding screen until the slider is confirmed, then the home
//! screen until Restart is tapped.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use egui::Context;
use restartcore::router::{Screen, ScreenRouter};
use restartcore::{AppConfig, PersistedFlagStore, RepaintController, RestartTheme};

use crate::audio::{AudioPlayer, CONFIRM_SOUND, RESTART_SOUND};
use crate::home;
use crate::onboarding::{OnboardingEvent, OnboardingScreen};

pub struct RestartApp {
    router: ScreenRouter,
    /// Set by the router subscription, consumed once per frame
    screen_changed: Rc<Cell<Option<Screen>>>,
    onboarding: OnboardingScreen,
    audio: AudioPlayer,
    theme: RestartTheme,
    repaint: RepaintController,
    last_update: Instant,
}

impl RestartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, theme: RestartTheme) -> Self {
        let mut router = ScreenRouter::new(PersistedFlagStore::open_default());
        let screen_changed = Rc::new(Cell::new(None));
        let sink = screen_changed.clone();
        router.subscribe(move |screen| sink.set(Some(screen)));

        log::info!("starting on {}", router.current_screen().title());

        Self {
            router,
            screen_changed,
            onboarding: OnboardingScreen::new(&config),
            audio: AudioPlayer::new(config.sounds_dir.clone(), config.sound_enabled),
            theme,
            repaint: RepaintController::new(),
            last_update: Instant::now(),
        }
    }

    fn apply_screen_change(&mut self) {
        if let Some(screen) = self.screen_changed.take() {
            if screen == Screen::Onboarding {
                self.onboarding.reset();
            }
            self.repaint.mark_needs_repaint();
        }
    }
}

impl eframe::App for RestartApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_update).as_secs_f32();
        self.last_update = now;

        let screen = self.router.current_screen();
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| match screen {
                Screen::Onboarding => {
                    match self.onboarding.show(ui, &self.theme, dt) {
                        Some(OnboardingEvent::Confirmed) => {
                            self.audio.play(CONFIRM_SOUND);
                            self.router.complete_onboarding();
                        }
                        Some(OnboardingEvent::SnappedBack) | None => {}
                    }
                }
                Screen::Home => {
                    if home::show(ui, &self.theme, self.router.is_storage_degraded()) {
                        self.audio.play(RESTART_SOUND);
                        self.router.restart();
                    }
                }
            });

        self.apply_screen_change();
        self.repaint.set_animating(self.onboarding.is_settling());
        self.repaint.end_frame(ctx);
    }
}
