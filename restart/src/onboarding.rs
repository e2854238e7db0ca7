//! Onboarding screen: title, illustration and the slide track

use egui::{Align2, Pos2, Rect, Sense, Ui, Vec2};
use restartcore::slider::{ReleaseOutcome, SlideToConfirm, SliderError};
use restartcore::theme::{RestartColors, RestartTheme};
use restartcore::widgets::{paint_fill, paint_handle, paint_track};
use restartcore::AppConfig;

use crate::settle::ShownOffset;

const TITLE: &str = "Accordion!";
const SUBTITLE: &str = "Ain't no party like\nan accordion party!";
const CALL_TO_ACTION: &str = "Let's rock!";

/// Result of one frame of the onboarding screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingEvent {
    Confirmed,
    SnappedBack,
}

pub struct OnboardingScreen {
    handle_width: f32,
    track_margin: f32,
    slider: Option<SlideToConfirm>,
    layout_error: Option<SliderError>,
    shown: ShownOffset,
    /// Pointer x where the current drag started
    drag_origin: Option<f32>,
}

impl OnboardingScreen {
    pub fn new(config: &AppConfig) -> Self {
        let sizes_valid = config.handle_width.is_finite()
            && config.handle_width >= 0.0
            && config.track_margin.is_finite();
        let layout_error = if sizes_valid {
            None
        } else {
            log::warn!(
                "invalid slider configuration (handle_width {}, track_margin {}); slide track disabled",
                config.handle_width,
                config.track_margin
            );
            Some(SliderError::NonFinite)
        };
        Self {
            handle_width: config.handle_width,
            track_margin: config.track_margin,
            slider: None,
            layout_error,
            shown: ShownOffset::default(),
            drag_origin: None,
        }
    }

    /// Shown in place of the slide track when it cannot be laid out.
    fn unavailable_message(&self) -> &'static str {
        match self.layout_error {
            Some(SliderError::NonFinite) => "invalid slider configuration",
            _ => "window too narrow",
        }
    }

    pub fn is_settling(&self) -> bool {
        self.shown.is_settling()
    }

    /// Fresh handle for a new pass through onboarding.
    pub fn reset(&mut self) {
        if let Some(slider) = self.slider.as_mut() {
            slider.reset();
        }
        self.shown.reset();
        self.drag_origin = None;
    }

    /// Fit the slider to the current window width.
    fn layout(&mut self, available_width: f32) {
        if self.layout_error == Some(SliderError::NonFinite) {
            // Bad config never fixes itself
            return;
        }
        let track_width = available_width - self.track_margin;
        let result = match self.slider.take() {
            Some(slider) if slider.track_width() == track_width => Ok(slider),
            Some(mut slider) => slider.resize(track_width).map(|()| slider),
            None => SlideToConfirm::new(track_width, self.handle_width),
        };
        match result {
            Ok(slider) => {
                self.slider = Some(slider);
                self.layout_error = None;
            }
            Err(e) => {
                if self.layout_error.as_ref() != Some(&e) {
                    log::warn!("slide track disabled: {e}");
                }
                self.layout_error = Some(e);
            }
        }
    }

    pub fn show(&mut self, ui: &mut Ui, theme: &RestartTheme, dt: f32) -> Option<OnboardingEvent> {
        self.shown.update(dt);
        let full = ui.max_rect();
        self.layout(full.width());

        let painter = ui.painter().clone();
        painter.rect_filled(full, 0.0, RestartColors::BLUE);

        // Header
        let title_y = full.min.y + full.height() * 0.12;
        painter.text(
            Pos2::new(full.center().x, title_y),
            Align2::CENTER_CENTER,
            TITLE,
            theme.hero_font(),
            RestartColors::WHITE,
        );
        painter.text(
            Pos2::new(full.center().x, title_y + 60.0),
            Align2::CENTER_TOP,
            SUBTITLE,
            theme.title_font(),
            RestartColors::WHITE,
        );

        // Center: concentric rings behind the illustration
        let art_center = Pos2::new(full.center().x, full.center().y + 20.0);
        let ring = (full.width() * 0.4).min(full.height() * 0.22);
        painter.circle_stroke(art_center, ring, egui::Stroke::new(40.0, RestartColors::white_alpha(0.15)));
        painter.circle_stroke(art_center, ring * 0.75, egui::Stroke::new(40.0, RestartColors::white_alpha(0.2)));
        painter.text(art_center, Align2::CENTER_CENTER, "🪗", egui::FontId::proportional(ring), RestartColors::WHITE);

        // Footer
        let message = self.unavailable_message();
        let Some(slider) = self.slider.as_mut() else {
            painter.text(
                Pos2::new(full.center().x, full.max.y - 60.0),
                Align2::CENTER_CENTER,
                message,
                theme.title_font(),
                RestartColors::WHITE,
            );
            return None;
        };

        let handle = slider.handle_width();
        let track = Rect::from_center_size(
            Pos2::new(full.center().x, full.max.y - 16.0 - handle / 2.0),
            Vec2::new(slider.track_width(), handle),
        );
        paint_track(&painter, track, CALL_TO_ACTION, theme.title_font(), handle);

        let handle_rect = Rect::from_min_size(
            track.min + Vec2::new(self.shown.value(), 0.0),
            Vec2::splat(handle),
        );
        let response = ui.interact(handle_rect, ui.id().with("slide_handle"), Sense::drag());

        let mut event = None;
        if response.drag_started() {
            // egui only reports the drag after some movement; measure from the press
            let press = ui.input(|i| i.pointer.press_origin());
            self.drag_origin = press.or(response.interact_pointer_pos()).map(|p| p.x);
        }
        if response.dragged() {
            if let (Some(origin), Some(pos)) = (self.drag_origin, response.interact_pointer_pos()) {
                slider.on_drag_changed(pos.x - origin);
                self.shown.track(slider.offset());
            }
        }
        if response.drag_stopped() {
            self.drag_origin = None;
            let outcome = slider.on_drag_ended();
            log::debug!("slider released: {outcome:?}");
            self.shown.settle_to(slider.offset());
            event = match outcome {
                ReleaseOutcome::Confirmed => Some(OnboardingEvent::Confirmed),
                ReleaseOutcome::SnappedBack => Some(OnboardingEvent::SnappedBack),
                ReleaseOutcome::Ignored => None,
            };
        }

        paint_fill(&painter, track, slider.fill_width(self.shown.value()));
        paint_handle(&painter, handle_rect.center(), handle);

        event
    }
}
