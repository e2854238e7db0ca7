//! restartcore - onboarding state and shared UI pieces for Restart

pub mod config;
pub mod repaint;
pub mod router;
pub mod slider;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use config::AppConfig;
pub use repaint::RepaintController;
pub use router::{Screen, ScreenRouter};
pub use slider::{ReleaseOutcome, SlidePhase, SlideToConfirm, SliderError};
pub use storage::PersistedFlagStore;
pub use theme::RestartTheme;
