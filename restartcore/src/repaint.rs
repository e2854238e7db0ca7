//! Repaint scheduling
//!
//! egui redraws on input by default. Between inputs the app only needs
//! frames while the slide handle is settling or right after the screen
//! changed, so `RepaintController` asks for those explicitly and lets egui
//! sleep otherwise.

use std::time::Duration;

/// Frame interval while an animation is running (~60 Hz).
const ANIMATION_INTERVAL: Duration = Duration::from_millis(16);

/// Drop this into the app struct and call [`end_frame`](Self::end_frame)
/// at the bottom of `update()`.
#[derive(Debug, Default)]
pub struct RepaintController {
    animating: bool,
    needs_repaint: bool,
}

impl RepaintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep frames coming while `animating` is true.
    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    /// Request one more frame, e.g. after the screen switched.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Delay before the next frame, or `None` to sleep until input.
    /// Clears a pending one-shot request.
    fn take_next_repaint(&mut self) -> Option<Duration> {
        let one_shot = std::mem::take(&mut self.needs_repaint);
        if self.animating {
            Some(ANIMATION_INTERVAL)
        } else if one_shot {
            Some(Duration::ZERO)
        } else {
            None
        }
    }

    pub fn end_frame(&mut self, ctx: &egui::Context) {
        match self.take_next_repaint() {
            Some(Duration::ZERO) => ctx.request_repaint(),
            Some(delay) => ctx.request_repaint_after(delay),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_sleeps() {
        let mut rc = RepaintController::new();
        assert_eq!(rc.take_next_repaint(), None);
    }

    #[test]
    fn test_one_shot_is_consumed() {
        let mut rc = RepaintController::new();
        rc.mark_needs_repaint();
        assert_eq!(rc.take_next_repaint(), Some(Duration::ZERO));
        assert_eq!(rc.take_next_repaint(), None);
    }

    #[test]
    fn test_animation_keeps_ticking() {
        let mut rc = RepaintController::new();
        rc.set_animating(true);
        rc.mark_needs_repaint();
        assert_eq!(rc.take_next_repaint(), Some(ANIMATION_INTERVAL));
        assert_eq!(rc.take_next_repaint(), Some(ANIMATION_INTERVAL));
        rc.set_animating(false);
        assert_eq!(rc.take_next_repaint(), None);
    }
}
