//! Slide-to-confirm state machine
//!
//! Maps a horizontal drag on the onboarding track to a handle offset and a
//! one-shot confirmation. No rendering happens here: the screen feeds drag
//! translations in and reads `offset()` back out.
//!
//! ```text
//! Idle --drag--> Dragging --release past midpoint--> Confirmed (terminal)
//!                   |
//!                   +--release before midpoint--> Idle (offset = 0)
//! ```

use thiserror::Error;

/// The slide track cannot host the handle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliderError {
    #[error("slide track ({track}) must be wider than its handle ({handle})")]
    TrackTooShort { track: f32, handle: f32 },
    #[error("slide track dimensions must be finite and non-negative")]
    NonFinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePhase {
    Idle,
    Dragging,
    Confirmed,
}

/// What a release did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Released past the midpoint. Returned once per controller.
    Confirmed,
    /// Released short of the midpoint; the handle went back to the start.
    SnappedBack,
    /// The controller was already confirmed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct SlideToConfirm {
    track_width: f32,
    handle_width: f32,
    offset: f32,
    phase: SlidePhase,
}

fn validate(track_width: f32, handle_width: f32) -> Result<(), SliderError> {
    if !track_width.is_finite() || !handle_width.is_finite() || handle_width < 0.0 {
        return Err(SliderError::NonFinite);
    }
    if track_width <= handle_width {
        return Err(SliderError::TrackTooShort { track: track_width, handle: handle_width });
    }
    Ok(())
}

impl SlideToConfirm {
    pub fn new(track_width: f32, handle_width: f32) -> Result<Self, SliderError> {
        validate(track_width, handle_width)?;
        Ok(Self {
            track_width,
            handle_width,
            offset: 0.0,
            phase: SlidePhase::Idle,
        })
    }

    pub fn track_width(&self) -> f32 {
        self.track_width
    }

    pub fn handle_width(&self) -> f32 {
        self.handle_width
    }

    /// Furthest the handle can travel.
    pub fn max_offset(&self) -> f32 {
        self.track_width - self.handle_width
    }

    /// Release threshold, measured against the whole track.
    pub fn midpoint(&self) -> f32 {
        self.track_width / 2.0
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Width of the filled capsule trailing a handle drawn at `shown_offset`.
    /// The drawn offset may lag `offset()` while the handle glides home.
    pub fn fill_width(&self, shown_offset: f32) -> f32 {
        shown_offset.clamp(0.0, self.max_offset()) + self.handle_width
    }

    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    pub fn is_confirmed(&self) -> bool {
        self.phase == SlidePhase::Confirmed
    }

    /// Feed the cumulative horizontal translation since the press.
    /// Backward (and NaN) translations leave the offset where it is.
    pub fn on_drag_changed(&mut self, delta_x: f32) {
        if self.is_confirmed() {
            return;
        }
        self.phase = SlidePhase::Dragging;
        if delta_x > 0.0 {
            self.offset = delta_x.min(self.max_offset());
        }
    }

    pub fn on_drag_ended(&mut self) -> ReleaseOutcome {
        if self.is_confirmed() {
            return ReleaseOutcome::Ignored;
        }
        if self.offset > self.midpoint() {
            self.offset = self.max_offset();
            self.phase = SlidePhase::Confirmed;
            ReleaseOutcome::Confirmed
        } else {
            self.offset = 0.0;
            self.phase = SlidePhase::Idle;
            ReleaseOutcome::SnappedBack
        }
    }

    /// Back to a fresh, unconfirmed handle.
    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.phase = SlidePhase::Idle;
    }

    /// Apply a new track width after a layout change.
    pub fn resize(&mut self, track_width: f32) -> Result<(), SliderError> {
        validate(track_width, self.handle_width)?;
        self.track_width = track_width;
        self.offset = if self.is_confirmed() {
            self.max_offset()
        } else {
            self.offset.min(self.max_offset())
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: f32 = 310.0;
    const HANDLE: f32 = 80.0;

    fn slider() -> SlideToConfirm {
        SlideToConfirm::new(TRACK, HANDLE).unwrap()
    }

    #[test]
    fn test_starts_idle() {
        let s = slider();
        assert_eq!(s.phase(), SlidePhase::Idle);
        assert_eq!(s.offset(), 0.0);
        assert_eq!(s.max_offset(), 230.0);
        assert_eq!(s.fill_width(s.offset()), HANDLE);
        assert_eq!(s.fill_width(100.0), 180.0);
        assert_eq!(s.fill_width(-20.0), HANDLE);
        assert_eq!(s.fill_width(1_000.0), TRACK);
    }

    #[test]
    fn test_rejects_short_track() {
        assert_eq!(
            SlideToConfirm::new(80.0, 80.0).unwrap_err(),
            SliderError::TrackTooShort { track: 80.0, handle: 80.0 }
        );
        assert!(SlideToConfirm::new(40.0, 80.0).is_err());
        assert_eq!(SlideToConfirm::new(f32::NAN, 80.0).unwrap_err(), SliderError::NonFinite);
        assert_eq!(SlideToConfirm::new(300.0, -1.0).unwrap_err(), SliderError::NonFinite);
    }

    #[test]
    fn test_non_positive_delta_keeps_offset() {
        let mut s = slider();
        s.on_drag_changed(50.0);
        for delta in [0.0, -1.0, -500.0, f32::NAN] {
            s.on_drag_changed(delta);
            assert_eq!(s.offset(), 50.0);
        }
        assert_eq!(s.phase(), SlidePhase::Dragging);
    }

    #[test]
    fn test_offset_is_clamped_to_max() {
        let mut s = slider();
        for delta in [231.0, 400.0, 10_000.0] {
            s.on_drag_changed(delta);
            assert_eq!(s.offset(), s.max_offset());
        }
    }

    #[test]
    fn test_release_past_midpoint_confirms() {
        let mut s = slider();
        s.on_drag_changed(TRACK * 0.6);
        assert_eq!(s.on_drag_ended(), ReleaseOutcome::Confirmed);
        assert_eq!(s.phase(), SlidePhase::Confirmed);
        assert_eq!(s.offset(), s.max_offset());
    }

    #[test]
    fn test_release_before_midpoint_snaps_back() {
        let mut s = slider();
        s.on_drag_changed(TRACK * 0.3);
        assert_eq!(s.on_drag_ended(), ReleaseOutcome::SnappedBack);
        assert_eq!(s.phase(), SlidePhase::Idle);
        assert_eq!(s.offset(), 0.0);
    }

    #[test]
    fn test_release_exactly_at_midpoint_snaps_back() {
        let mut s = slider();
        s.on_drag_changed(s.midpoint());
        assert_eq!(s.on_drag_ended(), ReleaseOutcome::SnappedBack);
        assert_eq!(s.offset(), 0.0);
    }

    #[test]
    fn test_threshold_uses_offset_at_release() {
        // Passing the midpoint mid-drag does not count if the handle is
        // pulled back before release.
        let mut s = slider();
        s.on_drag_changed(200.0);
        s.on_drag_changed(100.0);
        assert_eq!(s.on_drag_ended(), ReleaseOutcome::SnappedBack);
    }

    #[test]
    fn test_confirmed_is_terminal() {
        let mut s = slider();
        s.on_drag_changed(200.0);
        assert_eq!(s.on_drag_ended(), ReleaseOutcome::Confirmed);

        let mut confirmations = 1;
        for delta in [10.0, 220.0, -5.0] {
            s.on_drag_changed(delta);
            if s.on_drag_ended() == ReleaseOutcome::Confirmed {
                confirmations += 1;
            }
            assert_eq!(s.offset(), s.max_offset());
        }
        assert_eq!(confirmations, 1);
        assert!(s.is_confirmed());
    }

    #[test]
    fn test_handle_wider_than_half_track_never_confirms() {
        // max offset 100 < midpoint 150
        let mut s = SlideToConfirm::new(300.0, 200.0).unwrap();
        s.on_drag_changed(1_000.0);
        assert_eq!(s.offset(), 100.0);
        assert_eq!(s.on_drag_ended(), ReleaseOutcome::SnappedBack);
    }

    #[test]
    fn test_reset_after_confirm() {
        let mut s = slider();
        s.on_drag_changed(250.0);
        s.on_drag_ended();
        s.reset();
        assert_eq!(s.phase(), SlidePhase::Idle);
        assert_eq!(s.offset(), 0.0);

        // Usable again
        s.on_drag_changed(200.0);
        assert_eq!(s.on_drag_ended(), ReleaseOutcome::Confirmed);
    }

    #[test]
    fn test_resize() {
        let mut s = slider();
        s.on_drag_changed(200.0);
        s.resize(200.0).unwrap();
        assert_eq!(s.offset(), 120.0);

        s.on_drag_changed(120.0);
        assert_eq!(s.on_drag_ended(), ReleaseOutcome::Confirmed);
        s.resize(400.0).unwrap();
        assert_eq!(s.offset(), 320.0);

        assert!(s.resize(50.0).is_err());
        assert_eq!(s.track_width(), 400.0);
    }
}
