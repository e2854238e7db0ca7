//! Visual easing of the slide handle
//!
//! The controller jumps straight to 0 or max on release. The screen shows
//! the handle gliding there instead.

/// Seconds for the handle to glide to its resting place.
pub const SETTLE_DURATION: f32 = 0.4;

#[derive(Debug, Clone, Copy)]
struct Glide {
    from: f32,
    to: f32,
    progress: f32,
}

/// The offset actually drawn on screen.
#[derive(Debug, Clone, Default)]
pub struct ShownOffset {
    value: f32,
    glide: Option<Glide>,
}

impl ShownOffset {
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_settling(&self) -> bool {
        self.glide.is_some()
    }

    /// Follow the finger exactly.
    pub fn track(&mut self, offset: f32) {
        self.glide = None;
        self.value = offset;
    }

    /// Glide from wherever the handle is shown to `target`.
    pub fn settle_to(&mut self, target: f32) {
        if (self.value - target).abs() < f32::EPSILON {
            self.track(target);
            return;
        }
        self.glide = Some(Glide { from: self.value, to: target, progress: 0.0 });
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let Some(glide) = self.glide.as_mut() else {
            return;
        };
        glide.progress = (glide.progress + dt / SETTLE_DURATION).min(1.0);
        self.value = lerp(glide.from, glide.to, ease_out_quad(glide.progress));
        if glide.progress >= 1.0 {
            self.value = glide.to;
            self.glide = None;
        }
    }

    pub fn reset(&mut self) {
        self.track(0.0);
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-out: fast start, gentle landing.
fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
