//! Timed 0..1 style transitions for window chrome.
//!
//! The achievement popup slides in with one of these. Particles fade on
//! their own life clock and never come through here.

/// Exponential ease-out: covers most of the distance early, then settles.
///
/// `t` is clamped to 0..=1 and `ease_out_expo(1.0)` is exactly 1.
fn ease_out_expo(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - (-10.0 * t.max(0.0)).exp2()
    }
}

/// A value travelling from `from` to `to` over a fixed number of seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    elapsed: f32,
    seconds: f32,
}

impl Transition {
    /// A transition already resting at `value`. `seconds` applies to later restarts.
    #[must_use]
    pub fn resting(value: f32, seconds: f32) -> Self {
        let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        Self {
            from: value,
            to: value,
            elapsed: seconds,
            seconds,
        }
    }

    /// Jumps to `from` and starts heading for `to`.
    pub fn restart(&mut self, from: f32, to: f32) {
        self.from = from;
        self.to = to;
        self.elapsed = 0.0;
    }

    /// Moves the clock forward. Negative or NaN deltas are ignored.
    pub fn update(&mut self, dt: f32) {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.seconds);
        }
    }

    /// Fraction of the duration that has passed.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.seconds > 0.0 {
            (self.elapsed / self.seconds).min(1.0)
        } else {
            1.0
        }
    }

    /// Current eased value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * ease_out_expo(self.progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_front_loaded() {
        assert!(ease_out_expo(0.0).abs() < f32::EPSILON);
        assert!(ease_out_expo(0.3) > 0.8);
        assert!((ease_out_expo(1.0) - 1.0).abs() < f32::EPSILON);
        assert!((ease_out_expo(7.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_resting_holds_value() {
        let mut slide = Transition::resting(0.25, 0.35);
        slide.update(1.0);
        assert!((slide.value() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_restart_lands_exactly_on_target() {
        let mut slide = Transition::resting(0.0, 0.35);
        slide.restart(0.0, 1.0);
        assert!(slide.value().abs() < f32::EPSILON);

        slide.update(0.1);
        let partway = slide.value();
        assert!(partway > 0.0 && partway < 1.0);

        for _ in 0..30 {
            slide.update(1.0 / 60.0);
        }
        assert!((slide.value() - 1.0).abs() < f32::EPSILON);
        assert!((slide.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let mut slide = Transition::resting(0.0, 0.0);
        slide.restart(0.0, 1.0);
        assert!((slide.value() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_bad_deltas_ignored() {
        let mut slide = Transition::resting(0.0, 1.0);
        slide.restart(0.0, 1.0);
        slide.update(-1.0);
        slide.update(f32::NAN);
        assert!(slide.value().abs() < f32::EPSILON);
    }
}
