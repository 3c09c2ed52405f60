//! A single short-lived particle.

use glamour_ui::{Color, Vec2};

/// One decorative particle.
///
/// `max_life` is fixed at construction. `remaining_life` only ever goes down
/// and is kept within `0..=max_life`; the particle is alive while it is
/// strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Render-space position.
    pub position: Vec2,
    /// Units per second.
    pub velocity: Vec2,
    /// Base color; alpha is the brightness at full life.
    pub color: Color,
    /// Disc radius.
    pub radius: f32,
    remaining_life: f32,
    max_life: f32,
}

impl Particle {
    /// Creates a particle at full life.
    ///
    /// Negative or non-finite lifetimes become zero, which makes the
    /// particle dead on arrival.
    #[must_use]
    pub fn new(position: Vec2, velocity: Vec2, color: Color, lifetime: f32, radius: f32) -> Self {
        let max_life = if lifetime.is_finite() { lifetime.max(0.0) } else { 0.0 };
        Self {
            position,
            velocity,
            color,
            radius: radius.max(0.0),
            remaining_life: max_life,
            max_life,
        }
    }

    /// Returns a copy with `remaining` life, clamped into `0..=max_life`.
    #[must_use]
    pub fn with_remaining_life(mut self, remaining: f32) -> Self {
        self.remaining_life = if remaining.is_finite() {
            remaining.clamp(0.0, self.max_life)
        } else {
            0.0
        };
        self
    }

    /// Seconds left before expiry.
    #[inline]
    #[must_use]
    pub fn remaining_life(&self) -> f32 {
        self.remaining_life
    }

    /// Lifetime at spawn.
    #[inline]
    #[must_use]
    pub fn max_life(&self) -> f32 {
        self.max_life
    }

    /// Is this particle alive?
    #[inline]
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.remaining_life > 0.0
    }

    /// `remaining / max`, clamped to 0..=1.
    #[must_use]
    pub fn life_fraction(&self) -> f32 {
        if self.max_life > 0.0 {
            (self.remaining_life / self.max_life).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Color with alpha faded linearly by remaining life.
    #[must_use]
    pub fn faded_color(&self) -> Color {
        self.color.scale_alpha(self.life_fraction())
    }

    /// Integrates position and ages the particle by `dt` seconds.
    #[inline]
    pub fn step(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.remaining_life = (self.remaining_life - dt).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still(life: f32) -> Particle {
        Particle::new(Vec2::ZERO, Vec2::ZERO, Color::WHITE, life, 2.0)
    }

    #[test]
    fn test_step_integrates_and_ages() {
        let mut p = Particle::new(Vec2::new(10.0, 10.0), Vec2::new(60.0, -30.0), Color::WHITE, 1.0, 2.0);
        p.step(0.5);

        assert!((p.position.x - 40.0).abs() < 1e-5);
        assert!((p.position.y + 5.0).abs() < 1e-5);
        assert!((p.remaining_life() - 0.5).abs() < 1e-6);
        assert!(p.is_alive());
    }

    #[test]
    fn test_life_never_negative() {
        let mut p = still(0.2);
        p.step(1.0);
        assert!(p.remaining_life().abs() < f32::EPSILON);
        assert!(!p.is_alive());
    }

    #[test]
    fn test_remaining_clamped_to_max() {
        let p = still(1.0).with_remaining_life(5.0);
        assert!((p.remaining_life() - 1.0).abs() < f32::EPSILON);

        let p = still(1.0).with_remaining_life(-3.0);
        assert!(!p.is_alive());
    }

    #[test]
    fn test_bad_lifetime_is_dead_on_arrival() {
        assert!(!still(-1.0).is_alive());
        assert!(!still(f32::NAN).is_alive());
        assert!(still(-1.0).life_fraction().abs() < f32::EPSILON);
    }

    #[test]
    fn test_faded_color_scales_alpha() {
        let p = Particle::new(Vec2::ZERO, Vec2::ZERO, Color::GOLD.with_alpha(0.8), 2.0, 1.0)
            .with_remaining_life(0.5);
        assert!((p.faded_color().a - 0.2).abs() < 1e-6);
    }
}
