//! Spawn strategies.
//!
//! [`EmitterKind`] picks how a field spawns; everything after spawn
//! (integration, culling, rendering) is shared. The defaults are the values
//! the windows shipped with and should only change for visual reasons.

use glamour_ui::Color;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A half-open sampling span `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Lower bound (inclusive).
    pub min: f32,
    /// Upper bound (exclusive).
    pub max: f32,
}

impl Span {
    /// Creates a span.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// `[-extent, extent)`.
    #[must_use]
    pub const fn symmetric(extent: f32) -> Self {
        Self::new(-extent, extent)
    }

    /// Draws a uniform value. Degenerate spans (`max <= min`) yield `min`.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    pub(crate) fn validate(&self, name: &str, floor: f32) -> Result<(), String> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(format!("{name} must be finite, got {}..{}", self.min, self.max));
        }
        if self.min > self.max {
            return Err(format!("{name} is inverted: min {} > max {}", self.min, self.max));
        }
        if self.min < floor {
            return Err(format!("{name}.min must be at least {floor}, got {}", self.min));
        }
        Ok(())
    }
}

/// One-shot radial burst, used by the achievement popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstParams {
    /// Particles per burst when the owner uses the default.
    pub count: usize,
    /// Spawn offset from the origin, uniform on both axes in `±jitter`.
    pub jitter: f32,
    /// Initial speed (units/s); direction is uniform over the full circle.
    pub speed: Span,
    /// Lifetime (s).
    pub lifetime: Span,
    /// Disc radius.
    pub radius: Span,
}

impl Default for BurstParams {
    fn default() -> Self {
        Self {
            count: 24,
            jitter: 8.0,
            speed: Span::new(40.0, 160.0),
            lifetime: Span::new(0.5, 1.1),
            radius: Span::new(1.5, 4.0),
        }
    }
}

impl BurstParams {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(format!("burst.jitter must be >= 0, got {}", self.jitter));
        }
        self.speed.validate("burst.speed", 0.0)?;
        self.lifetime.validate("burst.lifetime", 0.0)?;
        self.radius.validate("burst.radius", 0.0)
    }
}

/// Continuous, rate-limited single-particle emitter, used by the features banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientParams {
    /// Minimum simulated seconds between two spawns.
    pub cadence: f32,
    /// Live particle ceiling; spawning stops at this count.
    pub ceiling: usize,
    /// RGBA colors picked uniformly per spawn.
    pub palette: Vec<[f32; 4]>,
    /// Horizontal drift (units/s).
    pub drift_x: Span,
    /// Vertical velocity (units/s). Negative is up.
    pub rise: Span,
    /// Lifetime (s).
    pub lifetime: Span,
    /// Disc radius.
    pub radius: Span,
}

impl Default for AmbientParams {
    fn default() -> Self {
        Self {
            cadence: 0.12,
            ceiling: 35,
            palette: vec![
                [1.0, 0.85, 0.4, 0.8],
                [1.0, 0.95, 0.8, 0.6],
                [0.6, 0.8, 1.0, 0.45],
                [1.0, 0.65, 0.85, 0.35],
            ],
            drift_x: Span::symmetric(10.0),
            rise: Span::new(-30.0, -8.0),
            lifetime: Span::new(3.0, 6.0),
            radius: Span::new(1.0, 2.5),
        }
    }
}

impl AmbientParams {
    /// Palette as colors.
    #[must_use]
    pub fn colors(&self) -> Vec<Color> {
        self.palette.iter().map(|&c| color_from_array(c)).collect()
    }

    /// Picks one palette color, or `None` when the palette is empty.
    pub(crate) fn pick_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Color> {
        if self.palette.is_empty() {
            return None;
        }
        Some(color_from_array(self.palette[rng.gen_range(0..self.palette.len())]))
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if !self.cadence.is_finite() || self.cadence <= 0.0 {
            return Err(format!("ambient.cadence must be > 0, got {}", self.cadence));
        }
        self.drift_x.validate("ambient.drift_x", f32::MIN)?;
        self.rise.validate("ambient.rise", f32::MIN)?;
        self.lifetime.validate("ambient.lifetime", 0.0)?;
        self.radius.validate("ambient.radius", 0.0)?;
        if self.palette.is_empty() {
            return Err("ambient.palette must contain at least one color".to_owned());
        }
        if let Some(bad) = self
            .palette
            .iter()
            .find(|c| c.iter().any(|ch| !(0.0..=1.0).contains(ch)))
        {
            return Err(format!("ambient.palette channels must be within 0..=1, got {bad:?}"));
        }
        Ok(())
    }
}

/// Soft bloom drawn under bright particles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowParams {
    /// Base alpha above which a particle glows.
    pub threshold: f32,
    /// Glow disc radius relative to the particle.
    pub radius_scale: f32,
    /// Glow alpha relative to the particle's faded alpha.
    pub alpha_scale: f32,
}

impl Default for GlowParams {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            radius_scale: 2.2,
            alpha_scale: 0.25,
        }
    }
}

impl GlowParams {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(format!("glow.threshold must be within 0..=1, got {}", self.threshold));
        }
        if !self.radius_scale.is_finite() || self.radius_scale < 1.0 {
            return Err(format!("glow.radius_scale must be >= 1, got {}", self.radius_scale));
        }
        if !(0.0..=1.0).contains(&self.alpha_scale) {
            return Err(format!("glow.alpha_scale must be within 0..=1, got {}", self.alpha_scale));
        }
        Ok(())
    }
}

/// How a field spawns particles.
#[derive(Debug, Clone, PartialEq)]
pub enum EmitterKind {
    /// Many particles at once from one point.
    Burst(BurstParams),
    /// One particle at a time inside a region.
    Ambient(AmbientParams),
}

impl EmitterKind {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Burst(_) => "burst",
            Self::Ambient(_) => "ambient",
        }
    }
}

fn color_from_array([r, g, b, a]: [f32; 4]) -> Color {
    Color::rgba(r, g, b, a)
}
