//! The particle collection and its per-frame step.

use std::f32::consts::TAU;

use glamour_ui::{Color, DrawSurface, Rect, Vec2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::EffectsConfig;
use crate::emitter::{EmitterKind, GlowParams, Span};
use crate::particle::Particle;

/// Hard cap on live particles per field, whatever the spawn calls ask for.
pub const MAX_PARTICLES: usize = 4096;

/// Counters from the most recent `advance`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParticleStats {
    /// Particles alive after the step.
    pub alive: usize,
    /// Particles spawned since the previous step.
    pub spawned: usize,
    /// Removed because their life ran out.
    pub expired: usize,
    /// Removed because they drifted past the cull margin.
    pub escaped: usize,
}

/// A set of live particles owned by one window.
///
/// The field owns its random source for its whole lifetime. Spawn with
/// [`spawn_burst`](Self::spawn_burst) or [`spawn_ambient`](Self::spawn_ambient)
/// depending on [`EmitterKind`], then call [`advance`](Self::advance) and
/// [`render`](Self::render) once per drawn frame.
#[derive(Debug, Clone)]
pub struct ParticleField<R = ChaCha8Rng> {
    kind: EmitterKind,
    glow: GlowParams,
    cull_margin: f32,
    bounds: Option<Rect>,
    particles: Vec<Particle>,
    rng: R,
    /// Simulated seconds since the last ambient spawn.
    since_emit: f32,
    spawned_since_step: usize,
    stats: ParticleStats,
}

impl ParticleField<ChaCha8Rng> {
    /// Creates a deterministic field from `seed`.
    #[must_use]
    pub fn seeded(kind: EmitterKind, config: &EffectsConfig, seed: u64) -> Self {
        Self::new(kind, config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a field seeded from `config.seed`, or the clock if unset.
    #[must_use]
    pub fn from_config(kind: EmitterKind, config: &EffectsConfig) -> Self {
        Self::seeded(kind, config, config.resolved_seed())
    }
}

impl<R: Rng> ParticleField<R> {
    /// Creates an empty field with an explicit random source.
    #[must_use]
    pub fn new(kind: EmitterKind, config: &EffectsConfig, rng: R) -> Self {
        let capacity = match &kind {
            EmitterKind::Burst(params) => params.count,
            EmitterKind::Ambient(params) => params.ceiling,
        };
        Self {
            kind,
            glow: config.glow,
            cull_margin: config.cull_margin.max(0.0),
            bounds: None,
            particles: Vec::with_capacity(capacity.min(MAX_PARTICLES)),
            rng,
            since_emit: f32::INFINITY,
            spawned_since_step: 0,
            stats: ParticleStats::default(),
        }
    }

    /// Spawn strategy of this field.
    #[must_use]
    pub fn kind(&self) -> &EmitterKind {
        &self.kind
    }

    /// Live particles in spawn order.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when nothing is alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Counters from the last `advance`.
    #[must_use]
    pub fn stats(&self) -> ParticleStats {
        self.stats
    }

    /// Region particles may not stray from by more than the cull margin.
    /// `None` disables positional culling.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    /// Current culling region.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Drops every particle and re-arms the ambient cadence.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.since_emit = f32::INFINITY;
        self.spawned_since_step = 0;
    }

    /// Adds a fully specified particle.
    ///
    /// Ignored once the field holds [`MAX_PARTICLES`].
    pub fn push(&mut self, particle: Particle) {
        if self.particles.len() < MAX_PARTICLES {
            self.particles.push(particle);
            self.spawned_since_step += 1;
        }
    }

    /// Fires `count` particles radially from `origin`, colors drawn from `palette`.
    ///
    /// No-op for an empty palette, a non-finite origin, or a non-burst field.
    pub fn spawn_burst(&mut self, origin: Vec2, count: usize, palette: &[Color]) {
        let Self {
            kind,
            particles,
            rng,
            spawned_since_step,
            ..
        } = self;

        let EmitterKind::Burst(params) = &*kind else {
            tracing::debug!(kind = kind.name(), "spawn_burst ignored on non-burst field");
            return;
        };
        if count == 0 || palette.is_empty() || !origin.is_finite() {
            return;
        }

        let count = count.min(MAX_PARTICLES - particles.len());
        let jitter = Span::symmetric(params.jitter);
        particles.reserve(count);

        for _ in 0..count {
            let offset = Vec2::new(jitter.sample(rng), jitter.sample(rng));
            let angle = rng.gen_range(0.0..TAU);
            let speed = params.speed.sample(rng);
            let lifetime = params.lifetime.sample(rng);
            let color = palette[rng.gen_range(0..palette.len())];
            let radius = params.radius.sample(rng);

            particles.push(Particle::new(
                origin + offset,
                Vec2::from_angle(angle, speed),
                color,
                lifetime,
                radius,
            ));
        }

        *spawned_since_step += count;
        tracing::debug!(count, alive = particles.len(), "burst spawned");
    }

    /// Emits one particle inside `region` if the cadence and ceiling allow.
    ///
    /// Returns whether a particle was added. The cadence clock advances only
    /// through [`advance`](Self::advance), so repeated calls within one
    /// interval add at most one particle.
    pub fn spawn_ambient(&mut self, region: Rect) -> bool {
        let Self {
            kind,
            particles,
            rng,
            since_emit,
            spawned_since_step,
            ..
        } = self;

        let EmitterKind::Ambient(params) = &*kind else {
            return false;
        };
        if !region.has_area()
            || particles.len() >= params.ceiling.min(MAX_PARTICLES)
            || *since_emit < params.cadence
        {
            return false;
        }
        let Some(color) = params.pick_color(rng) else {
            return false;
        };

        let position = Vec2::new(
            Span::new(region.x, region.right()).sample(rng),
            Span::new(region.y, region.bottom()).sample(rng),
        );
        let velocity = Vec2::new(params.drift_x.sample(rng), params.rise.sample(rng));
        let lifetime = params.lifetime.sample(rng);
        let radius = params.radius.sample(rng);

        particles.push(Particle::new(position, velocity, color, lifetime, radius));
        *since_emit = 0.0;
        *spawned_since_step += 1;
        true
    }

    /// Steps every particle by `dt` seconds and culls the dead and the strayed.
    ///
    /// Survivors keep their relative order. Negative or non-finite deltas
    /// count as zero.
    pub fn advance(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.since_emit += dt;

        let keep_area = self.bounds.map(|bounds| bounds.expand(self.cull_margin));
        let mut expired = 0;
        let mut escaped = 0;

        self.particles.retain_mut(|particle| {
            particle.step(dt);
            if !particle.is_alive() {
                expired += 1;
                return false;
            }
            if keep_area.is_some_and(|area| !area.encloses(particle.position)) {
                escaped += 1;
                return false;
            }
            true
        });

        self.stats = ParticleStats {
            alive: self.particles.len(),
            spawned: std::mem::take(&mut self.spawned_since_step),
            expired,
            escaped,
        };

        if expired + escaped > 0 {
            tracing::trace!(
                kind = self.kind.name(),
                alive = self.stats.alive,
                expired,
                escaped,
                "particles culled"
            );
        }
    }

    /// Draws every particle, returning the number of draw calls issued.
    ///
    /// Alpha fades linearly with remaining life. Particles brighter than the
    /// glow threshold get a wider, fainter disc drawn underneath first.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> usize {
        let mut calls = 0;

        for particle in &self.particles {
            let color = particle.faded_color();

            if particle.color.a > self.glow.threshold {
                surface.fill_circle(
                    particle.position,
                    particle.radius * self.glow.radius_scale,
                    color.scale_alpha(self.glow.alpha_scale),
                );
                calls += 1;
            }

            surface.fill_circle(particle.position, particle.radius, color);
            calls += 1;
        }

        calls
    }
}
