//! Decorative strip with softly rising ambient particles.

use glamour_effects::{ParticleField, Timestep};
use glamour_ui::{DrawSurface, Rect, Theme, Vec2};

use crate::config::GlamourConfig;

const TITLE_SIZE: f32 = 18.0;
const TITLE_INSET: f32 = 16.0;
const RULE_HEIGHT: f32 = 2.0;

/// Banner drawn across the top of the feature guide.
#[derive(Debug)]
pub struct FeaturesBanner {
    height: f32,
    title: String,
    timestep: Timestep,
    theme: Theme,
    visible: bool,
    particles: ParticleField,
}

impl FeaturesBanner {
    /// Creates a hidden banner seeded from `config.effects.seed`.
    #[must_use]
    pub fn new(config: &GlamourConfig) -> Self {
        let particles = ParticleField::from_config(config.effects.ambient_kind(), &config.effects);
        Self::with_field(config, particles)
    }

    /// Creates a hidden banner whose emission sequence is fixed by `seed`.
    #[must_use]
    pub fn with_seed(config: &GlamourConfig, seed: u64) -> Self {
        let particles = ParticleField::seeded(config.effects.ambient_kind(), &config.effects, seed);
        Self::with_field(config, particles)
    }

    fn with_field(config: &GlamourConfig, particles: ParticleField) -> Self {
        Self {
            height: config.banner.height,
            title: config.banner.title.clone(),
            timestep: config.effects.timestep,
            theme: Theme::default(),
            visible: false,
            particles,
        }
    }

    /// Shows the banner with a fresh, empty field.
    pub fn show(&mut self) {
        self.particles.clear();
        self.visible = true;
        tracing::debug!("features banner shown");
    }

    /// Hides the banner. Particles freeze until the next `show`.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether `draw` does anything.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The ambient field.
    #[must_use]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// Strip occupied at the top of `area`.
    #[must_use]
    pub fn region(&self, area: Rect) -> Rect {
        Rect::new(area.x, area.y, area.width, self.height.min(area.height).max(0.0))
    }

    /// Emits, steps and draws one frame. Returns the height consumed.
    pub fn draw<S: DrawSurface + ?Sized>(&mut self, area: Rect, frame_dt: f32, surface: &mut S) -> f32 {
        if !self.visible {
            return 0.0;
        }

        let region = self.region(area);
        let dt = self.timestep.resolve(frame_dt);

        self.particles.set_bounds(Some(region));
        self.particles.spawn_ambient(region);
        self.particles.advance(dt);

        surface.fill_rect(region, self.theme.background);
        surface.push_clip(region);
        self.particles.render(surface);
        surface.pop_clip();

        surface.fill_rect(
            Rect::new(region.x, region.bottom() - RULE_HEIGHT, region.width, RULE_HEIGHT),
            self.theme.border,
        );
        surface.text(
            Vec2::new(region.x + TITLE_INSET, region.center().y - TITLE_SIZE * 0.5),
            self.theme.accent,
            TITLE_SIZE,
            &self.title,
        );

        region.height
    }
}
