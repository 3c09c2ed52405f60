//! Behavioural properties of the particle simulator.

use glamour_effects::{EffectsConfig, Particle, ParticleField, Span, Timestep};
use glamour_ui::{Color, Rect, UIRenderer, Vec2};

const DT: f32 = Timestep::SOURCE_DT;

fn config() -> EffectsConfig {
    EffectsConfig::default()
}

fn burst_field(seed: u64) -> ParticleField {
    let config = config();
    ParticleField::seeded(config.burst_kind(), &config, seed)
}

fn ambient_field_with(config: &EffectsConfig, seed: u64) -> ParticleField {
    ParticleField::seeded(config.ambient_kind(), config, seed)
}

fn resting(life: f32) -> Particle {
    Particle::new(Vec2::new(50.0, 50.0), Vec2::ZERO, Color::WHITE, life, 2.0)
}

#[test]
fn test_life_stays_within_bounds() {
    let config = config();
    let mut burst = ParticleField::seeded(config.burst_kind(), &config, 11);
    let mut ambient = ambient_field_with(&config, 12);
    let region = Rect::new(0.0, 0.0, 400.0, 64.0);
    ambient.set_bounds(Some(region));

    burst.spawn_burst(Vec2::new(200.0, 32.0), 24, &[Color::GOLD, Color::CREAM]);

    for _ in 0..600 {
        ambient.spawn_ambient(region);
        burst.advance(DT);
        ambient.advance(DT);

        for p in burst.particles().iter().chain(ambient.particles()) {
            assert!(p.remaining_life() > 0.0);
            assert!(p.remaining_life() <= p.max_life());
        }
    }

    assert!(burst.is_empty(), "a burst drains once spawning stops");
}

#[test]
fn test_advance_past_life_removes() {
    let mut field = burst_field(1);
    field.push(resting(0.3));
    field.push(resting(2.0));

    field.advance(0.3);

    assert_eq!(field.len(), 1);
    assert!((field.particles()[0].max_life() - 2.0).abs() < f32::EPSILON);
}

#[test]
fn test_faded_alpha_tracks_life_and_never_rises() {
    let mut field = burst_field(1);
    field.push(Particle::new(Vec2::ZERO, Vec2::ZERO, Color::GOLD.with_alpha(0.8), 1.0, 2.0));

    let mut last = f32::INFINITY;
    while !field.is_empty() {
        let p = &field.particles()[0];
        let expected = 0.8 * (p.remaining_life() / p.max_life()).clamp(0.0, 1.0);
        let alpha = p.faded_color().a;

        assert!((alpha - expected).abs() < 1e-6);
        assert!(alpha <= last);
        last = alpha;

        field.advance(0.1);
    }
}

#[test]
fn test_burst_render_draw_count() {
    let mut field = burst_field(21);
    let palette = [Color::GOLD, Color::SKY.with_alpha(0.4)];
    field.spawn_burst(Vec2::new(120.0, 80.0), 24, &palette);

    let bright = field.particles().iter().filter(|p| p.color.a > 0.5).count();

    let mut surface = UIRenderer::new();
    let calls = field.render(&mut surface);

    assert_eq!(calls, 24 + bright);
    assert_eq!(surface.circle_count(), 24 + bright);
}

#[test]
fn test_ambient_rate_limited_by_cadence() {
    let mut field = ambient_field_with(&config(), 3);
    let region = Rect::new(0.0, 0.0, 300.0, 64.0);

    assert!(field.spawn_ambient(region));
    field.advance(0.05);
    assert!(!field.spawn_ambient(region));
    assert!(!field.spawn_ambient(region));
    assert_eq!(field.len(), 1);

    field.advance(0.08);
    assert!(field.spawn_ambient(region));
    assert_eq!(field.len(), 2);
}

#[test]
fn test_ambient_ceiling_is_noop() {
    let mut config = config();
    config.ambient.lifetime = Span::new(100.0, 200.0);
    let mut field = ambient_field_with(&config, 4);
    let region = Rect::new(0.0, 0.0, 300.0, 64.0);

    for _ in 0..35 {
        assert!(field.spawn_ambient(region));
        field.advance(0.2);
    }
    assert_eq!(field.len(), 35);

    assert!(!field.spawn_ambient(region));
    assert_eq!(field.len(), 35);
}

#[test]
fn test_drifting_particle_culled_while_alive() {
    let mut field = burst_field(1);
    field.set_bounds(Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
    field.push(Particle::new(Vec2::new(149.0, 25.0), Vec2::new(10.0, 0.0), Color::WHITE, 10.0, 1.0));
    field.push(resting(10.0));

    field.advance(0.2);

    assert_eq!(field.len(), 1);
    assert_eq!(field.stats().escaped, 1);
    assert_eq!(field.stats().expired, 0);
}

#[test]
fn test_margin_edges_are_kept_on_every_side() {
    let mut field = burst_field(1);
    field.set_bounds(Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
    for position in [
        Vec2::new(-50.0, 25.0),
        Vec2::new(150.0, 25.0),
        Vec2::new(50.0, -50.0),
        Vec2::new(50.0, 100.0),
    ] {
        field.push(Particle::new(position, Vec2::ZERO, Color::WHITE, 10.0, 1.0));
    }
    field.push(Particle::new(Vec2::new(150.5, 25.0), Vec2::ZERO, Color::WHITE, 10.0, 1.0));
    field.push(Particle::new(Vec2::new(-50.5, 25.0), Vec2::ZERO, Color::WHITE, 10.0, 1.0));

    field.advance(DT);

    let xs: Vec<f32> = field.particles().iter().map(|p| p.position.x).collect();
    assert_eq!(xs, [-50.0, 150.0, 50.0, 50.0]);
    assert_eq!(field.stats().escaped, 2);
}

#[test]
fn test_single_full_step_removes() {
    let mut field = burst_field(1);
    field.push(resting(1.0));

    field.advance(1.0);

    assert!(field.is_empty());
}

#[test]
fn test_two_half_steps_remove_on_second() {
    let mut field = burst_field(1);
    field.push(resting(1.0));

    field.advance(0.5);
    assert_eq!(field.len(), 1);
    assert!((field.particles()[0].remaining_life() - 0.5).abs() < f32::EPSILON);

    field.advance(0.5);
    assert!(field.is_empty());
}

#[test]
fn test_same_seed_same_particles() {
    let mut a = burst_field(99);
    let mut b = burst_field(99);
    let palette = [Color::GOLD, Color::AMBER, Color::CREAM];

    a.spawn_burst(Vec2::new(10.0, 10.0), 24, &palette);
    b.spawn_burst(Vec2::new(10.0, 10.0), 24, &palette);
    for _ in 0..10 {
        a.advance(DT);
        b.advance(DT);
    }

    assert_eq!(a.particles(), b.particles());
}
