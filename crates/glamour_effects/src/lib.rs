//! # Glamour Effects
//!
//! Short-lived decorative particles for the plugin's windows.
//!
//! Two owners use the same simulator with different spawn strategies:
//!
//! - **Burst**: the achievement popup fires 24 particles radially from the
//!   icon the moment it opens.
//! - **Ambient**: the features banner trickles single particles up through
//!   its strip, at most one every 0.12 s and never more than 35 alive.
//!
//! ```text
//! owner frame:  spawn_* ──> advance(dt) ──> render(surface)
//!                  │            │                 │
//!              append       integrate,        fade by life,
//!                           age, cull         glow if bright
//! ```
//!
//! Nothing here can fail. Bad input (empty palettes, degenerate regions,
//! negative or NaN deltas) is ignored or clamped: this is best-effort
//! visual state. Only configuration loading returns errors.
//!
//! ## Example
//!
//! ```rust
//! use glamour_effects::{EffectsConfig, ParticleField};
//! use glamour_ui::{Color, UIRenderer, Vec2};
//!
//! let config = EffectsConfig::default();
//! let mut field = ParticleField::seeded(config.burst_kind(), &config, 7);
//! field.spawn_burst(Vec2::new(100.0, 40.0), 24, &[Color::GOLD, Color::WHITE]);
//!
//! let mut surface = UIRenderer::new();
//! field.advance(config.timestep.resolve(0.0));
//! field.render(&mut surface);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod emitter;
pub mod error;
pub mod field;
pub mod particle;
pub mod timestep;

pub use config::EffectsConfig;
pub use emitter::{AmbientParams, BurstParams, EmitterKind, GlowParams, Span};
pub use error::{EffectsError, EffectsResult};
pub use field::{ParticleField, ParticleStats, MAX_PARTICLES};
pub use particle::Particle;
pub use timestep::Timestep;
