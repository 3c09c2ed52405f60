//! # Glamour
//!
//! Windows of the character-profile companion plugin that carry particle
//! effects, plus the plugin-level config and logging setup.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         HOST CLIENT                           │
//! │   draw callback ─┬─> AchievementPopup ──> ParticleField(burst)│
//! │                  └─> FeatureGuide                              │
//! │                        └─> FeaturesBanner ──> ParticleField(ambient)
//! │                                   │                            │
//! │                                   v                            │
//! │                            DrawSurface (host draw list)        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each window owns its field exclusively. Fields are cleared whenever their
//! window (re)opens and are simply not stepped while it is hidden.
//!
//! ## Modules
//!
//! - `config`: plugin TOML file (effects, popup, banner, guide, log)
//! - `error`: plugin error types
//! - `telemetry`: tracing subscriber setup
//! - `windows`: the effect-owning windows

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod telemetry;
pub mod windows;

pub use glamour_effects as effects;
pub use glamour_ui as ui;

pub use config::{BannerConfig, GlamourConfig, GuideConfig, LogConfig, PopupConfig};
pub use error::{GlamourError, GlamourResult};
pub use windows::{Achievement, AchievementPopup, CloseReason, FeatureEntry, FeatureGuide, FeaturesBanner};
