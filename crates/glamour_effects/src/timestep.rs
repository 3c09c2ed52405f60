//! Frame delta policy.
//!
//! The plugin historically stepped effects by a hardcoded 1/60 s per drawn
//! frame regardless of real frame time. `Fixed` keeps that behaviour;
//! `Measured` uses the host's frame delta instead.

use serde::{Deserialize, Serialize};

/// How the owner turns a drawn frame into a simulation delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Timestep {
    /// Every frame advances by the same amount.
    Fixed {
        /// Seconds per frame.
        #[serde(default = "Timestep::default_dt")]
        dt: f32,
    },
    /// Every frame advances by the measured frame time, clamped.
    Measured {
        /// Upper bound so a hitch (alt-tab, loading screen) doesn't teleport particles.
        #[serde(default = "Timestep::default_max_dt")]
        max_dt: f32,
    },
}

impl Timestep {
    /// The logical frame rate the effects were tuned at.
    pub const SOURCE_DT: f32 = 1.0 / 60.0;

    /// Default clamp for measured deltas.
    pub const DEFAULT_MAX_DT: f32 = 0.1;

    fn default_dt() -> f32 {
        Self::SOURCE_DT
    }

    fn default_max_dt() -> f32 {
        Self::DEFAULT_MAX_DT
    }

    /// Measured timestep with the default clamp.
    #[must_use]
    pub const fn measured() -> Self {
        Self::Measured {
            max_dt: Self::DEFAULT_MAX_DT,
        }
    }

    /// Returns the delta to feed `advance` for a frame that took `measured` seconds.
    #[must_use]
    pub fn resolve(&self, measured: f32) -> f32 {
        match *self {
            Self::Fixed { dt } => dt,
            Self::Measured { max_dt } => {
                if measured.is_finite() {
                    measured.clamp(0.0, max_dt)
                } else {
                    0.0
                }
            }
        }
    }

    /// Checks the policy is usable.
    pub(crate) fn validate(&self) -> Result<(), String> {
        let (name, value) = match *self {
            Self::Fixed { dt } => ("timestep.dt", dt),
            Self::Measured { max_dt } => ("timestep.max_dt", max_dt),
        };
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(format!("{name} must be a positive number, got {value}"))
        }
    }
}

impl Default for Timestep {
    fn default() -> Self {
        Self::Fixed {
            dt: Self::SOURCE_DT,
        }
    }
}
