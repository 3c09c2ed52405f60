//! Effect tuning loaded from TOML.
//!
//! Every key is optional; a missing section falls back to the shipped
//! values. Values are validated once at load time so the simulator never
//! has to second-guess its parameters.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::emitter::{AmbientParams, BurstParams, EmitterKind, GlowParams};
use crate::error::{EffectsError, EffectsResult};
use crate::timestep::Timestep;

/// All effect parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Fixed RNG seed. Unset means a fresh seed per field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Distance outside the owner's bounds a particle may drift before it is culled.
    pub cull_margin: f32,
    /// Frame delta policy.
    pub timestep: Timestep,
    /// Burst spawn parameters.
    pub burst: BurstParams,
    /// Ambient spawn parameters.
    pub ambient: AmbientParams,
    /// Glow pass parameters.
    pub glow: GlowParams,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            seed: None,
            cull_margin: 50.0,
            timestep: Timestep::default(),
            burst: BurstParams::default(),
            ambient: AmbientParams::default(),
            glow: GlowParams::default(),
        }
    }
}

impl EffectsConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`EffectsError::Parse`] for malformed TOML and
    /// [`EffectsError::InvalidConfig`] for out-of-range values.
    pub fn from_toml_str(source: &str) -> EffectsResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`EffectsError::Io`] if the file can't be read, otherwise as
    /// [`EffectsConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> EffectsResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| EffectsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`EffectsError::InvalidConfig`] naming the first bad key.
    pub fn validate(&self) -> EffectsResult<()> {
        if !self.cull_margin.is_finite() || self.cull_margin < 0.0 {
            return Err(EffectsError::InvalidConfig(format!(
                "cull_margin must be >= 0, got {}",
                self.cull_margin
            )));
        }
        self.timestep
            .validate()
            .and_then(|()| self.burst.validate())
            .and_then(|()| self.ambient.validate())
            .and_then(|()| self.glow.validate())
            .map_err(EffectsError::InvalidConfig)
    }

    /// Burst strategy with these parameters.
    #[must_use]
    pub fn burst_kind(&self) -> EmitterKind {
        EmitterKind::Burst(self.burst.clone())
    }

    /// Ambient strategy with these parameters.
    #[must_use]
    pub fn ambient_kind(&self) -> EmitterKind {
        EmitterKind::Ambient(self.ambient.clone())
    }

    /// The configured seed, or one derived from the wall clock.
    #[must_use]
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0x5EED, |elapsed| {
                    // Low bits change fastest; fold the high ones in anyway
                    let nanos = elapsed.as_nanos();
                    #[allow(clippy::cast_possible_truncation)]
                    let folded = (nanos ^ (nanos >> 64)) as u64;
                    folded
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::Span;

    #[test]
    fn test_empty_document_is_default() {
        let config = EffectsConfig::from_toml_str("").unwrap();
        assert_eq!(config, EffectsConfig::default());
    }

    #[test]
    fn test_defaults_round_trip() {
        let text = toml::to_string(&EffectsConfig::default()).unwrap();
        let parsed = EffectsConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, EffectsConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = EffectsConfig::from_toml_str(
            r#"
            seed = 42
            cull_margin = 20.0

            [timestep]
            mode = "measured"

            [burst]
            count = 12
            speed = { min = 10.0, max = 20.0 }

            [ambient]
            ceiling = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert!((config.cull_margin - 20.0).abs() < f32::EPSILON);
        assert_eq!(config.timestep, Timestep::measured());
        assert_eq!(config.burst.count, 12);
        assert_eq!(config.burst.speed, Span::new(10.0, 20.0));
        assert_eq!(config.burst.lifetime, BurstParams::default().lifetime);
        assert_eq!(config.ambient.ceiling, 10);
        assert!((config.ambient.cadence - 0.12).abs() < f32::EPSILON);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = EffectsConfig::from_toml_str(
            r"
            [ambient]
            lifetime = { min = 6.0, max = 3.0 }
            ",
        )
        .unwrap_err();
        assert!(matches!(err, EffectsError::InvalidConfig(ref msg) if msg.contains("ambient.lifetime")));
    }

    #[test]
    fn test_negative_margin_rejected() {
        let err = EffectsConfig::from_toml_str("cull_margin = -1.0").unwrap_err();
        assert!(matches!(err, EffectsError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = EffectsConfig::from_toml_str("cull_margin = [").unwrap_err();
        assert!(matches!(err, EffectsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("glamour_effects_missing_config.toml");
        let err = EffectsConfig::load(&path).unwrap_err();
        assert!(matches!(err, EffectsError::Io { .. }));
        assert!(err.to_string().contains("glamour_effects_missing_config.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let id = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        let path = std::env::temp_dir().join(format!("glamour_effects_{id}.toml"));
        std::fs::write(&path, "[glow]\nthreshold = 0.7\n").unwrap();

        let config = EffectsConfig::load(&path).unwrap();
        assert!((config.glow.threshold - 0.7).abs() < f32::EPSILON);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_fixed_seed_is_used() {
        let config = EffectsConfig {
            seed: Some(9),
            ..EffectsConfig::default()
        };
        assert_eq!(config.resolved_seed(), 9);
    }
}
