//! Plugin configuration.
//!
//! One TOML file with a section per concern. Everything is optional and a
//! missing file means "ship defaults".

use std::path::Path;

use glamour_effects::EffectsConfig;
use serde::{Deserialize, Serialize};

use crate::error::{GlamourError, GlamourResult};
use crate::windows::FeatureEntry;

/// Achievement popup layout and timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    /// Seconds the popup stays up unless dismissed.
    pub display_seconds: f32,
    /// Slide-in duration.
    pub slide_seconds: f32,
    /// Popup width (clamped to the viewport).
    pub width: f32,
    /// Popup height.
    pub height: f32,
    /// Gap between the top of the viewport and the popup.
    pub top_margin: f32,
    /// Icon square side.
    pub icon_size: f32,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            display_seconds: 5.0,
            slide_seconds: 0.35,
            width: 340.0,
            height: 84.0,
            top_margin: 48.0,
            icon_size: 48.0,
        }
    }
}

/// Features banner layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Strip height.
    pub height: f32,
    /// Headline drawn over the particles.
    pub title: String,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            height: 64.0,
            title: "What's new in Glamour".to_owned(),
        }
    }
}

/// Feature guide content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Line height used for the list.
    pub line_height: f32,
    /// Entries shown in the guide, in display order.
    pub entries: Vec<FeatureEntry>,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            line_height: 18.0,
            entries: vec![
                FeatureEntry::new(
                    "Profiles",
                    "Character profiles",
                    "Save appearance, roleplay notes and mod toggles per character.",
                ),
                FeatureEntry::new(
                    "Profiles",
                    "Appearance presets",
                    "Apply a saved look with one click or bind it to a gear set.",
                ),
                FeatureEntry::new(
                    "Roleplay",
                    "Shared profiles",
                    "Let nearby players view your roleplay biography and portrait.",
                ),
                FeatureEntry::new(
                    "Mods",
                    "Mod toggles",
                    "Enable or disable collections of mods together with a profile.",
                ),
                FeatureEntry::new(
                    "Interface",
                    "Icon picker",
                    "Choose a glyph or game icon to label profiles in the list.",
                ),
            ],
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}

/// The whole plugin config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlamourConfig {
    /// Particle tuning.
    pub effects: EffectsConfig,
    /// Achievement popup.
    pub popup: PopupConfig,
    /// Features banner.
    pub banner: BannerConfig,
    /// Feature guide.
    pub guide: GuideConfig,
    /// Logging.
    pub log: LogConfig,
}

impl GlamourConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`GlamourError::Parse`] for malformed TOML, otherwise any
    /// validation error from [`GlamourConfig::validate`].
    pub fn from_toml_str(source: &str) -> GlamourResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read, parsed or validated.
    pub fn load_or_default(path: impl AsRef<Path>) -> GlamourResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let source = std::fs::read_to_string(path).map_err(|source| GlamourError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns [`GlamourError::Effects`] for the effects section and
    /// [`GlamourError::InvalidConfig`] for window sections.
    pub fn validate(&self) -> GlamourResult<()> {
        self.effects.validate()?;

        let positive = [
            ("popup.display_seconds", self.popup.display_seconds),
            ("popup.width", self.popup.width),
            ("popup.height", self.popup.height),
            ("popup.icon_size", self.popup.icon_size),
            ("banner.height", self.banner.height),
            ("guide.line_height", self.guide.line_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GlamourError::InvalidConfig(format!("{name} must be > 0, got {value}")));
            }
        }

        let non_negative = [
            ("popup.slide_seconds", self.popup.slide_seconds),
            ("popup.top_margin", self.popup.top_margin),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(GlamourError::InvalidConfig(format!("{name} must be >= 0, got {value}")));
            }
        }

        Ok(())
    }
}
