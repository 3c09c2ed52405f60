//! # Plugin Error Types

use std::path::PathBuf;

use glamour_effects::EffectsError;
use thiserror::Error;

/// Errors raised by plugin setup.
#[derive(Error, Debug)]
pub enum GlamourError {
    /// The config file exists but could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The `[effects]` section is out of range.
    #[error(transparent)]
    Effects(#[from] EffectsError),

    /// A window section is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Telemetry(String),
}

/// Result type for plugin setup.
pub type GlamourResult<T> = Result<T, GlamourError>;
