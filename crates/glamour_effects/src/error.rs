//! # Effects Error Types
//!
//! The simulator itself never fails; these cover loading its tuning file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating effect configuration.
#[derive(Error, Debug)]
pub enum EffectsError {
    /// The config file could not be read.
    #[error("failed to read effects config {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse effects config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is outside its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for effects configuration.
pub type EffectsResult<T> = Result<T, EffectsError>;
