//! Tracing subscriber setup for standalone tools.
//!
//! Inside the host client the host owns logging; only binaries call this.

use tracing_subscriber::EnvFilter;

use crate::error::{GlamourError, GlamourResult};

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set.
///
/// # Errors
///
/// Returns [`GlamourError::Telemetry`] if the directive is malformed or a
/// global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> GlamourResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| GlamourError::Telemetry(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| GlamourError::Telemetry(e.to_string()))
}
