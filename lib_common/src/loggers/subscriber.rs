//! # Tracing Subscriber Setup
//!
//! Installs the process-wide `tracing` subscriber used by binaries built on
//! `lib_common`. Output goes to stderr so stdout stays free for program
//! output.

use thiserror::Error;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, filter::ParseError, fmt, layer::SubscriberExt};

#[derive(Debug, Error)]
/// # Logger Error
///
/// Errors raised while installing the global subscriber.
pub enum LoggerError {
    /// The log level or filter directive could not be parsed.
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Builds an `EnvFilter` from a level or directive string such as `"info"`
/// or `"lib_common=debug,warn"`.
pub fn level_filter(log_level: &str) -> Result<EnvFilter, LoggerError> {
    Ok(EnvFilter::try_new(log_level)?)
}

/// # Init Tracing
///
/// Installs a `tracing_subscriber` registry with an `EnvFilter` and a console
/// layer. `RUST_LOG` takes precedence over `log_level` when it is set and
/// valid.
///
/// # Arguments
/// * `log_level` - Fallback filter directive (e.g. `"warn"`).
/// * `json` - Emit one JSON object per event instead of human-readable lines.
///
/// # Errors
/// Returns [`LoggerError::InvalidFilter`] for an unparsable `log_level` and
/// [`LoggerError::AlreadyInitialized`] if called twice in one process.
pub fn init_tracing(log_level: &str, json: bool) -> Result<(), LoggerError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(log_level)?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()?;
    }

    tracing::debug!(log_level, json, "Logging initialized");
    Ok(())
}
