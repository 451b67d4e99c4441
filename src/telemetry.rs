//! Structured logging setup.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The fallback filter directive does not parse.
    #[error("invalid log filter directive: {0}")]
    InvalidDirective(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    AlreadyInitialised(String),
}

/// Installs a formatted subscriber writing to stderr.
///
/// The filter is read from `RUST_LOG`; when that is unset or unparsable,
/// `default_directive` (for example `"info"` or `"todos=debug"`) applies.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidDirective`] when the fallback directive
/// is malformed, or [`TelemetryError::AlreadyInitialised`] when called
/// more than once per process.
pub fn init(default_directive: &str) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| TelemetryError::AlreadyInitialised(err.to_string()))
}
