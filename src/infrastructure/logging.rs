use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Error)]
#[error("failed to init logging: {0}")]
pub struct LoggingError(String);

/// Install the global subscriber. `RUST_LOG` takes precedence over `default_level`.
pub fn init_logging(default_level: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| LoggingError(e.to_string()))
}
