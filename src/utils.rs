use anyhow::{Error, Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, LogFormat};

/// Installs the global `tracing` subscriber. `RUST_LOG` wins over the
/// configured level when set.
pub fn init_tracing(config: &Config) -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| anyhow!("Invalid log level '{}': {}", config.log_level, e))?;

    let builder = fmt().with_env_filter(filter).with_target(false);

    match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    }
    .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(())
}
