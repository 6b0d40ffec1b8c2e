use anyhow::Result;
use logger::{LoggerConfig, LoggerFactory, LoggerHandle, PipelineLayer};
use tracing_subscriber::{EnvFilter, prelude::*};

const DEFAULT_FILTER: &str = "trace";

/// Logging configuration and initialization.
pub struct Logging {
    config: LoggerConfig,
}

impl Logging {
    pub fn new() -> Self {
        Self { config: LoggerConfig::from_env() }
    }

    /// Builds the application logger from `LOG_LEVEL` and `LOG_ANSI`, then
    /// routes `tracing` events through it.
    /// `RUST_LOG` narrows which targets reach the logger; if unset or invalid,
    /// every target does. The logger's own threshold applies either way.
    pub fn early_init(self) -> Result<LoggerHandle> {
        let logger = LoggerFactory::global().create_from_config(&self.config)?;
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::registry()
            .with(PipelineLayer::new(logger.clone()))
            .with(filter)
            .try_init()?;
        Ok(logger)
    }
}
