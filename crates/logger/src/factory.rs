use engine::{ConfigurationError, LogLevel, LoggerHandle, LoggingEngine};
use tracing::debug;

use crate::{
    config::LoggerConfig,
    pipeline::{OutputPipeline, engine_config},
};

/// Builds loggers against one [`LoggingEngine`].
///
/// Every call reconfigures the engine; the last call wins for all handles
/// obtained from it.
#[derive(Debug, Clone)]
pub struct LoggerFactory {
    engine: LoggingEngine,
}

impl LoggerFactory {
    pub fn new(engine: LoggingEngine) -> Self {
        Self { engine }
    }

    /// A factory bound to the process-wide engine.
    pub fn global() -> Self {
        Self::new(LoggingEngine::global().clone())
    }

    pub fn engine(&self) -> &LoggingEngine {
        &self.engine
    }

    /// Validates `level_input` (case-insensitive), registers both pipelines at
    /// that level, and returns a logger bound to the selected one.
    pub fn create_logger(&self, level_input: &str) -> Result<LoggerHandle, ConfigurationError> {
        let level: LogLevel = level_input.parse()?;
        self.engine.configure(&engine_config(level))?;

        let pipeline = OutputPipeline::select(level);
        debug!(%level, pipeline = pipeline.name, "logger created");
        Ok(self.engine.get_logger(pipeline.name))
    }

    /// Like [`create_logger`](Self::create_logger), also applying the colour
    /// setting from `config`.
    pub fn create_from_config(
        &self,
        config: &LoggerConfig,
    ) -> Result<LoggerHandle, ConfigurationError> {
        let logger = self.create_logger(&config.level)?;
        self.engine.set_ansi(config.ansi);
        Ok(logger)
    }
}

/// Configures the process-wide engine and returns a logger for `level_input`.
pub fn create_logger(level_input: &str) -> Result<LoggerHandle, ConfigurationError> {
    LoggerFactory::global().create_logger(level_input)
}

/// Returns the process-wide engine to the unconfigured state.
pub fn reset() {
    LoggingEngine::global().reset();
}
