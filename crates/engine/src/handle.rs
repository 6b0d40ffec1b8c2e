use std::{fmt, panic::Location, sync::Arc};

use level::LogLevel;

use crate::{engine::LoggingEngine, layout::SourceLocation};

/// A logger scoped to one category of one [`LoggingEngine`].
///
/// The category is resolved on every call, so the threshold in effect is
/// always the one from the engine's latest configuration.
#[derive(Debug, Clone)]
pub struct LoggerHandle {
    engine: LoggingEngine,
    category: Arc<str>,
}

impl LoggerHandle {
    pub(crate) fn new(engine: LoggingEngine, category: &str) -> Self {
        Self { engine, category: Arc::from(category) }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Current threshold of the bound category.
    pub fn level(&self) -> Option<LogLevel> {
        self.engine.level(&self.category)
    }

    /// Returns true if a record at `level` would be written.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.engine.is_enabled(&self.category, level)
    }

    /// Emits `message` at `level`. `OFF` and `ALL` are never written.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        let location = SourceLocation::from(Location::caller());
        self.engine.dispatch(&self.category, level, Some(location), format_args!("{message}"));
    }

    /// Emits a pre-located record. Used by bridges that already know the
    /// originating call site.
    pub fn log_at(
        &self,
        level: LogLevel,
        location: Option<SourceLocation>,
        message: fmt::Arguments<'_>,
    ) {
        self.engine.dispatch(&self.category, level, location, message);
    }

    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(LogLevel::TRACE, message);
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::DEBUG, message);
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::INFO, message);
    }

    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::WARN, message);
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::ERROR, message);
    }

    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.log(LogLevel::FATAL, message);
    }

    #[track_caller]
    pub fn mark(&self, message: impl fmt::Display) {
        self.log(LogLevel::MARK, message);
    }
}
