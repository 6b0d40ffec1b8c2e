use level::LogLevel;

/// A named output destination with its own layout pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppenderConfig {
    pub name: String,
    pub pattern: String,
}

impl AppenderConfig {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self { name: name.into(), pattern: pattern.into() }
    }
}

/// A named group of appenders sharing one severity threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    pub name: String,
    pub appenders: Vec<String>,
    pub level: LogLevel,
    /// Attach the caller's file and line to every record.
    pub enable_call_stack: bool,
}

impl CategoryConfig {
    pub fn new(name: impl Into<String>, level: LogLevel) -> Self {
        Self { name: name.into(), appenders: Vec::new(), level, enable_call_stack: false }
    }

    pub fn appender(mut self, name: impl Into<String>) -> Self {
        self.appenders.push(name.into());
        self
    }

    pub fn call_stack(mut self, enabled: bool) -> Self {
        self.enable_call_stack = enabled;
        self
    }
}

/// Full engine configuration, applied in one step by
/// [`LoggingEngine::configure`](crate::LoggingEngine::configure).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub appenders: Vec<AppenderConfig>,
    pub categories: Vec<CategoryConfig>,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appender(mut self, appender: AppenderConfig) -> Self {
        self.appenders.push(appender);
        self
    }

    pub fn category(mut self, category: CategoryConfig) -> Self {
        self.categories.push(category);
        self
    }
}
