use std::env;

/// Environment variable holding the requested log level.
pub const LEVEL_ENV: &str = "LOG_LEVEL";
/// Environment variable enabling coloured level sections.
pub const ANSI_ENV: &str = "LOG_ANSI";

const DEFAULT_LEVEL: &str = "info";

/// Logger settings as read from the environment.
///
/// The level is kept as the raw string; it is validated when the logger is
/// created, so a misspelled `LOG_LEVEL` still fails fast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level: String,
    pub ansi: bool,
}

impl LoggerConfig {
    pub fn new(level: impl Into<String>) -> Self {
        Self { level: level.into(), ansi: false }
    }

    /// Reads `LOG_LEVEL` (defaults to `info` when unset) and `LOG_ANSI`
    /// (`1`, `true` or `yes` enable colour).
    pub fn from_env() -> Self {
        let level = env::var(LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LEVEL.to_owned());
        let ansi = env::var(ANSI_ENV).is_ok_and(|value| {
            matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
        });
        Self { level, ansi }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL)
    }
}
