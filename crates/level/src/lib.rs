//! Severity levels for the leveled logger.
//!
//! [`LogLevel`] is a closed set of nine labels. `OFF` and `ALL` only make
//! sense as thresholds; the remaining seven are also record severities.

mod error;

use std::{fmt, str::FromStr};

pub use error::LevelError;

/// Severity label controlling which records are written.
///
/// Variants are declared in ascending severity so the derived ordering is the
/// standard one: `ALL < TRACE < DEBUG < INFO < WARN < ERROR < FATAL < MARK < OFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// All log events should be shown (equivalent to `TRACE`).
    ALL = 0,
    /// Finer-grained informational events than `DEBUG`.
    TRACE = 1,
    /// Fine-grained informational events most useful when debugging.
    DEBUG = 2,
    /// Informational messages highlighting coarse-grained progress.
    INFO = 3,
    /// Potentially harmful situations.
    WARN = 4,
    /// Error events that might still allow the application to continue.
    ERROR = 5,
    /// Very severe error events that will presumably abort the application.
    FATAL = 6,
    /// An event that will almost always be logged.
    MARK = 7,
    /// No log messages should be shown.
    OFF = 8,
}

impl LogLevel {
    /// Every level, in ascending severity.
    pub const VALUES: [LogLevel; 9] = [
        LogLevel::ALL,
        LogLevel::TRACE,
        LogLevel::DEBUG,
        LogLevel::INFO,
        LogLevel::WARN,
        LogLevel::ERROR,
        LogLevel::FATAL,
        LogLevel::MARK,
        LogLevel::OFF,
    ];

    /// Returns the canonical upper-case label.
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::ALL => "ALL",
            LogLevel::TRACE => "TRACE",
            LogLevel::DEBUG => "DEBUG",
            LogLevel::INFO => "INFO",
            LogLevel::WARN => "WARN",
            LogLevel::ERROR => "ERROR",
            LogLevel::FATAL => "FATAL",
            LogLevel::MARK => "MARK",
            LogLevel::OFF => "OFF",
        }
    }

    /// Whether a record may carry this level. `OFF` and `ALL` are thresholds only.
    pub const fn is_severity(self) -> bool {
        !matches!(self, LogLevel::ALL | LogLevel::OFF)
    }

    /// Returns true if a record at `self` passes the given threshold.
    pub fn passes(self, threshold: LogLevel) -> bool {
        self.is_severity() && self >= threshold
    }

    /// Levels that route to the location-annotated layout.
    pub const fn wants_source_location(self) -> bool {
        matches!(self, LogLevel::TRACE | LogLevel::ALL)
    }
}

impl FromStr for LogLevel {
    type Err = LevelError;

    /// Parses a level name case-insensitively. Surrounding whitespace is not
    /// trimmed; `"info "` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        LogLevel::VALUES
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or(LevelError::Unacceptable(normalized))
    }
}

impl From<tracing::Level> for LogLevel {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => LogLevel::TRACE,
            tracing::Level::DEBUG => LogLevel::DEBUG,
            tracing::Level::INFO => LogLevel::INFO,
            tracing::Level::WARN => LogLevel::WARN,
            tracing::Level::ERROR => LogLevel::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    /// Honors width and alignment flags, so `{:<5}` pads `INFO` to `INFO `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_label_in_any_case() {
        for level in LogLevel::VALUES {
            let lower = level.as_str().to_lowercase();
            assert_eq!(lower.parse::<LogLevel>().unwrap(), level);
            assert_eq!(level.as_str().parse::<LogLevel>().unwrap(), level);
        }
        assert_eq!("wArN".parse::<LogLevel>().unwrap(), LogLevel::WARN);
    }

    #[test]
    fn parse_rejects_unknown_with_normalized_value() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert_eq!(err, LevelError::Unacceptable("VERBOSE".to_string()));
        assert!(err.to_string().contains("'VERBOSE'"));
    }

    #[test]
    fn parse_rejects_empty_and_padded() {
        assert!(matches!("".parse::<LogLevel>(), Err(LevelError::Unacceptable(v)) if v.is_empty()));
        assert!(matches!("info ".parse::<LogLevel>(), Err(LevelError::Unacceptable(v)) if v == "INFO "));
    }

    #[test]
    fn ordering_is_standard_severity() {
        assert!(LogLevel::ALL < LogLevel::TRACE);
        assert!(LogLevel::TRACE < LogLevel::DEBUG);
        assert!(LogLevel::WARN < LogLevel::ERROR);
        assert!(LogLevel::FATAL < LogLevel::MARK);
        assert!(LogLevel::MARK < LogLevel::OFF);
    }

    #[test]
    fn warn_threshold_gates_lower_severities() {
        let threshold = LogLevel::WARN;
        assert!(!LogLevel::DEBUG.passes(threshold));
        assert!(!LogLevel::INFO.passes(threshold));
        assert!(LogLevel::WARN.passes(threshold));
        assert!(LogLevel::ERROR.passes(threshold));
        assert!(LogLevel::FATAL.passes(threshold));
    }

    #[test]
    fn off_suppresses_and_all_shows_everything() {
        for level in LogLevel::VALUES.into_iter().filter(|l| l.is_severity()) {
            assert!(!level.passes(LogLevel::OFF));
            assert!(level.passes(LogLevel::ALL));
            assert!(level.passes(LogLevel::TRACE));
        }
        assert!(!LogLevel::OFF.passes(LogLevel::ALL));
        assert!(!LogLevel::ALL.passes(LogLevel::ALL));
    }

    #[test]
    fn display_pads_like_a_str() {
        assert_eq!(format!("{:<5}", LogLevel::INFO), "INFO ");
        assert_eq!(format!("{:<5}", LogLevel::ERROR), "ERROR");
        assert_eq!(format!("{}", LogLevel::MARK), "MARK");
    }

    #[test]
    fn tracing_levels_map_one_to_one() {
        assert_eq!(LogLevel::from(tracing::Level::TRACE), LogLevel::TRACE);
        assert_eq!(LogLevel::from(tracing::Level::ERROR), LogLevel::ERROR);
    }
}
