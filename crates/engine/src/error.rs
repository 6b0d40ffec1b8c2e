use level::LevelError;

/// Error returned when an engine configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    InvalidLevel(#[from] LevelError),

    #[error("appender '{appender}' has an invalid layout pattern: {source}")]
    InvalidPattern { appender: String, source: LayoutError },

    #[error("category '{category}' refers to unknown appender '{appender}'")]
    UnknownAppender { category: String, appender: String },

    #[error("category '{category}' must list at least one appender")]
    NoAppenders { category: String },

    #[error("configuration must define at least one category")]
    NoCategories,
}

/// Error produced when parsing a layout pattern fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("unknown conversion '%{token}' at offset {offset}")]
    UnknownToken { token: char, offset: usize },

    #[error("pattern ends with a dangling '%'")]
    DanglingPercent,

    #[error("invalid format spec at offset {offset}")]
    InvalidFormatSpec { offset: usize },
}
