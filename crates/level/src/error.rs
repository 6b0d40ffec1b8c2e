/// Error returned when a string does not name a [`LogLevel`](crate::LogLevel).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    /// Carries the rejected value after upper-case normalization.
    #[error("The log level '{0}' specified in config is not an acceptable log level.")]
    Unacceptable(String),
}
