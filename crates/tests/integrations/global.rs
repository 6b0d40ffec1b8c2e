use logger::{LogLevel, LoggingEngine, create_logger, reset};
use serial_test::serial;

#[test]
#[serial]
fn global_engine_starts_unconfigured_after_reset() {
    reset();
    assert!(!LoggingEngine::global().is_configured());
}

#[test]
#[serial]
fn global_create_logger_is_last_call_wins() {
    reset();
    let first = create_logger("info").unwrap();
    let second = create_logger("error").unwrap();

    assert_eq!(first.category(), second.category());
    assert_eq!(first.level(), Some(LogLevel::ERROR));
    assert!(!first.is_enabled(LogLevel::WARN));
    assert!(first.is_enabled(LogLevel::FATAL));
    reset();
}

#[test]
#[serial]
fn global_invalid_level_does_not_configure() {
    reset();
    assert!(create_logger("loud").is_err());
    assert!(!LoggingEngine::global().is_configured());
}
