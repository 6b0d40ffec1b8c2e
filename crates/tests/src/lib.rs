//! Fixtures for the workspace integration tests.

use logger::{LoggerFactory, LoggingEngine};
use test_util::CapturedOutput;

/// A factory over a private engine whose output is captured in memory.
pub fn capturing_factory() -> (LoggerFactory, CapturedOutput) {
    let output = CapturedOutput::new();
    let factory = LoggerFactory::new(LoggingEngine::with_writer(output.clone()));
    (factory, output)
}
