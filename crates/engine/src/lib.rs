//! Logging engine
//!
//! Named appenders render records with a pattern [`Layout`]; named categories
//! group appenders under one severity threshold. A [`LoggerHandle`] emits into
//! one category, and [`PipelineLayer`] forwards `tracing` events to a handle.
//!
//! All appenders of an engine share a single sink (stdout unless a custom
//! [`MakeWriter`](tracing_subscriber::fmt::MakeWriter) is supplied).

pub mod config;
mod engine;
pub mod error;
mod handle;
pub mod layer;
pub mod layout;

pub use config::{AppenderConfig, CategoryConfig, EngineConfig};
pub use engine::LoggingEngine;
pub use error::{ConfigurationError, LayoutError};
pub use handle::LoggerHandle;
pub use layer::PipelineLayer;
pub use layout::{Layout, Record, SourceLocation};
pub use level::{LevelError, LogLevel};
