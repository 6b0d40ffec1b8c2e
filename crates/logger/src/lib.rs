//! Leveled logger factory.
//!
//! [`create_logger`] turns a level name from application configuration into
//! a ready-to-use [`LoggerHandle`]:
//!
//! - the name is matched case-insensitively against the nine [`LogLevel`]s,
//!   and anything else is a [`ConfigurationError`];
//! - `TRACE` and `ALL` get the location-annotated [`OutputPipeline::TRACE`]
//!   layout, every other level the [`OutputPipeline::PLAIN`] one.
//!
//! ```no_run
//! let logger = logger::create_logger("debug")?;
//! logger.info("service started");
//! # Ok::<(), logger::ConfigurationError>(())
//! ```

pub mod config;
mod factory;
mod pipeline;

pub use config::LoggerConfig;
pub use engine::{ConfigurationError, LogLevel, LoggerHandle, LoggingEngine, PipelineLayer};
pub use factory::{LoggerFactory, create_logger, reset};
pub use pipeline::OutputPipeline;
