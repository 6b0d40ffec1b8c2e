//! Bridge from `tracing` events into a [`LoggerHandle`].

use std::fmt::{self, Write};

use level::LogLevel;
use tracing::{
    Event, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{Layer, layer::Context};

use crate::{handle::LoggerHandle, layout::SourceLocation};

const MESSAGE_FIELD: &str = "message";

/// A [`Layer`] that renders `tracing` events through a logger's pipeline.
///
/// The event's file and line come from its callsite metadata. Fields other
/// than `message` are appended as ` key=value`.
#[derive(Debug, Clone)]
pub struct PipelineLayer {
    logger: LoggerHandle,
}

impl PipelineLayer {
    pub fn new(logger: LoggerHandle) -> Self {
        Self { logger }
    }
}

impl<S: Subscriber> Layer<S> for PipelineLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = LogLevel::from(*metadata.level());
        if !self.logger.is_enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let location =
            metadata.file().zip(metadata.line()).map(|(file, line)| SourceLocation { file, line });
        self.logger.log_at(level, location, format_args!("{}", visitor.finish()));
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(mut self) -> String {
        if self.message.is_empty() {
            return self.fields.trim_start().to_owned();
        }
        self.message.push_str(&self.fields);
        self.message
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == MESSAGE_FIELD {
            self.message.push_str(value);
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == MESSAGE_FIELD {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}
