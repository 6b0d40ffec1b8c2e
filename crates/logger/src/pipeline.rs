use engine::{AppenderConfig, CategoryConfig, EngineConfig, LogLevel};

/// A named output layout the factory can bind a logger to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputPipeline {
    pub name: &'static str,
    pub layout_pattern: &'static str,
    pub include_source_location: bool,
}

impl OutputPipeline {
    /// `[LEVEL] message`
    pub const PLAIN: Self =
        Self { name: "plain", layout_pattern: "%[[%-5p]%] %m", include_source_location: false };

    /// `[LEVEL file:line]\tmessage`
    pub const TRACE: Self = Self {
        name: "trace",
        layout_pattern: "%[[%-5p %f:%-3l]%]\t%m",
        include_source_location: true,
    };

    pub const ALL: [Self; 2] = [Self::PLAIN, Self::TRACE];

    /// `TRACE` and `ALL` get file and line annotations; everything else is plain.
    pub fn select(level: LogLevel) -> Self {
        if level.wants_source_location() { Self::TRACE } else { Self::PLAIN }
    }

    fn appender(&self) -> AppenderConfig {
        AppenderConfig::new(self.name, self.layout_pattern)
    }

    fn category(&self, level: LogLevel) -> CategoryConfig {
        CategoryConfig::new(self.name, level)
            .appender(self.name)
            .call_stack(self.include_source_location)
    }
}

/// Registers every pipeline, each at `level`, regardless of which one will
/// be selected.
pub(crate) fn engine_config(level: LogLevel) -> EngineConfig {
    OutputPipeline::ALL
        .iter()
        .fold(EngineConfig::new(), |config, pipeline| {
            config.appender(pipeline.appender()).category(pipeline.category(level))
        })
}
