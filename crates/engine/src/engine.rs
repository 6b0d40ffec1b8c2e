use std::{
    collections::HashMap,
    fmt,
    io::Write,
    sync::{
        Arc, OnceLock,
        atomic::{AtomicBool, Ordering},
    },
};

use level::LogLevel;
use parking_lot::RwLock;
use tracing::debug;
use tracing_subscriber::fmt::{MakeWriter, writer::BoxMakeWriter};

use crate::{
    config::EngineConfig,
    error::ConfigurationError,
    handle::LoggerHandle,
    layout::{Layout, Record, SourceLocation},
};

static GLOBAL: OnceLock<LoggingEngine> = OnceLock::new();

type CategoryMap = HashMap<String, Arc<Category>>;

struct Appender {
    layout: Layout,
}

struct Category {
    name: String,
    threshold: LogLevel,
    capture_call_site: bool,
    appenders: Vec<Arc<Appender>>,
}

struct Inner {
    writer: BoxMakeWriter,
    ansi: AtomicBool,
    /// Swapped as a whole on every configure or reset.
    categories: RwLock<Arc<CategoryMap>>,
}

/// Named appenders and categories writing to a single sink.
///
/// Cloning is cheap and every clone shares the same state. A later
/// [`configure`](Self::configure) swaps in a complete new set of categories,
/// so handles obtained earlier pick up the new thresholds and concurrent
/// callers only ever see one whole configuration.
#[derive(Clone)]
pub struct LoggingEngine {
    inner: Arc<Inner>,
}

impl LoggingEngine {
    /// Creates an unconfigured engine writing to stdout.
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout)
    }

    /// Creates an unconfigured engine writing to `make_writer`.
    pub fn with_writer<W>(make_writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let inner = Inner {
            writer: BoxMakeWriter::new(make_writer),
            ansi: AtomicBool::new(false),
            categories: RwLock::new(Arc::default()),
        };
        Self { inner: Arc::new(inner) }
    }

    /// Returns the process-wide engine, writing to stdout.
    pub fn global() -> &'static LoggingEngine {
        GLOBAL.get_or_init(LoggingEngine::new)
    }

    pub fn with_ansi(self, enabled: bool) -> Self {
        self.set_ansi(enabled);
        self
    }

    /// Toggles colour output for `%[`/`%]` layout markers.
    pub fn set_ansi(&self, enabled: bool) {
        self.inner.ansi.store(enabled, Ordering::Relaxed);
    }

    /// Validates `config` and replaces every category with the ones it
    /// defines. On error the current configuration is left untouched.
    pub fn configure(&self, config: &EngineConfig) -> Result<(), ConfigurationError> {
        let categories: CategoryMap = build_categories(config)?
            .into_iter()
            .map(|category| (category.name.clone(), Arc::new(category)))
            .collect();
        let count = categories.len();

        *self.inner.categories.write() = Arc::new(categories);

        debug!(categories = count, "logging engine configured");
        Ok(())
    }

    /// Returns a handle scoped to `category`. The category does not have to
    /// exist yet; records for a missing category are dropped.
    pub fn get_logger(&self, category: &str) -> LoggerHandle {
        LoggerHandle::new(self.clone(), category)
    }

    /// Returns true once [`configure`](Self::configure) has succeeded and
    /// [`reset`](Self::reset) has not been called since.
    pub fn is_configured(&self) -> bool {
        !self.snapshot().is_empty()
    }

    /// Returns the threshold of `category`, if configured.
    pub fn level(&self, category: &str) -> Option<LogLevel> {
        self.snapshot().get(category).map(|c| c.threshold)
    }

    /// Returns the configured category names, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut names: Vec<String> = self.snapshot().keys().cloned().collect();
        names.sort();
        names
    }

    /// Drops every category, returning the engine to the unconfigured state.
    pub fn reset(&self) {
        *self.inner.categories.write() = Arc::default();
        debug!("logging engine reset");
    }

    pub(crate) fn is_enabled(&self, category: &str, level: LogLevel) -> bool {
        self.snapshot().get(category).is_some_and(|c| level.passes(c.threshold))
    }

    /// The current configuration. The lock is released before returning.
    fn snapshot(&self) -> Arc<CategoryMap> {
        Arc::clone(&self.inner.categories.read())
    }

    /// Renders the record through every appender of `category` and writes
    /// one line per appender. Write failures are ignored.
    pub(crate) fn dispatch(
        &self,
        category: &str,
        level: LogLevel,
        location: Option<SourceLocation>,
        message: fmt::Arguments<'_>,
    ) {
        let Some(category) = self.snapshot().get(category).cloned() else {
            return;
        };
        if !level.passes(category.threshold) {
            return;
        }

        let message = message.to_string();
        let record = Record {
            level,
            category: &category.name,
            location: location.filter(|_| category.capture_call_site),
            message: &message,
        };
        let ansi = self.inner.ansi.load(Ordering::Relaxed);

        let mut line = String::new();
        for appender in &category.appenders {
            line.clear();
            appender.layout.render(&record, ansi, &mut line);
            line.push('\n');
            let _ = self.inner.writer.make_writer().write_all(line.as_bytes());
        }
    }
}

impl Default for LoggingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingEngine")
            .field("categories", &self.categories())
            .field("ansi", &self.inner.ansi.load(Ordering::Relaxed))
            .finish()
    }
}

fn build_categories(config: &EngineConfig) -> Result<Vec<Category>, ConfigurationError> {
    let mut appenders = HashMap::with_capacity(config.appenders.len());
    for appender in &config.appenders {
        let layout = Layout::parse(&appender.pattern).map_err(|source| {
            ConfigurationError::InvalidPattern { appender: appender.name.clone(), source }
        })?;
        appenders.insert(appender.name.as_str(), Arc::new(Appender { layout }));
    }

    if config.categories.is_empty() {
        return Err(ConfigurationError::NoCategories);
    }

    config
        .categories
        .iter()
        .map(|category| {
            if category.appenders.is_empty() {
                return Err(ConfigurationError::NoAppenders { category: category.name.clone() });
            }

            let resolved = category
                .appenders
                .iter()
                .map(|name| {
                    appenders.get(name.as_str()).cloned().ok_or_else(|| {
                        ConfigurationError::UnknownAppender {
                            category: category.name.clone(),
                            appender: name.clone(),
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Category {
                name: category.name.clone(),
                threshold: category.level,
                capture_call_site: category.enable_call_stack,
                appenders: resolved,
            })
        })
        .collect()
}
