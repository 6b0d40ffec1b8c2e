mod log;

use anyhow::Result;
use log::Logging;
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    let logger = Logging::new().early_init()?;

    logger.mark("demo starting");
    if let Some(level) = logger.level() {
        logger.info(format_args!("threshold {level}, pipeline {}", logger.category()));
    }

    logger.trace("entering main loop");
    logger.debug("loaded 3 entries");
    logger.warn("cache is cold");
    logger.error("upstream returned 503");

    info!(pid = std::process::id(), "events from tracing share the same output");
    debug!("only visible at DEBUG and below");
    warn!(retries = 2, "retrying upstream");

    logger.fatal("demo finished");
    Ok(())
}
