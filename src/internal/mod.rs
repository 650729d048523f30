//! The crate's own diagnostic logger, used to report config and option
//! problems through the same formatting pipeline it implements.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if
//! multiple entry points race to call `init`.

use crate::handler::{ConsoleHandler, HandlerOptions};
use crate::level::Level;
use crate::logger::Logger;
use crate::value::Attr;
use std::io;
use std::sync::{Arc, OnceLock};

/// Overrides the internal logger's minimum level, e.g. `CONSLOG_INTERNAL_LEVEL=debug`.
pub const LEVEL_ENV: &str = "CONSLOG_INTERNAL_LEVEL";

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs the stderr logger at the level named by [`LEVEL_ENV`], `WARN` when unset or invalid.
///
/// Only the first call takes effect; later calls are no-ops.
pub fn init() {
    let level = std::env::var(LEVEL_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Level::WARN);
    init_with_level(level);
}

/// Installs the stderr logger at an explicit level.
pub fn init_with_level(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| {
        let handler = ConsoleHandler::new(io::stderr(), HandlerOptions::new().level(level));
        Logger::new(Arc::new(handler))
    });
    if !was_init {
        debug("INTERNAL", &format!("Internal logger ready at {level}"));
    }
}

/// Whether [`init`] has run.
#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

/// Pre-init calls silently vanish rather than crashing.
fn log(level: Level, component: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level, msg, &[Attr::string("component", component)]);
    }
}

pub fn debug(component: &str, msg: &str) {
    log(Level::DEBUG, component, msg);
}

pub fn info(component: &str, msg: &str) {
    log(Level::INFO, component, msg);
}

pub fn warn(component: &str, msg: &str) {
    log(Level::WARN, component, msg);
}

pub fn error(component: &str, msg: &str) {
    log(Level::ERROR, component, msg);
}
