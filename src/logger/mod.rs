//! Front end over a [`Handler`]: builds records at the call site and hands
//! them off. A `Logger` is cheap to clone and derive from, and immutable once
//! built, so it can be passed between threads without locking.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::handler::{ConsoleHandler, Handler, HandlerOptions};
use crate::level::Level;
use crate::record::{Record, Source};
use crate::value::Attr;
use std::fmt;
use std::io;
use std::sync::Arc;

#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
}

impl Logger {
    #[must_use]
    pub fn new(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    #[must_use]
    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Core dispatch. Records below the handler's level are never built.
    /// Write failures are dropped; use [`try_log_record`](Self::try_log_record)
    /// to observe them.
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str, attrs: &[Attr]) {
        if !self.enabled(level) {
            return;
        }
        let record = Record::new(level, msg)
            .with_source(Some(Source::caller()))
            .add_attrs(attrs.iter().cloned());
        let _ = self.handler.handle(&record);
    }

    /// Hands a prebuilt record to the handler, subject to the level check.
    pub fn log_record(&self, record: &Record) {
        let _ = self.try_log_record(record);
    }

    /// Like [`log_record`](Self::log_record) but reports the sink error.
    ///
    /// # Errors
    /// The handler's write error, unchanged.
    pub fn try_log_record(&self, record: &Record) -> io::Result<()> {
        if !self.enabled(record.level) {
            return Ok(());
        }
        self.handler.handle(record)
    }

    #[track_caller]
    pub fn debug(&self, msg: &str, attrs: &[Attr]) {
        self.log(Level::DEBUG, msg, attrs);
    }

    #[track_caller]
    pub fn info(&self, msg: &str, attrs: &[Attr]) {
        self.log(Level::INFO, msg, attrs);
    }

    #[track_caller]
    pub fn warn(&self, msg: &str, attrs: &[Attr]) {
        self.log(Level::WARN, msg, attrs);
    }

    #[track_caller]
    pub fn error(&self, msg: &str, attrs: &[Attr]) {
        self.log(Level::ERROR, msg, attrs);
    }

    /// A logger whose every line also carries `attrs`.
    #[must_use]
    pub fn with(&self, attrs: &[Attr]) -> Self {
        if attrs.is_empty() {
            return self.clone();
        }
        Self::new(self.handler.with_attrs(attrs))
    }

    /// A logger that nests subsequent attributes under `name`.
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        if name.trim().is_empty() {
            return self.clone();
        }
        Self::new(self.handler.with_group(name))
    }
}

/// Stderr, every option at its default.
impl Default for Logger {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleHandler::new(
            io::stderr(),
            HandlerOptions::default(),
        )))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}
