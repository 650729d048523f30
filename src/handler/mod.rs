//! The capability a logging front end needs from a backend: a level check,
//! record output, and cheap derivation of handlers that carry extra context.

mod console;
mod options;

pub use console::ConsoleHandler;
pub use options::HandlerOptions;

use crate::level::Level;
use crate::record::Record;
use crate::value::Attr;
use std::io;
use std::sync::Arc;

/// `Send + Sync` so one handler, and everything derived from it, can be used
/// from any number of threads at once.
pub trait Handler: Send + Sync {
    /// Whether a record at `level` would be written.
    fn enabled(&self, level: Level) -> bool;

    /// Renders and writes one record.
    ///
    /// # Errors
    /// The sink's write error, returned as-is. Nothing is retried.
    fn handle(&self, record: &Record) -> io::Result<()>;

    /// A handler that also renders `attrs` on every line. The receiver is unchanged.
    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler>;

    /// A handler that qualifies subsequent attribute keys with `name`.
    /// The receiver is unchanged.
    fn with_group(&self, name: &str) -> Arc<dyn Handler>;
}

/// Accepts everything and writes nothing; a baseline for benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardHandler;

impl Handler for DiscardHandler {
    fn enabled(&self, _level: Level) -> bool {
        true
    }

    fn handle(&self, _record: &Record) -> io::Result<()> {
        Ok(())
    }

    fn with_attrs(&self, _attrs: &[Attr]) -> Arc<dyn Handler> {
        Arc::new(*self)
    }

    fn with_group(&self, _name: &str) -> Arc<dyn Handler> {
        Arc::new(*self)
    }
}
