//! Routes records from the `log` facade into a [`Logger`].
//!
//! ```no_run
//! use conslog::{Logger, bridge::LogBridge};
//!
//! LogBridge::init(Logger::builder().build()).expect("logger already set");
//! log::info!(target: "net", "connected");
//! ```

use crate::level::Level;
use crate::logger::Logger;
use crate::record::{Record, Source};
use crate::value::Attr;
use log::{LevelFilter, Metadata, SetLoggerError};

/// `log::Level::Trace` sits one step below `DEBUG`.
pub const TRACE: Level = Level::DEBUG.offset(-4);

#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    #[must_use]
    pub const fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Installs a bridge over `logger` as the global `log` logger and sets
    /// the `log` max level to what the logger's handler lets through.
    ///
    /// # Errors
    /// When a global logger is already installed.
    pub fn init(logger: Logger) -> Result<(), SetLoggerError> {
        let filter = max_level(&logger);
        log::set_boxed_logger(Box::new(Self::new(logger)))?;
        log::set_max_level(filter);
        Ok(())
    }
}

#[must_use]
pub const fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::ERROR,
        log::Level::Warn => Level::WARN,
        log::Level::Info => Level::INFO,
        log::Level::Debug => Level::DEBUG,
        log::Level::Trace => TRACE,
    }
}

fn max_level(logger: &Logger) -> LevelFilter {
    [
        log::Level::Trace,
        log::Level::Debug,
        log::Level::Info,
        log::Level::Warn,
        log::Level::Error,
    ]
    .into_iter()
    .find(|l| logger.enabled(map_level(*l)))
    .map_or(LevelFilter::Off, |l| l.to_level_filter())
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.logger.enabled(map_level(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = map_level(record.level());
        if !self.logger.enabled(level) {
            return;
        }
        let source = match (record.file(), record.line()) {
            (Some(file), Some(line)) => Some(Source::new(file.to_string(), line)),
            _ => None,
        };
        let out = Record::new(level, record.args().to_string())
            .with_source(source)
            .add(Attr::string("target", record.target()));
        self.logger.log_record(&out);
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use log::Log;

    fn bridge(sink: &MemorySink, level: Level) -> LogBridge {
        LogBridge::new(
            Logger::builder()
                .sink(sink.clone())
                .level(level)
                .no_color(true)
                .build(),
        )
    }

    #[test]
    fn trace_maps_below_debug() {
        assert_eq!(map_level(log::Level::Trace).to_string(), "DEBUG-4");
        assert!(map_level(log::Level::Trace) < Level::DEBUG);
    }

    #[test]
    fn forwards_message_and_target() {
        let sink = MemorySink::new();
        let bridge = bridge(&sink, Level::INFO);
        bridge.log(
            &log::Record::builder()
                .level(log::Level::Warn)
                .target("net")
                .args(format_args!("timeout after {}s", 3))
                .build(),
        );
        assert!(sink.contents().ends_with("WRN timeout after 3s target=net\n"));
    }

    #[test]
    fn filters_below_handler_level() {
        let sink = MemorySink::new();
        let bridge = bridge(&sink, Level::WARN);
        let meta = log::Metadata::builder().level(log::Level::Info).build();
        assert!(!bridge.enabled(&meta));
        assert_eq!(max_level(&bridge.logger), LevelFilter::Warn);
    }
}
