use super::Logger;
use crate::handler::{ConsoleHandler, HandlerOptions};
use crate::level::Leveler;
use crate::sink::Sink;
use crate::theme::Theme;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Stepwise construction of a console [`Logger`]. Writes to stderr unless a
/// sink is given.
#[derive(Default)]
pub struct LoggerBuilder {
    sink: Option<Arc<dyn Sink>>,
    opts: HandlerOptions,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl Leveler + 'static) -> Self {
        self.opts = self.opts.level(level);
        self
    }

    #[must_use]
    pub const fn add_source(mut self, enabled: bool) -> Self {
        self.opts.add_source = enabled;
        self
    }

    /// Piped output and color-incapable terminals break on ANSI escape codes.
    #[must_use]
    pub const fn no_color(mut self, disabled: bool) -> Self {
        self.opts.no_color = disabled;
        self
    }

    #[must_use]
    pub fn time_format(mut self, layout: impl Into<String>) -> Self {
        self.opts = self.opts.time_format(layout);
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: impl Theme + 'static) -> Self {
        self.opts = self.opts.theme(theme);
        self
    }

    /// Replaces every option set so far.
    #[must_use]
    pub fn options(mut self, opts: HandlerOptions) -> Self {
        self.opts = opts;
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(io::stderr()));
        Logger::new(Arc::new(ConsoleHandler::with_shared_sink(sink, self.opts)))
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("custom_sink", &self.sink.is_some())
            .field("opts", &self.opts)
            .finish()
    }
}
