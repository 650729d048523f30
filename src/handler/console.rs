use super::{Handler, HandlerOptions};
use crate::buffer::{Buffer, BufferPool, TimeFormat};
use crate::encoder::{self, Encoder};
use crate::internal;
use crate::level::{Level, Leveler};
use crate::record::Record;
use crate::sink::Sink;
use crate::theme::{Theme, ThemeDef};
use crate::value::Attr;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Colorized, human-oriented line handler.
///
/// A `ConsoleHandler` is an immutable snapshot. [`with_attrs`](Self::with_attrs)
/// and [`with_group`](Self::with_group) return new snapshots and never touch the
/// receiver, so a handler can be shared freely between threads and derived from
/// at any time.
///
/// # Example
///
/// ```
/// use conslog::{Attr, ConsoleHandler, Handler, HandlerOptions, Level, MemorySink, Record};
///
/// let sink = MemorySink::new();
/// let handler = ConsoleHandler::new(sink.clone(), HandlerOptions::new().no_color(true));
///
/// let record = Record::new(Level::INFO, "listening")
///     .with_time(None)
///     .add(Attr::int("port", 8080));
/// handler.handle(&record).unwrap();
///
/// assert_eq!(sink.contents(), "INF listening port=8080\n");
/// ```
#[derive(Clone)]
pub struct ConsoleHandler {
    sink: Arc<dyn Sink>,
    level: Arc<dyn Leveler>,
    add_source: bool,
    encoder: Arc<Encoder>,
    group: String,
    context: Arc<Buffer>,
}

impl ConsoleHandler {
    /// Builds a root handler writing to `sink`. Unset options take their defaults.
    pub fn new(sink: impl Sink + 'static, opts: HandlerOptions) -> Self {
        Self::with_shared_sink(Arc::new(sink), opts)
    }

    /// Like [`new`](Self::new) for a sink that is already shared.
    #[must_use]
    pub fn with_shared_sink(sink: Arc<dyn Sink>, opts: HandlerOptions) -> Self {
        encoder::capture_working_dir();

        let layout = opts
            .time_format
            .as_deref()
            .filter(|layout| !layout.trim().is_empty());
        let time_format = match layout {
            Some(layout) => TimeFormat::parse(layout).unwrap_or_else(|e| {
                internal::warn("HANDLER", &format!("{e}, using default"));
                TimeFormat::default()
            }),
            None => TimeFormat::default(),
        };

        let theme: Arc<dyn Theme> = if opts.no_color {
            Arc::new(ThemeDef::plain())
        } else {
            opts.theme
                .unwrap_or_else(|| Arc::new(ThemeDef::default_theme()))
        };

        Self {
            sink,
            level: opts.level.unwrap_or_else(|| Arc::new(Level::INFO)),
            add_source: opts.add_source,
            encoder: Arc::new(Encoder::new(theme, time_format)),
            group: String::new(),
            context: Arc::new(Buffer::new()),
        }
    }

    /// The dotted group path applied to record attributes.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Pre-rendered bytes of every attribute attached through `with_attrs`.
    #[must_use]
    pub fn context(&self) -> &Buffer {
        &self.context
    }

    #[must_use]
    pub fn theme(&self) -> &dyn Theme {
        self.encoder.theme()
    }

    #[must_use]
    pub fn min_level(&self) -> Level {
        self.level.level()
    }

    /// The buffer goes back to `pool` reset, whether or not the write succeeds.
    fn handle_pooled(&self, pool: &BufferPool, record: &Record) -> io::Result<()> {
        let mut buf = pool.acquire();
        self.encoder
            .encode(&mut buf, record, self.add_source, &self.context, &self.group);
        buf.write_to(self.sink.as_ref())?;
        Ok(())
    }

    /// Concrete counterpart of [`Handler::with_attrs`].
    #[must_use]
    pub fn with_attrs(&self, attrs: &[Attr]) -> Self {
        if attrs.is_empty() {
            return self.clone();
        }
        let mut context = Buffer::clone(&self.context);
        for attr in attrs {
            self.encoder.write_attr(&mut context, attr, &self.group);
        }
        context.clip();
        Self {
            context: Arc::new(context),
            ..self.clone()
        }
    }

    /// Concrete counterpart of [`Handler::with_group`].
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            return self.clone();
        }
        let group = if self.group.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.group)
        };
        Self {
            group,
            ..self.clone()
        }
    }
}

impl Handler for ConsoleHandler {
    fn enabled(&self, level: Level) -> bool {
        level >= self.level.level()
    }

    fn handle(&self, record: &Record) -> io::Result<()> {
        self.handle_pooled(BufferPool::global(), record)
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler> {
        Arc::new(Self::with_attrs(self, attrs))
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        Arc::new(Self::with_group(self, name))
    }
}

impl fmt::Debug for ConsoleHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleHandler")
            .field("level", &self.level.level())
            .field("add_source", &self.add_source)
            .field("theme", &self.encoder.theme().name())
            .field("time_format", &self.encoder.time_format().layout())
            .field("group", &self.group)
            .field("context", &self.context.as_str())
            .finish_non_exhaustive()
    }
}
