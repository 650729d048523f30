use crate::level::{Level, Leveler};
use crate::theme::Theme;
use std::fmt;
use std::sync::Arc;

/// Construction-time settings for a [`ConsoleHandler`](super::ConsoleHandler).
///
/// Everything left unset falls back to a default when the handler is built:
/// minimum level `INFO`, time format `%Y-%m-%d %H:%M:%S`, the default theme.
#[derive(Clone, Default)]
pub struct HandlerOptions {
    /// Print `file:line > ` before the message when the record carries a call-site.
    pub add_source: bool,
    /// Minimum level; a [`LevelVar`](crate::LevelVar) makes it adjustable at runtime.
    pub level: Option<Arc<dyn Leveler>>,
    /// Render every role unstyled.
    pub no_color: bool,
    /// strftime layout for the record timestamp and time-valued attributes.
    pub time_format: Option<String>,
    pub theme: Option<Arc<dyn Theme>>,
}

impl HandlerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn add_source(mut self, enabled: bool) -> Self {
        self.add_source = enabled;
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl Leveler + 'static) -> Self {
        self.level = Some(Arc::new(level));
        self
    }

    #[must_use]
    pub const fn no_color(mut self, disabled: bool) -> Self {
        self.no_color = disabled;
        self
    }

    /// chrono strftime layout for timestamps. An empty layout means the default.
    #[must_use]
    pub fn time_format(mut self, layout: impl Into<String>) -> Self {
        self.time_format = Some(layout.into());
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: impl Theme + 'static) -> Self {
        self.theme = Some(Arc::new(theme));
        self
    }

    /// The minimum level currently in effect.
    #[must_use]
    pub fn min_level(&self) -> Level {
        self.level.as_ref().map_or(Level::INFO, |l| l.level())
    }
}

impl fmt::Debug for HandlerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerOptions")
            .field("add_source", &self.add_source)
            .field("level", &self.min_level())
            .field("no_color", &self.no_color)
            .field("time_format", &self.time_format)
            .field("theme", &self.theme.as_ref().map(|t| t.name().to_string()))
            .finish()
    }
}
