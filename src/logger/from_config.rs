//! Logger construction from conslog config files.

use super::Logger;
use crate::config::Config;
use crate::handler::{ConsoleHandler, HandlerOptions};
use crate::internal;
use crate::sink::Sink;
use std::io;
use std::sync::Arc;

impl Logger {
    /// Builds a stderr logger from the default config file.
    ///
    /// Never fails: an unreadable or invalid config is reported through the
    /// internal logger and the defaults are used instead.
    #[must_use]
    pub fn from_config() -> Self {
        internal::debug("LOGGER", "Building logger from config");
        let config = Config::load().unwrap_or_else(|e| {
            internal::warn("LOGGER", &format!("Config unusable, using defaults: {e}"));
            Config::default()
        });
        Self::from_config_with(&config, io::stderr()).unwrap_or_else(|e| {
            internal::warn("LOGGER", &format!("Handler options invalid, using defaults: {e}"));
            Self::default()
        })
    }

    /// Builds a logger writing to `sink` from an already-loaded config.
    ///
    /// # Errors
    /// Whatever [`Config::handler_options`] reports.
    pub fn from_config_with(
        config: &Config,
        sink: impl Sink + 'static,
    ) -> Result<Self, crate::Error> {
        let opts = config.handler_options()?;
        Ok(Self::from_options(sink, opts))
    }

    #[must_use]
    pub fn from_options(sink: impl Sink + 'static, opts: HandlerOptions) -> Self {
        Self::new(Arc::new(ConsoleHandler::new(sink, opts)))
    }
}
