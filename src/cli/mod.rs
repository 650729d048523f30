//! Command-line front end of the `conslog-demo` binary.
//!
//! Prints a fixed set of sample lines through a handler configured from the
//! config file, with flags taking precedence over file settings.

use crate::config::Config;
use crate::handler::HandlerOptions;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use crate::theme::ThemeDef;
use crate::value::Attr;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "conslog-demo",
    version,
    about = "Print sample log lines through the console handler"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Minimum level, e.g. "debug", "warn+1" or "-4"
    #[arg(short, long, global = true)]
    pub level: Option<Level>,

    /// Prefix messages with file:line
    #[arg(short, long, global = true)]
    pub source: bool,

    /// Disable ANSI styling
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Theme name (built-in or defined in the config file)
    #[arg(short, long, global = true)]
    pub theme: Option<String>,

    /// strftime layout for timestamps
    #[arg(long, value_name = "LAYOUT", global = true)]
    pub time_format: Option<String>,

    /// Config file to read instead of the default location
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Subcommand, Default)]
pub enum Command {
    /// Print the sample lines (default)
    #[default]
    Demo,
    /// Print one line per level for every available theme
    Themes,
}

impl Cli {
    /// Loads the config named by `--config`, or the default one.
    ///
    /// # Errors
    /// Any config loading error.
    pub fn load_config(&self) -> Result<Config, crate::Error> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Config file options with command-line flags applied on top.
    ///
    /// # Errors
    /// Unknown theme or invalid time format, from either source.
    pub fn handler_options(&self, config: &Config) -> Result<HandlerOptions, crate::Error> {
        let mut opts = config.handler_options()?;
        if let Some(level) = self.level {
            opts = opts.level(level);
        }
        if self.source {
            opts = opts.add_source(true);
        }
        if self.no_color {
            opts = opts.no_color(true);
        }
        if let Some(name) = &self.theme {
            opts = opts.theme(config.theme(name)?);
        }
        if let Some(layout) = &self.time_format {
            crate::buffer::TimeFormat::parse(layout)?;
            opts = opts.time_format(layout.as_str());
        }
        Ok(opts)
    }
}

/// Runs the selected command, writing to stderr.
///
/// # Errors
/// Config or option resolution failures.
pub fn run(cli: &Cli) -> Result<(), crate::Error> {
    let config = cli.load_config()?;
    let opts = cli.handler_options(&config)?;
    match cli.command.unwrap_or_default() {
        Command::Demo => demo(&Logger::from_options(io::stderr(), opts)),
        Command::Themes => themes(&config, &opts)?,
    }
    Ok(())
}

/// The sample sequence: one line per level, then a derived logger.
pub fn demo(logger: &Logger) {
    internal::debug("CLI", "Printing demo lines");
    logger.info("Hello world!", &[Attr::string("foo", "bar")]);
    logger.debug("Debug message", &[]);
    logger.warn(
        "Warning message",
        &[Attr::new("elapsed", Duration::from_millis(1_500))],
    );
    logger.error(
        "Error message",
        &[Attr::error("err", io::Error::other("the error"))],
    );

    let logger = logger
        .with(&[Attr::string("foo", "bar")])
        .with_group("the-group")
        .with(&[Attr::string("bar", "baz")]);
    logger.info("group info", &[Attr::string("attr", "value")]);
}

fn themes(config: &Config, opts: &HandlerOptions) -> Result<(), crate::Error> {
    let mut names: Vec<&str> = ThemeDef::BUILTINS.to_vec();
    let mut custom: Vec<&str> = config.themes.keys().map(String::as_str).collect();
    custom.sort_unstable();
    names.extend(custom);

    for name in names {
        let theme = config.theme(name)?;
        let logger = Logger::from_options(io::stderr(), opts.clone().theme(theme));
        for level in Level::all() {
            logger.log(
                level,
                name,
                &[
                    Attr::string("level", level.to_string()),
                    Attr::int("value", i64::from(level.value())),
                ],
            );
        }
    }
    Ok(())
}
