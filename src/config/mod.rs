//! TOML configuration loading and `source = "..."` include resolution.
//!
//! Separated from struct definitions so that the loading logic (file I/O, cycle detection,
//! merge strategy) stays independent of the serde schema.

mod structs;

pub use structs::{HandlerConfig, ThemeConfig};

use crate::buffer::TimeFormat;
use crate::handler::HandlerOptions;
use crate::internal;
use crate::theme::ThemeDef;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file is a valid config: every field has a default.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub handler: HandlerConfig,
    /// User-defined themes, selectable by name from `[handler] theme`.
    pub themes: HashMap<String, ThemeConfig>,
}

/// Scans raw TOML for `source = "..."` directives before deserialization.
/// Returns the extracted paths and the remaining TOML content stripped of those lines.
///
/// Directives are only recognized at the top level, before the first table
/// header, since `source` is also a theme role key.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();
    let mut in_table = false;

    for line in content.lines() {
        let trimmed = line.trim();
        in_table |= trimmed.starts_with('[');
        let directive = trimmed
            .strip_prefix("source")
            .filter(|_| !in_table)
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('='));
        if let Some(value) = directive {
            let path = value.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads the user's config from the default location with all includes resolved.
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, a file can't be read,
    /// TOML parsing hits a syntax error, or includes form a cycle.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_with_sources(&config_path, &mut HashSet::new())?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// Parses a config from a string. `source` lines are ignored since there
    /// is no file to resolve them against.
    ///
    /// # Errors
    /// [`crate::Error::ConfigParse`] on invalid TOML or field values.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        let (sources, toml_content) = extract_sources(content);
        if !sources.is_empty() {
            internal::warn("CONFIG", "source directives ignored when parsing a string");
        }
        Ok(toml::from_str(&toml_content)?)
    }

    /// Recursive loader that expands `source = "..."` includes while tracking
    /// visited paths in `seen` to break include cycles.
    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            internal::debug("CONFIG", &format!("Processing source: {source_path}"));
            let expanded = shellexpand::tilde(&source_path);
            let mut source_file = PathBuf::from(expanded.as_ref());
            if source_file.is_relative()
                && let Some(dir) = path.parent()
            {
                source_file = dir.join(source_file);
            }
            if source_file.exists() {
                let source_config = Self::load_with_sources(&source_file, seen)?;
                config.merge(source_config);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source_path}"));
            }
        }

        Ok(config)
    }

    /// Folds an included config's themes into `self` without overwriting
    /// existing keys, so the primary file's values take precedence over includes.
    /// Scalar `[handler]` settings always come from the primary file.
    pub fn merge(&mut self, other: Self) {
        for (k, v) in other.themes {
            self.themes.entry(k).or_insert(v);
        }
    }

    /// `<config_dir>/conslog/config.toml`, e.g. `~/.config/conslog/config.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("conslog").join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Resolves a theme name: user-defined themes shadow the built-ins.
    ///
    /// # Errors
    /// [`crate::Error::UnknownTheme`] when neither defines `name`, or
    /// [`crate::Error::InvalidStyle`] when a user theme has a bad role or style.
    pub fn theme(&self, name: &str) -> Result<ThemeDef, crate::Error> {
        if let Some(def) = self.themes.get(name) {
            let base_name = def.base.as_deref().unwrap_or("default");
            let base = ThemeDef::by_name(base_name)
                .ok_or_else(|| crate::Error::UnknownTheme(base_name.to_string()))?;
            return ThemeDef::from_roles(name, base, &def.roles);
        }
        ThemeDef::by_name(name).ok_or_else(|| crate::Error::UnknownTheme(name.to_string()))
    }

    /// Converts the `[handler]` section into handler options.
    ///
    /// # Errors
    /// Unknown theme, bad style string, or an invalid time format.
    pub fn handler_options(&self) -> Result<HandlerOptions, crate::Error> {
        let handler = &self.handler;
        let mut opts = HandlerOptions::new()
            .level(handler.level)
            .add_source(handler.add_source)
            .no_color(handler.no_color)
            .theme(self.theme(&handler.theme)?);
        if let Some(layout) = &handler.time_format {
            TimeFormat::parse(layout)?;
            opts = opts.time_format(layout.as_str());
        }
        internal::debug(
            "CONFIG",
            &format!(
                "Handler options: level={}, theme={}, source={}, color={}",
                handler.level, handler.theme, handler.add_source, !handler.no_color
            ),
        );
        Ok(opts)
    }
}
