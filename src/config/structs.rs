//! Configuration struct definitions.

use crate::level::Level;
use serde::Deserialize;
use std::collections::HashMap;

/// `[handler]` section: everything [`HandlerOptions`](crate::HandlerOptions) carries.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HandlerConfig {
    /// Minimum level: a name (`"warn"`), a name with offset (`"info+2"`) or an integer.
    pub level: Level,
    /// Prefix each message with `file:line > `.
    pub add_source: bool,
    /// Strip all ANSI styling.
    pub no_color: bool,
    /// strftime layout for timestamps.
    pub time_format: Option<String>,
    /// Built-in theme name or a key of `[themes]`.
    pub theme: String,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            add_source: false,
            no_color: false,
            time_format: None,
            theme: "default".to_string(),
        }
    }
}

/// `[themes.<name>]` section: per-role style strings layered over a base theme.
///
/// ```toml
/// [themes.mine]
/// base = "bright"
/// timestamp = "faint"
/// level_error = "bold #ff5555"
/// ```
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Built-in theme supplying every role not listed. Defaults to `default`.
    pub base: Option<String>,
    /// Role name to style string, see [`Style::parse`](crate::Style::parse).
    #[serde(flatten)]
    pub roles: HashMap<String, String>,
}
