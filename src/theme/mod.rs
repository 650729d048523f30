//! Role-to-style assignments for console output.
//!
//! A theme is resolved once when a handler is built and never changes
//! afterwards. The empty [`Style`] means "unstyled" for a role, which is how
//! disabling colour works: the handler swaps in [`ThemeDef::plain`].

mod style;

pub use style::{Color, Sgr, Style};

use crate::level::Level;
use std::collections::HashMap;
use std::fmt;

/// Style lookup for every semantic role of a console line.
pub trait Theme: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;
    fn timestamp(&self) -> &Style;
    fn source(&self) -> &Style;
    fn message(&self) -> &Style;
    /// Message style for records below `INFO`.
    fn message_debug(&self) -> &Style;
    fn attr_key(&self) -> &Style;
    fn attr_value(&self) -> &Style;
    fn attr_value_error(&self) -> &Style;
    fn level_error(&self) -> &Style;
    fn level_warn(&self) -> &Style;
    fn level_info(&self) -> &Style;
    fn level_debug(&self) -> &Style;

    /// Band at or below `level`; anything under `INFO` uses the debug band.
    fn level(&self, level: Level) -> &Style {
        if level >= Level::ERROR {
            self.level_error()
        } else if level >= Level::WARN {
            self.level_warn()
        } else if level >= Level::INFO {
            self.level_info()
        } else {
            self.level_debug()
        }
    }
}

/// Plain-data [`Theme`]; the built-ins and config-defined themes are all one of these.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeDef {
    pub name: String,
    pub timestamp: Style,
    pub source: Style,
    pub message: Style,
    pub message_debug: Style,
    pub attr_key: Style,
    pub attr_value: Style,
    pub attr_value_error: Style,
    pub level_error: Style,
    pub level_warn: Style,
    pub level_info: Style,
    pub level_debug: Style,
}

impl ThemeDef {
    /// Names of the built-in themes accepted by [`ThemeDef::by_name`].
    pub const BUILTINS: [&'static str; 3] = ["default", "bright", "plain"];

    /// Standard-intensity palette.
    #[must_use]
    pub fn default_theme() -> Self {
        Self {
            name: "Default".to_string(),
            timestamp: Style::new(&[Sgr::BrightBlack]),
            source: Style::new(&[Sgr::Bold, Sgr::BrightBlack]),
            message: Style::new(&[Sgr::Bold]),
            message_debug: Style::none(),
            attr_key: Style::new(&[Sgr::Cyan]),
            attr_value: Style::none(),
            attr_value_error: Style::new(&[Sgr::Bold, Sgr::Red]),
            level_error: Style::new(&[Sgr::Red]),
            level_warn: Style::new(&[Sgr::Yellow]),
            level_info: Style::new(&[Sgr::Green]),
            level_debug: Style::none(),
        }
    }

    /// High-intensity palette for dark terminals.
    #[must_use]
    pub fn bright() -> Self {
        Self {
            name: "Bright".to_string(),
            timestamp: Style::new(&[Sgr::Gray]),
            source: Style::new(&[Sgr::Bold, Sgr::Gray]),
            message: Style::new(&[Sgr::Bold, Sgr::White]),
            message_debug: Style::none(),
            attr_key: Style::new(&[Sgr::BrightCyan]),
            attr_value: Style::none(),
            attr_value_error: Style::new(&[Sgr::Bold, Sgr::BrightRed]),
            level_error: Style::new(&[Sgr::BrightRed]),
            level_warn: Style::new(&[Sgr::BrightYellow]),
            level_info: Style::new(&[Sgr::BrightGreen]),
            level_debug: Style::none(),
        }
    }

    /// Every role unstyled.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            name: "Plain".to_string(),
            ..Self::default()
        }
    }

    /// Case-insensitive lookup of a built-in theme.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "bright" => Some(Self::bright()),
            "plain" | "none" => Some(Self::plain()),
            _ => None,
        }
    }

    /// Builds a theme from per-role style strings (see [`Style::parse`]),
    /// starting from `base` for roles the map leaves out.
    ///
    /// # Errors
    /// [`crate::Error::InvalidStyle`] for an unknown role or attribute name.
    #[allow(clippy::implicit_hasher)]
    pub fn from_roles(
        name: impl Into<String>,
        base: Self,
        roles: &HashMap<String, String>,
    ) -> Result<Self, crate::Error> {
        let mut theme = base;
        theme.name = name.into();
        for (role, spec) in roles {
            let style = Style::parse(spec)?;
            let slot = match role.as_str() {
                "timestamp" => &mut theme.timestamp,
                "source" => &mut theme.source,
                "message" => &mut theme.message,
                "message_debug" => &mut theme.message_debug,
                "attr_key" => &mut theme.attr_key,
                "attr_value" => &mut theme.attr_value,
                "attr_value_error" => &mut theme.attr_value_error,
                "level_error" => &mut theme.level_error,
                "level_warn" => &mut theme.level_warn,
                "level_info" => &mut theme.level_info,
                "level_debug" => &mut theme.level_debug,
                other => return Err(crate::Error::InvalidStyle(format!("unknown role '{other}'"))),
            };
            *slot = style;
        }
        Ok(theme)
    }
}

impl Theme for ThemeDef {
    fn name(&self) -> &str {
        &self.name
    }
    fn timestamp(&self) -> &Style {
        &self.timestamp
    }
    fn source(&self) -> &Style {
        &self.source
    }
    fn message(&self) -> &Style {
        &self.message
    }
    fn message_debug(&self) -> &Style {
        &self.message_debug
    }
    fn attr_key(&self) -> &Style {
        &self.attr_key
    }
    fn attr_value(&self) -> &Style {
        &self.attr_value
    }
    fn attr_value_error(&self) -> &Style {
        &self.attr_value_error
    }
    fn level_error(&self) -> &Style {
        &self.level_error
    }
    fn level_warn(&self) -> &Style {
        &self.level_warn
    }
    fn level_info(&self) -> &Style {
        &self.level_info
    }
    fn level_debug(&self) -> &Style {
        &self.level_debug
    }
}
