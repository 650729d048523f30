//! Error type for configuration and option resolution.
//!
//! Writing a record never produces one of these: `Handler::handle` returns the
//! sink's `std::io::Error` untouched.

use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// I/O error while reading configuration.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Cyclic include detected in config sources.
    CyclicInclude(PathBuf),
    /// Unrecognised level string.
    InvalidLevel(String),
    /// Unknown style attribute or theme role.
    InvalidStyle(String),
    /// Theme name that is neither built in nor defined in config.
    UnknownTheme(String),
    /// strftime layout with an unknown or malformed specifier.
    InvalidTimeFormat(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CyclicInclude(p) => write!(f, "cyclic include: {}", p.display()),
            Self::InvalidLevel(s) => write!(f, "invalid level: {s}"),
            Self::InvalidStyle(s) => write!(f, "invalid style: {s}"),
            Self::UnknownTheme(name) => write!(f, "unknown theme: {name}"),
            Self::InvalidTimeFormat(s) => write!(f, "invalid time format: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<crate::level::ParseLevelError> for Error {
    fn from(e: crate::level::ParseLevelError) -> Self {
        Self::InvalidLevel(e.to_string())
    }
}
