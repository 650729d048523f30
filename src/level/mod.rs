//! Severity levels that gate which records reach the sink.
//!
//! Levels are plain integers so callers can log "between" the named
//! thresholds (`WARN+2`, `DEBUG-1`); the four named values are spaced four
//! apart to leave room for that.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

/// Ordered severity. Higher is more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(i32);

impl Level {
    /// Diagnostics that are too noisy for normal operation.
    pub const DEBUG: Self = Self(-4);
    /// Normal operational milestones.
    pub const INFO: Self = Self(0);
    /// Non-fatal anomalies that may need attention.
    pub const WARN: Self = Self(4);
    /// Failures that prevent an operation from completing.
    pub const ERROR: Self = Self(8);

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Shifts the level by `delta`, saturating at the integer bounds.
    #[must_use]
    pub const fn offset(self, delta: i32) -> Self {
        Self(self.0.saturating_add(delta))
    }

    /// The nearest named threshold at or below this level. Anything below
    /// `DEBUG` is still reported against `DEBUG`.
    #[must_use]
    pub const fn threshold(self) -> Self {
        if self.0 >= Self::ERROR.0 {
            Self::ERROR
        } else if self.0 >= Self::WARN.0 {
            Self::WARN
        } else if self.0 >= Self::INFO.0 {
            Self::INFO
        } else {
            Self::DEBUG
        }
    }

    /// Signed distance from [`Level::threshold`].
    #[must_use]
    pub const fn delta(self) -> i64 {
        self.0 as i64 - self.threshold().0 as i64
    }

    /// Uppercase threshold name used by `Display`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.threshold() {
            Self::ERROR => "ERROR",
            Self::WARN => "WARN",
            Self::INFO => "INFO",
            _ => "DEBUG",
        }
    }

    /// Three-letter label written into console lines.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self.threshold() {
            Self::ERROR => "ERR",
            Self::WARN => "WRN",
            Self::INFO => "INF",
            _ => "DBG",
        }
    }

    /// The named thresholds in ascending order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::DEBUG, Self::INFO, Self::WARN, Self::ERROR]
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match self.delta() {
            0 => Ok(()),
            d => write!(f, "{d:+}"),
        }
    }
}

/// Source of a handler's minimum level, consulted on every `enabled` check.
pub trait Leveler: fmt::Debug + Send + Sync {
    fn level(&self) -> Level;
}

impl Leveler for Level {
    fn level(&self) -> Level {
        *self
    }
}

/// A minimum level that can be changed while handlers are running.
/// Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct LevelVar(Arc<AtomicI32>);

impl LevelVar {
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self(Arc::new(AtomicI32::new(level.0)))
    }

    pub fn set(&self, level: Level) {
        self.0.store(level.0, Ordering::Relaxed);
    }

    #[must_use]
    pub fn get(&self) -> Level {
        Level(self.0.load(Ordering::Relaxed))
    }
}

impl Leveler for LevelVar {
    fn level(&self) -> Level {
        self.get()
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i32>() {
            return Ok(Self(value));
        }

        let err = || ParseLevelError(s.to_string());
        let (name, delta) = match trimmed.find(['+', '-']) {
            Some(idx) => {
                let delta = trimmed[idx..].parse::<i32>().map_err(|_| err())?;
                (&trimmed[..idx], delta)
            }
            None => (trimmed, 0),
        };

        let base = match name.to_lowercase().as_str() {
            "debug" | "dbg" => Self::DEBUG,
            "info" | "inf" => Self::INFO,
            "warn" | "warning" | "wrn" => Self::WARN,
            "error" | "err" => Self::ERROR,
            _ => return Err(err()),
        };
        Ok(base.offset(delta))
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LevelVisitor;

        impl Visitor<'_> for LevelVisitor {
            type Value = Level;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a level name such as \"warn+2\" or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Level, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Level, E> {
                i32::try_from(v).map(Level).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Level, E> {
                i32::try_from(v).map(Level).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(LevelVisitor)
    }
}
