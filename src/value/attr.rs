use super::Value;
use chrono::{DateTime, TimeDelta, TimeZone};
use std::error::Error as StdError;
use std::fmt;

/// A key/value pair attached to a record, a group, or a derived handler.
///
/// `Attr::default()` (empty key, nil value) is ignored wherever it appears.
#[derive(Debug, Clone, Default)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Value::String(value.into()))
    }

    pub fn int(key: impl Into<String>, value: i64) -> Self {
        Self::new(key, Value::Int64(value))
    }

    pub fn uint(key: impl Into<String>, value: u64) -> Self {
        Self::new(key, Value::Uint64(value))
    }

    pub fn float(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, Value::Float64(value))
    }

    pub fn bool(key: impl Into<String>, value: bool) -> Self {
        Self::new(key, Value::Bool(value))
    }

    pub fn duration(key: impl Into<String>, value: TimeDelta) -> Self {
        Self::new(key, Value::Duration(value))
    }

    pub fn time<Tz: TimeZone>(key: impl Into<String>, value: DateTime<Tz>) -> Self {
        Self::new(key, Value::Time(value.fixed_offset()))
    }

    /// A named group. An empty `key` inlines the members into the enclosing scope.
    pub fn group(key: impl Into<String>, attrs: impl IntoIterator<Item = Self>) -> Self {
        Self::new(key, Value::group(attrs))
    }

    pub fn error<E>(key: impl Into<String>, err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::new(key, Value::error(err))
    }

    pub fn display<T>(key: impl Into<String>, value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Self::new(key, Value::display(value))
    }

    pub fn debug<T>(key: impl Into<String>, value: T) -> Self
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        Self::new(key, Value::debug(value))
    }

    /// True for the zero attribute, which handlers skip.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.value.is_nil()
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for Attr {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
