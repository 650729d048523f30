//! Typed attribute values and the key/value pairs that carry them.

mod attr;

pub use attr::Attr;

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Upper bound on chained [`LogValuer`] evaluations in [`Value::resolve`].
const MAX_LOG_VALUES: usize = 100;

/// A value whose rendering is deferred until a record is actually written.
pub trait LogValuer: Send + Sync {
    fn log_value(&self) -> Value;
}

impl<F> LogValuer for F
where
    F: Fn() -> Value + Send + Sync,
{
    fn log_value(&self) -> Value {
        self()
    }
}

/// Payload of [`Value::Any`], split by how it renders.
#[derive(Clone)]
pub enum AnyValue {
    /// Rendered with its message in the error style.
    Error(Arc<dyn StdError + Send + Sync>),
    /// Rendered with its `Display` text.
    Display(Arc<dyn fmt::Display + Send + Sync>),
    /// Rendered with its `Debug` text.
    Debug(Arc<dyn fmt::Debug + Send + Sync>),
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(e) => f.debug_tuple("Error").field(&e.to_string()).finish(),
            Self::Display(d) => f.debug_tuple("Display").field(&d.to_string()).finish(),
            Self::Debug(d) => f.debug_tuple("Debug").field(d).finish(),
        }
    }
}

impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(e) => fmt::Display::fmt(e, f),
            Self::Display(d) => fmt::Display::fmt(d, f),
            Self::Debug(d) => fmt::Debug::fmt(d, f),
        }
    }
}

/// Tagged union over every kind an attribute can hold.
#[derive(Clone, Default)]
pub enum Value {
    /// The zero value. Paired with an empty key it marks an attribute to ignore.
    #[default]
    Nil,
    String(String),
    Int64(i64),
    Uint64(u64),
    Float64(f64),
    Bool(bool),
    Duration(TimeDelta),
    Time(DateTime<FixedOffset>),
    Group(Vec<Attr>),
    Any(AnyValue),
    Lazy(Arc<dyn LogValuer>),
}

impl Value {
    /// Wraps an error so it renders in the theme's error style.
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Any(AnyValue::Error(Arc::new(err)))
    }

    /// Wraps anything with a textual representation.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Self::Any(AnyValue::Display(Arc::new(value)))
    }

    /// Wraps an arbitrary value rendered through its `Debug` output.
    pub fn debug<T>(value: T) -> Self
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        Self::Any(AnyValue::Debug(Arc::new(value)))
    }

    /// Defers evaluation to render time.
    pub fn lazy<L>(valuer: L) -> Self
    where
        L: LogValuer + 'static,
    {
        Self::Lazy(Arc::new(valuer))
    }

    #[must_use]
    pub fn group(attrs: impl IntoIterator<Item = Attr>) -> Self {
        Self::Group(attrs.into_iter().collect())
    }

    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::String(_) => "string",
            Self::Int64(_) => "int64",
            Self::Uint64(_) => "uint64",
            Self::Float64(_) => "float64",
            Self::Bool(_) => "bool",
            Self::Duration(_) => "duration",
            Self::Time(_) => "time",
            Self::Group(_) => "group",
            Self::Any(_) => "any",
            Self::Lazy(_) => "lazy",
        }
    }

    /// Evaluates deferred values until a concrete one is reached.
    ///
    /// A valuer that keeps returning deferred values is cut off after a
    /// fixed number of rounds and replaced by an error value.
    #[must_use]
    pub fn resolve(&self) -> Self {
        let Self::Lazy(first) = self else {
            return self.clone();
        };

        let mut current = first.log_value();
        for _ in 1..MAX_LOG_VALUES {
            match current {
                Self::Lazy(next) => current = next.log_value(),
                resolved => return resolved,
            }
        }
        if current.is_lazy() {
            return Self::error(ResolveError);
        }
        current
    }

    const fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }
}

/// Produced by [`Value::resolve`] when deferred values never settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveError;

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deferred value still unresolved after {MAX_LOG_VALUES} evaluations"
        )
    }
}

impl StdError for ResolveError {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("Nil"),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Int64(i) => f.debug_tuple("Int64").field(i).finish(),
            Self::Uint64(u) => f.debug_tuple("Uint64").field(u).finish(),
            Self::Float64(v) => f.debug_tuple("Float64").field(v).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Duration(d) => f.debug_tuple("Duration").field(d).finish(),
            Self::Time(t) => f.debug_tuple("Time").field(t).finish(),
            Self::Group(g) => f.debug_tuple("Group").field(g).finish(),
            Self::Any(a) => f.debug_tuple("Any").field(a).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// Default textual rendering, used for strings and anything without a
/// dedicated typed append.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("<nil>"),
            Self::String(s) => f.write_str(s),
            Self::Int64(i) => write!(f, "{i}"),
            Self::Uint64(u) => write!(f, "{u}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Duration(d) => write!(f, "{d}"),
            Self::Time(t) => write!(f, "{t}"),
            Self::Group(attrs) => {
                f.write_str("[")?;
                for (i, attr) in attrs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}={}", attr.key, attr.value)?;
                }
                f.write_str("]")
            }
            Self::Any(a) => fmt::Display::fmt(a, f),
            Self::Lazy(l) => fmt::Display::fmt(&l.log_value(), f),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::$variant(<$target>::from(v))
                }
            }
        )+
    };
}

impl_from_int!(Int64, i64, i8, i16, i32, i64);
impl_from_int!(Uint64, u64, u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Self::Int64(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::Uint64(u64::try_from(v).unwrap_or(u64::MAX))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float64(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<TimeDelta> for Value {
    fn from(v: TimeDelta) -> Self {
        Self::Duration(v)
    }
}

/// Saturates at [`TimeDelta::MAX`] for spans chrono cannot represent.
impl From<std::time::Duration> for Value {
    fn from(v: std::time::Duration) -> Self {
        Self::Duration(TimeDelta::from_std(v).unwrap_or(TimeDelta::MAX))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Self::Time(v.fixed_offset())
    }
}

impl From<Vec<Attr>> for Value {
    fn from(v: Vec<Attr>) -> Self {
        Self::Group(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}
