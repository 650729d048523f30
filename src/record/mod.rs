//! One structured log event as handed to a [`Handler`](crate::Handler).

use crate::level::Level;
use crate::value::Attr;
use chrono::{DateTime, FixedOffset, Local, TimeZone};
use std::borrow::Cow;
use std::panic::Location;

/// Call-site of a log statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub file: Cow<'static, str>,
    pub line: u32,
}

impl Source {
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Location of whoever called the outermost `#[track_caller]` function.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// A source without a file or line carries nothing worth printing.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.file.is_empty() && self.line > 0
    }
}

impl From<&'static Location<'static>> for Source {
    fn from(loc: &'static Location<'static>) -> Self {
        Self::new(loc.file(), loc.line())
    }
}

/// Immutable once handed to a handler.
#[derive(Debug, Clone)]
pub struct Record {
    /// `None` is the zero timestamp; the handler omits the field.
    pub time: Option<DateTime<FixedOffset>>,
    pub level: Level,
    pub message: String,
    pub source: Option<Source>,
    pub attrs: Vec<Attr>,
}

impl Record {
    /// A record stamped with the current local time and no call-site.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: Some(Local::now().fixed_offset()),
            level,
            message: message.into(),
            source: None,
            attrs: Vec::new(),
        }
    }

    /// Replaces the timestamp; `None` suppresses the timestamp field.
    #[must_use]
    pub fn with_time(mut self, time: Option<DateTime<FixedOffset>>) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn at<Tz: TimeZone>(self, time: &DateTime<Tz>) -> Self {
        self.with_time(Some(time.fixed_offset()))
    }

    #[must_use]
    pub fn with_source(mut self, source: Option<Source>) -> Self {
        self.source = source;
        self
    }

    /// Appends one attribute.
    #[must_use]
    pub fn add(mut self, attr: impl Into<Attr>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    #[must_use]
    pub fn add_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }
}
