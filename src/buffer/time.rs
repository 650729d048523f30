use chrono::format::{DelayedFormat, Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt;
use std::slice::Iter;

/// A strftime layout checked once up front, so formatting a timestamp can
/// never fail halfway through a line.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeFormat {
    layout: String,
    items: Vec<Item<'static>>,
}

impl TimeFormat {
    /// `2006-01-02 15:04:05` style date and time.
    pub const DATE_TIME: &'static str = "%Y-%m-%d %H:%M:%S";
    /// RFC 3339 with second precision.
    pub const RFC3339: &'static str = "%Y-%m-%dT%H:%M:%S%:z";
    /// RFC 3339 with nanosecond precision, trailing zeros kept.
    pub const RFC3339_NANO: &'static str = "%Y-%m-%dT%H:%M:%S%.9f%:z";
    /// `3:04PM` style clock time.
    pub const KITCHEN: &'static str = "%-I:%M%p";

    /// Parses a strftime layout.
    ///
    /// # Errors
    /// [`crate::Error::InvalidTimeFormat`] when the layout contains an unknown
    /// or malformed specifier.
    pub fn parse(layout: &str) -> Result<Self, crate::Error> {
        let items = StrftimeItems::new(layout)
            .parse_to_owned()
            .map_err(|_| crate::Error::InvalidTimeFormat(layout.to_string()))?;
        Ok(Self {
            layout: layout.to_string(),
            items,
        })
    }

    #[must_use]
    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Lazily formats `t`; the result implements `Display`.
    pub fn format<'a, Tz>(&'a self, t: &DateTime<Tz>) -> DelayedFormat<Iter<'a, Item<'static>>>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        t.format_with_items(self.items.iter())
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            layout: Self::DATE_TIME.to_string(),
            items: StrftimeItems::new(Self::DATE_TIME)
                .parse_to_owned()
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.layout)
    }
}
