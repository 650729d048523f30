//! Renders records and attributes into a [`Buffer`].
//!
//! The encoder holds only immutable settings (theme and time format), so one
//! instance is shared by a handler and everything derived from it.

mod source;

pub(crate) use source::capture_working_dir;

use crate::buffer::{Buffer, TimeFormat};
use crate::level::Level;
use crate::record::{Record, Source};
use crate::theme::{Style, Theme};
use crate::value::{AnyValue, Attr, Value};
use chrono::{DateTime, FixedOffset};
use std::fmt::Write as _;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Encoder {
    theme: Arc<dyn Theme>,
    time_format: TimeFormat,
}

impl Encoder {
    #[must_use]
    pub fn new(theme: Arc<dyn Theme>, time_format: TimeFormat) -> Self {
        Self { theme, time_format }
    }

    #[must_use]
    pub fn theme(&self) -> &dyn Theme {
        self.theme.as_ref()
    }

    #[must_use]
    pub const fn time_format(&self) -> &TimeFormat {
        &self.time_format
    }

    /// Writes one full line: header fields, the pre-rendered `context`, the
    /// record's own attributes under `group`, and the line terminator.
    pub fn encode(
        &self,
        buf: &mut Buffer,
        record: &Record,
        add_source: bool,
        context: &Buffer,
        group: &str,
    ) {
        self.write_timestamp(buf, record.time.as_ref());
        self.write_level(buf, record.level);
        if add_source && let Some(source) = record.source.as_ref().filter(|s| s.is_valid()) {
            self.write_source(buf, source);
        }
        self.write_message(buf, record.level, &record.message);
        buf.extend_from(context);
        for attr in &record.attrs {
            self.write_attr(buf, attr, group);
        }
        buf.new_line();
    }

    fn with_style(buf: &mut Buffer, style: &Style, f: impl FnOnce(&mut Buffer)) {
        if style.is_empty() {
            f(buf);
            return;
        }
        buf.append_str(style.as_str());
        f(buf);
        buf.append_str(Style::RESET);
    }

    fn write_styled_str(buf: &mut Buffer, s: &str, style: &Style) {
        Self::with_style(buf, style, |b| b.append_str(s));
    }

    /// Skipped entirely for the zero timestamp.
    pub fn write_timestamp(&self, buf: &mut Buffer, time: Option<&DateTime<FixedOffset>>) {
        let Some(time) = time else {
            return;
        };
        Self::with_style(buf, self.theme.timestamp(), |b| {
            b.append_time(time, &self.time_format);
        });
        buf.append_byte(b' ');
    }

    /// `INF`, `WRN+2`, `DBG-1`, ...
    pub fn write_level(&self, buf: &mut Buffer, level: Level) {
        Self::with_style(buf, self.theme.level(level), |b| {
            b.append_str(level.short_name());
            let delta = level.delta();
            if delta != 0 {
                let _ = write!(b, "{delta:+}");
            }
        });
        buf.append_byte(b' ');
    }

    /// `file:line > `, with the file made relative to the working directory
    /// when it lies below it.
    pub fn write_source(&self, buf: &mut Buffer, source: &Source) {
        let file = source::shorten(&source.file);
        Self::with_style(buf, self.theme.source(), |b| {
            b.append_str(&file);
            b.append_byte(b':');
            b.append_uint(u64::from(source.line));
        });
        Self::write_styled_str(buf, " > ", self.theme.attr_key());
    }

    pub fn write_message(&self, buf: &mut Buffer, level: Level, msg: &str) {
        let style = if level < Level::INFO {
            self.theme.message_debug()
        } else {
            self.theme.message()
        };
        Self::write_styled_str(buf, msg, style);
    }

    /// Renders ` group.key=value`, flattening groups into dotted keys.
    ///
    /// The zero attribute renders nothing, an empty-keyed group is inlined
    /// into `group`, and a group without members renders nothing at all.
    pub fn write_attr(&self, buf: &mut Buffer, attr: &Attr, group: &str) {
        let value = attr.value.resolve();
        if attr.key.is_empty() && value.is_nil() {
            return;
        }

        if let Value::Group(members) = &value {
            if attr.key.is_empty() {
                for member in members {
                    self.write_attr(buf, member, group);
                }
                return;
            }
            let subgroup = if group.is_empty() {
                attr.key.clone()
            } else {
                format!("{group}.{}", attr.key)
            };
            for member in members {
                self.write_attr(buf, member, &subgroup);
            }
            return;
        }

        buf.append_byte(b' ');
        Self::with_style(buf, self.theme.attr_key(), |b| {
            if !group.is_empty() {
                b.append_str(group);
                b.append_byte(b'.');
            }
            b.append_str(&attr.key);
            b.append_byte(b'=');
        });
        self.write_value(buf, &value);
    }

    pub fn write_value(&self, buf: &mut Buffer, value: &Value) {
        let style = self.theme.attr_value();
        match value {
            Value::Int64(i) => Self::with_style(buf, style, |b| b.append_int(*i)),
            Value::Uint64(u) => Self::with_style(buf, style, |b| b.append_uint(*u)),
            Value::Float64(f) => Self::with_style(buf, style, |b| b.append_float(*f)),
            Value::Bool(v) => Self::with_style(buf, style, |b| b.append_bool(*v)),
            Value::Duration(d) => Self::with_style(buf, style, |b| b.append_duration(*d)),
            Value::Time(t) => {
                Self::with_style(buf, style, |b| b.append_time(t, &self.time_format));
            }
            Value::String(s) => Self::write_styled_str(buf, s, style),
            Value::Any(AnyValue::Error(err)) => {
                let msg = err.to_string();
                Self::write_styled_str(buf, &msg, self.theme.attr_value_error());
            }
            Value::Any(AnyValue::Display(d)) => Self::with_style(buf, style, |b| {
                let _ = write!(b, "{d}");
            }),
            other => Self::with_style(buf, style, |b| {
                let _ = write!(b, "{other}");
            }),
        }
    }
}
