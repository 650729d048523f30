//! Append-only byte buffer that every rendered line is assembled in.
//!
//! All `append_*` operations are infallible and grow the backing storage as
//! needed; the only fallible operation is [`Buffer::write_to`].

mod duration;
mod float;
mod pool;
mod time;

pub use pool::{BufferPool, DEFAULT_MAX_BUFFERS, MAX_RETAINED_CAPACITY, PooledBuffer};
pub use time::TimeFormat;

use crate::sink::Sink;
use chrono::{DateTime, TimeDelta, TimeZone};
use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::io;

/// Growable byte sequence; `reset` keeps the allocation for reuse.
///
/// `Clone` yields a buffer with its own storage, so a clone can be mutated
/// without affecting the original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    bytes: Vec<u8>,
}

impl Buffer {
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Reserves room for at least `additional` more bytes.
    pub fn grow(&mut self, additional: usize) {
        self.bytes.reserve(additional);
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Empties the buffer, keeping its capacity.
    pub fn reset(&mut self) {
        self.bytes.clear();
    }

    /// Drops spare capacity so a long-lived buffer holds only what it uses.
    pub fn clip(&mut self) {
        self.bytes.shrink_to_fit();
    }

    /// Copies the contents of `other` onto the end of this buffer.
    pub fn extend_from(&mut self, other: &Self) {
        if !other.is_empty() {
            self.bytes.extend_from_slice(&other.bytes);
        }
    }

    /// Drains the buffer into `sink` with a single write.
    ///
    /// An empty buffer writes nothing. On success the buffer is emptied; on
    /// failure its contents are left as they were.
    ///
    /// # Errors
    /// Whatever the sink reports, or [`io::ErrorKind::WriteZero`] when the sink
    /// accepts fewer bytes than offered without reporting an error.
    pub fn write_to(&mut self, sink: &dyn Sink) -> io::Result<usize> {
        let len = self.bytes.len();
        if len == 0 {
            return Ok(0);
        }
        let written = sink.write(&self.bytes)?;
        if written < len {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "short write"));
        }
        self.reset();
        Ok(written)
    }

    pub fn append(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
    }

    pub fn append_str(&mut self, s: &str) {
        self.bytes.extend_from_slice(s.as_bytes());
    }

    pub fn append_byte(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    pub fn append_int(&mut self, i: i64) {
        let _ = write!(self, "{i}");
    }

    pub fn append_uint(&mut self, u: u64) {
        let _ = write!(self, "{u}");
    }

    /// Shortest representation that parses back to the same `f64`.
    pub fn append_float(&mut self, f: f64) {
        float::append_float(&mut self.bytes, f);
    }

    pub fn append_bool(&mut self, b: bool) {
        self.append_str(if b { "true" } else { "false" });
    }

    /// `1h2m3.5s` style below a day, `2d1h0m1s` above it.
    pub fn append_duration(&mut self, d: TimeDelta) {
        duration::append_duration(&mut self.bytes, d);
    }

    pub fn append_time<Tz>(&mut self, t: &DateTime<Tz>, format: &TimeFormat)
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let _ = write!(self, "{}", format.format(t));
    }

    /// Appends a line break.
    pub fn new_line(&mut self) {
        self.bytes.push(b'\n');
    }
}

impl fmt::Write for Buffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s);
        Ok(())
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<&str> for Buffer {
    fn from(s: &str) -> Self {
        Self {
            bytes: s.as_bytes().to_vec(),
        }
    }
}
