//! Byte destinations a rendered line is drained into.
//!
//! Handlers are shared across threads and derived freely, so a sink is
//! written through `&self`. Whether concurrent writes are serialized is up to
//! the implementation: the `Mutex` impls serialize, `Stdout`/`Stderr` lock per
//! write, a `File` relies on the OS.

use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;

/// `Send + Sync` so one sink can back every handler derived from a root.
pub trait Sink: Send + Sync {
    /// Writes `buf` in a single call and returns how many bytes were accepted.
    ///
    /// # Errors
    /// Any I/O failure of the underlying destination.
    fn write(&self, buf: &[u8]) -> io::Result<usize>;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }
}

impl Sink for io::Stdout {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write_all(buf)?;
        Ok(buf.len())
    }
}

impl Sink for io::Stderr {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write_all(buf)?;
        Ok(buf.len())
    }
}

impl Sink for File {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self;
        file.write_all(buf)?;
        Ok(buf.len())
    }
}

impl Sink for io::Sink {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }
}

impl<W: Write + Send> Sink for Mutex<W> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write_all(buf)?;
        Ok(buf.len())
    }
}

impl<W: Write + Send> Sink for std::sync::Mutex<W> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        let mut writer = self
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        writer.write_all(buf)?;
        Ok(buf.len())
    }
}

/// Adapts a closure into a sink.
pub struct SinkFn<F>(pub F);

impl<F> Sink for SinkFn<F>
where
    F: Fn(&[u8]) -> io::Result<usize> + Send + Sync,
{
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        (self.0)(buf)
    }
}

/// In-memory sink whose clones share one byte vector.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Returns the contents and empties the sink.
    #[must_use]
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }
}
