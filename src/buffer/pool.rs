//! Free-list of reusable [`Buffer`]s with an RAII guard.

use super::Buffer;
use parking_lot::Mutex;
use std::ops::{Deref, DerefMut};

/// Buffers that grew past this are dropped instead of pooled, so one huge
/// line does not pin a large allocation for the rest of the process.
pub const MAX_RETAINED_CAPACITY: usize = 16 * 1024;

/// Free-list bound for [`BufferPool::global`].
pub const DEFAULT_MAX_BUFFERS: usize = 64;

static GLOBAL: BufferPool = BufferPool::new(DEFAULT_MAX_BUFFERS);

/// Thread-safe stack of idle buffers. The lock is held only for a push or a
/// pop, never while a buffer is in use.
#[derive(Debug)]
pub struct BufferPool {
    buffers: Mutex<Vec<Buffer>>,
    max_buffers: usize,
}

impl BufferPool {
    #[must_use]
    pub const fn new(max_buffers: usize) -> Self {
        Self {
            buffers: Mutex::new(Vec::new()),
            max_buffers,
        }
    }

    /// The process-wide pool shared by every handler.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Pops an idle buffer, or allocates a fresh one when none is left.
    /// The buffer goes back to the pool when the guard drops.
    #[must_use]
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let buffer = self.buffers.lock().pop().unwrap_or_default();
        PooledBuffer {
            buffer,
            pool: Some(self),
        }
    }

    fn release(&self, mut buffer: Buffer) {
        if buffer.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }
        buffer.reset();
        let mut buffers = self.buffers.lock();
        if buffers.len() < self.max_buffers {
            buffers.push(buffer);
        }
    }

    /// Idle buffers currently held.
    #[must_use]
    pub fn available(&self) -> usize {
        self.buffers.lock().len()
    }

    #[must_use]
    pub const fn max_buffers(&self) -> usize {
        self.max_buffers
    }
}

/// Exclusive use of one pooled buffer for the lifetime of the guard.
#[derive(Debug)]
pub struct PooledBuffer<'a> {
    buffer: Buffer,
    pool: Option<&'a BufferPool>,
}

impl PooledBuffer<'_> {
    /// Drops the buffer without handing it back to the pool.
    pub fn discard(mut self) {
        self.pool = None;
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = Buffer;

    fn deref(&self) -> &Buffer {
        &self.buffer
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        if let Some(pool) = self.pool.take() {
            pool.release(std::mem::take(&mut self.buffer));
        }
    }
}
