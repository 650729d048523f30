use conslog::BufferPool;
use conslog::buffer::MAX_RETAINED_CAPACITY;
use std::thread;

#[test]
fn guard_returns_buffer_on_drop() {
    let pool = BufferPool::new(2);
    {
        let mut a = pool.acquire();
        let mut b = pool.acquire();
        a.append_str("a");
        b.append_str("b");
    }
    assert_eq!(pool.available(), 2);
    assert!(pool.acquire().is_empty());
}

#[test]
fn discard_skips_the_pool() {
    let pool = BufferPool::new(2);
    let mut buf = pool.acquire();
    buf.append_str("unwanted");
    buf.discard();
    assert_eq!(pool.available(), 0);
}

#[test]
fn oversized_buffers_are_released_to_the_allocator() {
    let pool = BufferPool::new(2);
    {
        let mut buf = pool.acquire();
        buf.grow(MAX_RETAINED_CAPACITY + 1);
    }
    assert_eq!(pool.available(), 0);
}

#[test]
fn global_pool_is_bounded() {
    let pool = BufferPool::global();
    assert!(pool.max_buffers() > 0);
    assert!(pool.available() <= pool.max_buffers());
}

#[test]
fn shared_between_threads() {
    let pool = BufferPool::new(4);
    thread::scope(|s| {
        for i in 0..8 {
            let pool = &pool;
            s.spawn(move || {
                for _ in 0..100 {
                    let mut buf = pool.acquire();
                    buf.append_int(i);
                    assert_eq!(buf.len(), 1);
                }
            });
        }
    });
    assert!(pool.available() <= 4);
}
