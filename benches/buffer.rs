use chrono::{Local, TimeDelta};
use conslog::{Buffer, BufferPool, TimeFormat};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_append(c: &mut Criterion) {
    let data = b"foobarbaz";
    let mut group = c.benchmark_group("Buffer::append");

    group.bench_function("vec", |b| {
        let mut v: Vec<u8> = Vec::with_capacity(2048);
        b.iter(|| {
            v.extend_from_slice(black_box(data));
            v.push(b'.');
            v.clear();
        });
    });

    group.bench_function("buffer", |b| {
        let mut buf = Buffer::with_capacity(2048);
        b.iter(|| {
            buf.append(black_box(data));
            buf.append_byte(b'.');
            buf.reset();
        });
    });

    group.finish();
}

fn bench_duration(c: &mut Criterion) {
    let d = TimeDelta::hours(12)
        + TimeDelta::minutes(13)
        + TimeDelta::seconds(43)
        + TimeDelta::milliseconds(12);
    let mut group = c.benchmark_group("Buffer::append_duration");

    group.bench_function("display", |b| {
        let mut s = String::with_capacity(2048);
        b.iter(|| {
            s.push_str(&black_box(d).to_string());
            s.clear();
        });
    });

    group.bench_function("append", |b| {
        let mut buf = Buffer::with_capacity(2048);
        b.iter(|| {
            buf.append_duration(black_box(d));
            buf.reset();
        });
    });

    group.finish();
}

fn bench_scalars(c: &mut Criterion) {
    let now = Local::now();
    let format = TimeFormat::default();
    let mut buf = Buffer::with_capacity(2048);

    c.bench_function("Buffer::append_float", |b| {
        b.iter(|| {
            buf.append_float(black_box(23.7));
            buf.reset();
        });
    });
    c.bench_function("Buffer::append_time", |b| {
        b.iter(|| {
            buf.append_time(black_box(&now), &format);
            buf.reset();
        });
    });
}

fn bench_pool(c: &mut Criterion) {
    let pool = BufferPool::new(8);
    c.bench_function("BufferPool::acquire", |b| {
        b.iter(|| {
            let mut buf = pool.acquire();
            buf.append_str(black_box("hello"));
        });
    });
}

criterion_group!(benches, bench_append, bench_duration, bench_scalars, bench_pool);
criterion_main!(benches);
