#![no_main]
use conslog::{Attr, Level, Logger, MemorySink};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str, &str, i64, f64)| {
    let (group, key, msg, n, f) = data;
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .sink(sink.clone())
        .level(Level::new(-100))
        .build()
        .with_group(group)
        .with(&[Attr::string(key, msg)]);
    logger.log(
        Level::new(i32::try_from(n % 64).unwrap_or(0)),
        msg,
        &[
            Attr::int(key, n),
            Attr::float(key, f),
            Attr::group(group, vec![Attr::string(key, msg)]),
        ],
    );
    // Every record renders as exactly one line
    let out = sink.take();
    assert!(out.ends_with('\n'));
});
