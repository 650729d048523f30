#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Layouts that parse must also render without panicking
    let _ = conslog::TimeFormat::parse(data);
    let sink = conslog::MemorySink::new();
    let logger = conslog::Logger::builder()
        .sink(sink)
        .no_color(true)
        .time_format(data)
        .build();
    logger.info("tick", &[]);
});
