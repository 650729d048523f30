#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on any config content
    let _ = conslog::config::extract_sources(data);
    let _ = conslog::Config::parse(data);
});
