#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on any style spec, including bad hex and stray separators
    if let Ok(style) = conslog::Style::parse(data) {
        let _ = style.as_str().len();
    }
});
