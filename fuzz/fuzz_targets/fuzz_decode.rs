#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = zenbmp::Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    // Must never panic
    let _ = zenbmp::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable);
});
