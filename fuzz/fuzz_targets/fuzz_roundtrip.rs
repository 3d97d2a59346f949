#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    let Ok(reencoded) = EncodeRequest::new().encode(&decoded.buffer, enough::Unstoppable) else {
        return;
    };
    let Ok(decoded2) = decode(reencoded.as_slice(), enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.buffer, decoded2.buffer, "roundtrip pixel mismatch");
    assert_eq!(decoded2.source_bpp(), 24);
});
