#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Auto-detect decode and header probe must never panic
    let _ = zenpnm::decode(data);
    let _ = zenpnm::ImageInfo::from_bytes(data);

    // Typed decodes reject other depths without panicking
    let _ = zenpnm::decode_pbm(data);
    let _ = zenpnm::decode_pgm(data);
    let _ = zenpnm::decode_ppm(data);

    // Tight limits must fail cleanly, not allocate
    let limits = zenpnm::Limits {
        max_pixels: Some(1 << 16),
        max_memory_bytes: Some(1 << 20),
        ..Default::default()
    };
    let _ = zenpnm::DecodeRequest::new(data).with_limits(&limits).decode();
});
