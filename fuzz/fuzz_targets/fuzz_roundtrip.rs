#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpnm::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_memory_bytes: Some(1 << 24),
        ..Default::default()
    };
    // If we can decode it, re-encoding and decoding again must produce an identical image
    let Ok(decoded) = DecodeRequest::new(data).with_limits(&limits).decode() else {
        return;
    };

    let reencoded = encode(&decoded);
    let Ok(decoded2) = decode(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };
    assert_eq!(decoded, decoded2, "roundtrip mismatch");

    // The other sub-format of the same depth must carry the same samples
    let flipped = match decoded.magic_number().encoding() {
        Encoding::Ascii => Encoding::Binary,
        Encoding::Binary => Encoding::Ascii,
    };
    let other = EncodeRequest::new().with_encoding(flipped).encode_image(&decoded);
    let Ok(decoded3) = decode(&other) else {
        panic!("{flipped:?} re-encode failed to decode");
    };
    assert_eq!(decoded.size(), decoded3.size());
    assert_eq!(decoded.max_value(), decoded3.max_value());
    assert_eq!(decoded3.magic_number().encoding(), flipped);
});
