//! Test corpus: roundtrips and transforms over various patterns, sizes, and formats.

use zenpnm::*;

fn checkerboard(w: usize, h: usize) -> Vec<Pixel> {
    let mut pixels = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            if (x + y) % 2 == 0 {
                pixels.push(Pixel { r: 200, g: 220, b: 240 });
            } else {
                pixels.push(Pixel { r: 10, g: 40, b: 70 });
            }
        }
    }
    pixels
}

fn noise_pattern(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    let mut state: u32 = 0xDEAD_BEEF;
    for b in bytes.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *b = state as u8;
    }
    bytes
}

fn noise_bits(w: usize, h: usize) -> Vec<bool> {
    noise_pattern(w * h).into_iter().map(|b| b & 1 == 1).collect()
}

fn noise_pixels(w: usize, h: usize) -> Vec<Pixel> {
    noise_pattern(w * h * 3)
        .chunks_exact(3)
        .map(|c| Pixel { r: c[0], g: c[1], b: c[2] })
        .collect()
}

const SIZES: &[(u32, u32)] = &[(1, 1), (1, 7), (7, 1), (3, 5), (8, 8), (13, 4), (33, 2)];

// ── Roundtrips ───────────────────────────────────────────────────────

#[test]
fn noise_pbm_all_sizes() {
    for &(w, h) in SIZES {
        let bits = noise_bits(w as usize, h as usize);
        for encoding in [Encoding::Ascii, Encoding::Binary] {
            let grid = Bitmap::from_samples(w, h, encoding, 1, bits.clone()).unwrap();
            let decoded = decode(&grid.encode()).unwrap();
            assert_eq!(decoded.into_bitmap().unwrap(), grid, "{w}x{h} {encoding:?}");
        }
    }
}

#[test]
fn noise_pgm_all_sizes() {
    for &(w, h) in SIZES {
        let gray = noise_pattern(w as usize * h as usize);
        for encoding in [Encoding::Ascii, Encoding::Binary] {
            let grid = Graymap::from_samples(w, h, encoding, 255, gray.clone()).unwrap();
            let decoded = decode(&grid.encode()).unwrap();
            assert_eq!(decoded.into_graymap().unwrap(), grid, "{w}x{h} {encoding:?}");
        }
    }
}

#[test]
fn noise_ppm_all_sizes() {
    for &(w, h) in SIZES {
        let pixels = noise_pixels(w as usize, h as usize);
        for encoding in [Encoding::Ascii, Encoding::Binary] {
            let grid = Pixmap::from_samples(w, h, encoding, 255, pixels.clone()).unwrap();
            let decoded = decode(&grid.encode()).unwrap();
            assert_eq!(decoded.into_pixmap().unwrap(), grid, "{w}x{h} {encoding:?}");
        }
    }
}

#[test]
fn checkerboard_ppm_roundtrip() {
    let pixels = checkerboard(8, 6);
    let grid = Pixmap::from_samples(8, 6, Encoding::Binary, 255, pixels.clone()).unwrap();
    let decoded = decode_ppm(&encode_ppm(&grid)).unwrap();
    assert_eq!(decoded.samples(), &pixels[..]);
    assert_eq!(decoded.at(0, 0), Pixel { r: 200, g: 220, b: 240 });
    assert_eq!(decoded.at(0, 1), Pixel { r: 10, g: 40, b: 70 });
}

#[test]
fn plain_and_raw_decode_identically() {
    let plain = b"P2\n3 2\n15\n0 3 7\n15 1 2\n";
    let raw = b"P5\n3 2\n15\n\x00\x03\x07\x0f\x01\x02";
    let a = decode_pgm(plain).unwrap();
    let b = decode_pgm(raw).unwrap();
    assert_eq!(a.samples(), b.samples());
    assert_eq!(a.max_value(), b.max_value());
    assert_eq!(a.with_encoding(Encoding::Binary), b);

    let plain = b"P3\n2 1\n255\n1 2 3 4 5 6\n";
    let raw = b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06";
    assert_eq!(
        decode_ppm(plain).unwrap().samples(),
        decode_ppm(raw).unwrap().samples()
    );
}

#[test]
fn comments_and_blank_lines_in_header() {
    let data = b"P2\n# created by hand\n\n3 1\n# max\n255\n1 2 3\n";
    let gray = decode_pgm(data).unwrap();
    assert_eq!(gray.samples(), [1, 2, 3]);

    let info = ImageInfo::from_bytes(data).unwrap();
    assert_eq!((info.width, info.height, info.max_value), (3, 1, 255));
}

#[test]
fn plain_ppm_tokens_may_span_lines() {
    let data = b"P3\n2 1\n255\n1 2\n3 4 5\n6\n";
    let pixels = decode_ppm(data).unwrap();
    assert_eq!(
        pixels.samples(),
        [Pixel { r: 1, g: 2, b: 3 }, Pixel { r: 4, g: 5, b: 6 }]
    );
}

#[test]
fn raw_pbm_odd_width_padding() {
    // 10 pixels per row: two bytes per row, the last six bits are padding
    let data = b"P4\n10 2\n\xff\xc0\x00\x3f";
    let bits = decode_pbm(data).unwrap();
    assert!(bits.rows().next().unwrap().iter().all(|&b| b));
    assert_eq!(
        bits.rows().nth(1).unwrap(),
        [false, false, false, false, false, false, false, false, false, false]
    );
    // padding bits are written as zero
    assert_eq!(&bits.encode()[b"P4\n10 2\n".len()..], b"\xff\xc0\x00\x00");
}

// ── Transforms ───────────────────────────────────────────────────────

#[test]
fn involutions_restore_original() {
    for &(w, h) in SIZES {
        let original =
            Pixmap::from_samples(w, h, Encoding::Binary, 255, noise_pixels(w as usize, h as usize))
                .unwrap();

        let mut grid = original.clone();
        grid.invert();
        grid.invert();
        assert_eq!(grid, original, "invert {w}x{h}");

        grid.flip();
        grid.flip();
        assert_eq!(grid, original, "flip {w}x{h}");

        grid.flop();
        grid.flop();
        assert_eq!(grid, original, "flop {w}x{h}");
    }
}

#[test]
fn four_rotations_restore_original() {
    for &(w, h) in SIZES {
        let original = Bitmap::from_samples(
            w,
            h,
            Encoding::Ascii,
            1,
            noise_bits(w as usize, h as usize),
        )
        .unwrap();

        let once = original.clone().rotate90_cw();
        assert_eq!(once.size(), (w, h));

        let back = once.rotate90_cw().rotate90_cw().rotate90_cw();
        assert_eq!(back, original, "{w}x{h}");
    }
}

#[test]
fn two_rotations_equal_flip_and_flop() {
    let gray = noise_pattern(5 * 3);
    let original = Graymap::from_samples(5, 3, Encoding::Binary, 255, gray).unwrap();

    let rotated = original.clone().rotate90_cw().rotate90_cw();
    let mut mirrored = original;
    mirrored.flip();
    mirrored.flop();
    assert_eq!(rotated, mirrored);
}

#[test]
fn rotation_places_corners() {
    // 2 rows, 3 cols
    let grid =
        Graymap::from_samples(3, 2, Encoding::Ascii, 255, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let rotated = grid.rotate90_cw();
    assert_eq!(rotated.width(), 2);
    assert_eq!(rotated.height(), 3);
    assert_eq!(rotated.samples(), [4, 1, 5, 2, 6, 3]);
    assert_eq!(encode_pgm(&rotated), b"P2\n2 3\n255\n4 1\n5 2\n6 3\n");
}

#[test]
fn invert_respects_max_value() {
    let mut gray = decode_pgm(b"P2\n3 1\n15\n0 5 15\n").unwrap();
    gray.invert();
    assert_eq!(gray.samples(), [15, 10, 0]);

    let mut bits = decode_pbm(b"P1\n3 1\n1 0 1\n").unwrap();
    bits.invert();
    assert_eq!(encode_pbm(&bits), b"P1\n3 1\n0 1 0\n");
}

#[test]
fn rescale_then_convert() {
    let mut color = decode_ppm(b"P3\n2 1\n255\n255 255 255 0 30 60\n").unwrap();
    color.rescale_max_value(15).unwrap();
    assert_eq!(color.max_value(), 15);
    assert_eq!(
        color.samples(),
        [Pixel { r: 15, g: 15, b: 15 }, Pixel { r: 0, g: 2, b: 4 }]
    );

    let gray = color.to_graymap();
    assert_eq!(gray.max_value(), 15);
    assert_eq!(gray.samples(), [15, 2]);

    let bits = color.to_bitmap();
    assert_eq!(bits.samples(), [false, true]);
    assert_eq!(bits, gray.to_bitmap());
    assert_eq!(encode_pbm(&bits), b"P1\n2 1\n0 1\n");
}

#[test]
fn rescale_rejects_bitmap_and_zero() {
    let mut bits = decode_pbm(b"P1\n1 1\n1\n").unwrap();
    assert!(matches!(
        bits.rescale_max_value(255),
        Err(PnmError::InvalidState(_))
    ));

    let mut gray = decode_pgm(b"P5\n1 1\n255\n\x80").unwrap();
    assert!(matches!(gray.set_max_value(0), Err(PnmError::InvalidState(_))));
    assert_eq!(gray.max_value(), 255);
    assert_eq!(gray.samples(), [128]);
}

#[test]
fn edits_survive_encoding() {
    let mut gray = Graymap::new(2, 2, Encoding::Binary).unwrap();
    gray.set(1, 0, 200).unwrap();
    assert!(matches!(
        gray.set(2, 0, 1),
        Err(PnmError::OutOfBounds { row: 2, col: 0 })
    ));
    gray.set_magic_number(MagicNumber::P2).unwrap();
    assert!(matches!(
        gray.set_magic_number(MagicNumber::P6),
        Err(PnmError::InvalidMagicNumber(_))
    ));

    let decoded = decode_pgm(&encode_pgm(&gray)).unwrap();
    assert_eq!(decoded.magic_number(), MagicNumber::P2);
    assert_eq!(decoded.get(1, 0), Some(200));
    assert_eq!(decoded.get(0, 0), Some(0));
    assert_eq!(decoded.get(0, 2), None);
}
