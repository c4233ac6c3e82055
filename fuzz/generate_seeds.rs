#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PBM 3x2, plain and raw
    fs::write(format!("{dir}/pbm_3x2.pbm"), b"P1\n3 2\n1 0 1\n0 1 0\n").unwrap();
    fs::write(format!("{dir}/pbm_raw_9x2.pbm"), b"P4\n9 2\n\xff\x80\x55\x00").unwrap();

    // PGM 3x2
    fs::write(format!("{dir}/pgm_3x2.pgm"), b"P2\n3 2\n255\n0 64 128\n192 255 100\n").unwrap();
    fs::write(format!("{dir}/pgm_raw_3x2.pgm"), b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64").unwrap();

    // PPM 2x2
    fs::write(format!("{dir}/ppm_2x1.ppm"), b"P3\n2 1\n255\n255 0 0\n0 0 255\n").unwrap();
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/ppm_raw_2x2.ppm"), ppm).unwrap();

    // Comments and small max-values
    fs::write(format!("{dir}/pgm_comments.pgm"), b"P2\n# hand made\n2 1\n# max\n15\n3 15\n").unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/p5_no_maxval.bin"), b"P5\n1 1\n").unwrap();
    fs::write(format!("{dir}/p4_short.bin"), b"P4\n16 16\n\xff").unwrap();
    fs::write(format!("{dir}/p2_over_max.bin"), b"P2\n1 1\n7\n8\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
