//! Black-box round-trip coverage across both container variants and all
//! four compression levels.

use std::io::Cursor;

use mc4::{CompressionLevel, Decoder, Encoder, Variant};

fn roundtrip(payload: &[u8], variant: Variant, level: CompressionLevel) {
    let mut encoded = Vec::new();
    Encoder::new(variant, level)
        .encode_stream(&mut Cursor::new(payload.to_vec()), &mut encoded)
        .unwrap();

    let mut cur = Cursor::new(encoded);
    let decoded = Decoder::decode_one(&mut cur).unwrap().unwrap();
    assert_eq!(decoded, payload);
}

#[test]
fn empty_input_all_variants_and_levels() {
    for variant in [Variant::Lz4, Variant::Zstd] {
        for level in [
            CompressionLevel::Fast,
            CompressionLevel::Medium,
            CompressionLevel::High,
            CompressionLevel::Ultra,
        ] {
            roundtrip(b"", variant, level);
        }
    }
}

#[test]
fn small_ascii_all_variants() {
    for variant in [Variant::Lz4, Variant::Zstd] {
        roundtrip(b"hello", variant, CompressionLevel::Fast);
    }
}

#[test]
fn highly_compressible_all_variants_and_levels() {
    let payload = vec![b'z'; 1 << 20];
    for variant in [Variant::Lz4, Variant::Zstd] {
        for level in [
            CompressionLevel::Fast,
            CompressionLevel::Medium,
            CompressionLevel::High,
            CompressionLevel::Ultra,
        ] {
            roundtrip(&payload, variant, level);
        }
    }
}

#[test]
fn pseudo_random_incompressible_payload() {
    // A deterministic pseudo-random byte sequence (linear congruential
    // generator) stands in for "uniformly random input" without pulling in
    // a `rand` dependency for a single test.
    let mut state: u32 = 0x1234_5678;
    let payload: Vec<u8> = (0..70_000)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect();
    roundtrip(&payload, Variant::Lz4, CompressionLevel::Fast);
    roundtrip(&payload, Variant::Zstd, CompressionLevel::Fast);
}
