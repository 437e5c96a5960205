//! Thin wrapper around the `xxhash-rust` crate providing the XXH32 API used
//! for header, block, and footer integrity checks throughout this crate.
//!
//! Every checksum in the container format uses seed 0.

/// One-shot XXH32 hash with the given seed.
///
/// # Parity vectors
/// * `xxh32(b"", 0)` == `0x02CC5D05`
#[inline]
pub fn xxh32(data: &[u8], seed: u32) -> u32 {
    xxhash_rust::xxh32::xxh32(data, seed)
}
