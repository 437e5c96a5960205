//! Codec adapter — a uniform interface over the LZ4 and Zstandard block
//! codecs (`spec.md` §4.2).
//!
//! The byte-level compression algorithms themselves are out of scope for
//! this crate (`spec.md` §1 treats them as black-box primitives); this
//! module wraps the `lz4_flex` and `zstd` crates behind the
//! `compress_bounded` / `decompress_exact` contract the frame codec needs.

mod lz4;
mod zstd_codec;

use crate::error::Result;

/// The four ordinal compression levels from `spec.md` §4.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    Fast,
    Medium,
    High,
    Ultra,
}

impl CompressionLevel {
    /// Parses the CLI's `-1`..`-4` ordinal into a level. Returns `None` for
    /// anything outside `1..=4`.
    pub fn from_ordinal(n: u32) -> Option<Self> {
        match n {
            1 => Some(CompressionLevel::Fast),
            2 => Some(CompressionLevel::Medium),
            3 => Some(CompressionLevel::High),
            4 => Some(CompressionLevel::Ultra),
            _ => None,
        }
    }

    /// zstd level used for this ordinal, per the table in `spec.md` §4.2.
    fn zstd_level(self) -> i32 {
        match self {
            CompressionLevel::Fast => 1,
            CompressionLevel::Medium => 3,
            CompressionLevel::High => 6,
            CompressionLevel::Ultra => 12,
        }
    }
}

/// The two container variants, distinguished by magic number (`spec.md` §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// "4mc" — LZ4-backed.
    Lz4,
    /// "4mz" — Zstandard-backed.
    Zstd,
}

impl Variant {
    pub const LZ4_MAGIC: u32 = 0x344D_4300;
    pub const ZSTD_MAGIC: u32 = 0x344D_5A00;

    pub fn magic(self) -> u32 {
        match self {
            Variant::Lz4 => Self::LZ4_MAGIC,
            Variant::Zstd => Self::ZSTD_MAGIC,
        }
    }

    /// Resolves a magic number read from a stream header. `None` for any
    /// value other than the two recognized constants (`spec.md` §8 "Header
    /// integrity": any other magic is a `ContentError`).
    pub fn from_magic(magic: u32) -> Option<Self> {
        match magic {
            Self::LZ4_MAGIC => Some(Variant::Lz4),
            Self::ZSTD_MAGIC => Some(Variant::Zstd),
            _ => None,
        }
    }

    /// Filename extension used by the CLI's heuristics (`spec.md` §6).
    pub fn extension(self) -> &'static str {
        match self {
            Variant::Lz4 => ".4mc",
            Variant::Zstd => ".4mz",
        }
    }

    fn codec(self) -> &'static dyn Codec {
        match self {
            Variant::Lz4 => &lz4::Lz4Codec,
            Variant::Zstd => &zstd_codec::ZstdCodec,
        }
    }

    /// Attempts to compress `src` into a buffer of at most `cap` bytes.
    /// Returns `Ok(None)` when the compressed form would not fit — the
    /// frame codec's signal to fall back to storing the block verbatim
    /// (`spec.md` §4.3).
    pub fn compress_bounded(
        self,
        src: &[u8],
        level: CompressionLevel,
        cap: usize,
    ) -> Result<Option<Vec<u8>>> {
        self.codec().compress_bounded(src, level, cap)
    }

    /// Decompresses `src`, requiring the result to be exactly
    /// `uncompressed_size` bytes.
    pub fn decompress_exact(self, src: &[u8], uncompressed_size: usize) -> Result<Vec<u8>> {
        self.codec().decompress_exact(src, uncompressed_size)
    }
}

/// Object-safe codec primitive implemented once per variant.
trait Codec {
    fn compress_bounded(
        &self,
        src: &[u8],
        level: CompressionLevel,
        cap: usize,
    ) -> Result<Option<Vec<u8>>>;

    fn decompress_exact(&self, src: &[u8], uncompressed_size: usize) -> Result<Vec<u8>>;
}
