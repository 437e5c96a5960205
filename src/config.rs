//! Compile-time configuration constants for the container format.

/// Hard upper bound on a block's `uncompressed_size` and `stored_size`, for
/// both container variants, in format version 1. Never raise this past
/// 4 GiB without a new footer delta width — see the design note in
/// `format::footer`.
pub const BLOCK_MAX: usize = 4 * 1024 * 1024;

/// Byte length of the stream header (magic + version + checksum).
pub const HEADER_SIZE: usize = 12;

/// Byte length of a block frame (uncompressed_size + stored_size + checksum).
pub const FRAME_SIZE: usize = 12;

/// Fixed footer length excluding the per-block delta table.
pub const FOOTER_FIXED_SIZE: usize = 20;

/// Only supported stream format version.
pub const FORMAT_VERSION: u32 = 1;

/// Default compression level selected by the CLI when no `-1`..`-4` flag is given.
pub const DEFAULT_LEVEL: crate::codec::CompressionLevel = crate::codec::CompressionLevel::Fast;
