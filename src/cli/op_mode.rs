//! Operation mode and filename-extension heuristics (`spec.md` §6).

use crate::codec::Variant;

/// What the CLI does with the resolved input/output pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Determine compress vs. decompress from the input filename's extension.
    Auto,
    Compress,
    Decompress,
    /// Decompress but discard output (`-t`).
    Test,
}

/// Infers [`OpMode::Decompress`] when `filename` ends in a recognized
/// container extension, [`OpMode::Compress`] otherwise.
pub fn determine_op_mode(filename: &str) -> OpMode {
    if filename.ends_with(Variant::Lz4.extension()) || filename.ends_with(Variant::Zstd.extension()) {
        OpMode::Decompress
    } else {
        OpMode::Compress
    }
}

/// Infers the container variant from `filename`'s extension. Returns `None`
/// if neither recognized extension is present (caller falls back to a
/// default or an explicit `-z` flag).
pub fn variant_from_extension(filename: &str) -> Option<Variant> {
    if filename.ends_with(Variant::Zstd.extension()) {
        Some(Variant::Zstd)
    } else if filename.ends_with(Variant::Lz4.extension()) {
        Some(Variant::Lz4)
    } else {
        None
    }
}
