//! Block frame encode/decode and the incompressible-block fallback
//! (`spec.md` §4.3).

use std::io::{Read, Write};

use crate::codec::{CompressionLevel, Variant};
use crate::config::BLOCK_MAX;
use crate::error::{map_output_err, Mc4Error, Result};
use crate::ioprim::{read_u32, write_u32};
use crate::xxhash;

/// The all-zero 12-byte frame that terminates a stream's block sequence.
pub fn write_end_marker(w: &mut impl Write) -> Result<()> {
    write_u32(w, 0)?;
    write_u32(w, 0)?;
    write_u32(w, 0)
}

/// Encodes one block: attempts the codec, falling back to storing the raw
/// bytes verbatim when compression does not shrink the input by at least one
/// byte. Returns the number of bytes written to `w` (frame + payload), which
/// the caller uses to advance the block-index accumulator.
pub fn write_block(
    w: &mut impl Write,
    raw: &[u8],
    variant: Variant,
    level: CompressionLevel,
) -> Result<u64> {
    debug_assert!(!raw.is_empty() && raw.len() <= BLOCK_MAX);

    let uncompressed_size = raw.len() as u32;
    let cap = raw.len() - 1;
    let compressed = variant.compress_bounded(raw, level, cap)?;

    let (stored_size, payload): (u32, &[u8]) = match &compressed {
        Some(c) if !c.is_empty() => (c.len() as u32, c.as_slice()),
        _ => (uncompressed_size, raw),
    };
    let checksum = xxhash::xxh32(payload, 0);

    write_u32(w, uncompressed_size)?;
    write_u32(w, stored_size)?;
    write_u32(w, checksum)?;
    w.write_all(payload).map_err(map_output_err)?;

    Ok(12 + payload.len() as u64)
}

/// Outcome of reading one block frame.
pub enum Block {
    /// A decoded, already-checksum-verified payload of exactly
    /// `uncompressed_size` bytes.
    Data(Vec<u8>),
    /// The in-band terminator — no payload follows.
    End,
}

/// Reads and fully validates one block (frame + payload), per
/// `spec.md` §4.3's read sequence.
pub fn read_block(r: &mut impl Read, variant: Variant) -> Result<Block> {
    let uncompressed_size = read_u32(r)?;
    let stored_size = read_u32(r)?;
    let checksum = read_u32(r)?;

    if uncompressed_size == 0 && stored_size == 0 && checksum == 0 {
        return Ok(Block::End);
    }

    if stored_size == 0 || stored_size as usize > BLOCK_MAX {
        return Err(Mc4Error::content(format!(
            "stored_size {stored_size} out of range (0, {BLOCK_MAX}]"
        )));
    }
    if uncompressed_size == 0 || uncompressed_size as usize > BLOCK_MAX {
        return Err(Mc4Error::content(format!(
            "uncompressed_size {uncompressed_size} out of range (0, {BLOCK_MAX}]"
        )));
    }

    let mut payload = vec![0u8; stored_size as usize];
    r.read_exact(&mut payload)
        .map_err(|e| Mc4Error::Input(format!("short read of block payload: {e}")))?;

    if xxhash::xxh32(&payload, 0) != checksum {
        return Err(Mc4Error::content("block payload checksum mismatch"));
    }

    if stored_size == uncompressed_size {
        Ok(Block::Data(payload))
    } else {
        let decoded = variant.decompress_exact(&payload, uncompressed_size as usize)?;
        Ok(Block::Data(decoded))
    }
}
