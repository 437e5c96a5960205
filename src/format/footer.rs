//! Block-index accumulation and footer serialization (`spec.md` §3, §4.4).

use std::io::{Read, Write};

use crate::codec::Variant;
use crate::config::{FOOTER_FIXED_SIZE, FORMAT_VERSION};
use crate::error::{map_output_err, Mc4Error, Result};
use crate::ioprim::{read_u32, read_vec, write_u32};
use crate::xxhash;

/// Append-only sequence of absolute block-start offsets, recorded during
/// encoding. Backed by `Vec`'s own amortized-doubling growth, satisfying the
/// "any growable sequence primitive" note in `spec.md` §9 without a bespoke
/// buffer type.
#[derive(Debug, Default)]
pub struct BlockIndex {
    offsets: Vec<u64>,
}

impl BlockIndex {
    pub fn new() -> Self {
        BlockIndex { offsets: Vec::with_capacity(8) }
    }

    /// Records the absolute offset of a block about to be written.
    pub fn push(&mut self, offset: u64) {
        self.offsets.push(offset);
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Converts absolute offsets to the delta encoding in `spec.md` §3:
    /// `delta[0]` is the distance from stream start (offset 0) to block 0's
    /// start; each subsequent delta is the distance from the previous
    /// block's start to this one's.
    fn deltas(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.offsets.len());
        let mut prev = 0u64;
        for &off in &self.offsets {
            out.push((off - prev) as u32);
            prev = off;
        }
        out
    }
}

/// Writes the footer: `footer_size`, `footer_version`, the delta table,
/// `footer_size` repeated, the stream magic, then the checksum over every
/// preceding footer byte.
pub fn write_footer(w: &mut impl Write, index: &BlockIndex, variant: Variant) -> Result<()> {
    let deltas = index.deltas();
    let footer_size = (FOOTER_FIXED_SIZE + 4 * deltas.len()) as u32;

    let mut body = Vec::with_capacity(footer_size as usize);
    body.extend_from_slice(&footer_size.to_be_bytes());
    body.extend_from_slice(&FORMAT_VERSION.to_be_bytes());
    for d in &deltas {
        body.extend_from_slice(&d.to_be_bytes());
    }
    body.extend_from_slice(&footer_size.to_be_bytes());
    body.extend_from_slice(&variant.magic().to_be_bytes());

    let checksum = xxhash::xxh32(&body, 0);
    w.write_all(&body).map_err(map_output_err)?;
    write_u32(w, checksum)
}

/// Validated footer contents. The per-block deltas are retained for callers
/// that want split-read access, but sequential decoding never needs them
/// (`spec.md` §4.6 step 4).
#[derive(Debug)]
pub struct Footer {
    pub deltas: Vec<u32>,
}

/// Reads and validates a footer: `footer_size_repeat == footer_size`,
/// `stream_magic == header_magic`, and the trailing checksum matches
/// xxhash-32 over everything before it.
pub fn read_footer(r: &mut impl Read, header_variant: Variant) -> Result<Footer> {
    let footer_size = read_u32(r)?;
    if (footer_size as usize) < FOOTER_FIXED_SIZE || (footer_size as usize - FOOTER_FIXED_SIZE) % 4 != 0 {
        return Err(Mc4Error::content(format!(
            "implausible footer_size {footer_size}"
        )));
    }
    let n_blocks = (footer_size as usize - FOOTER_FIXED_SIZE) / 4;

    let footer_version = read_u32(r)?;
    if footer_version != FORMAT_VERSION {
        return Err(Mc4Error::content(format!(
            "unsupported footer_version {footer_version}"
        )));
    }

    let delta_bytes = read_vec(r, n_blocks * 4)?;
    let deltas: Vec<u32> = delta_bytes
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    let footer_size_repeat = read_u32(r)?;
    let stream_magic = read_u32(r)?;
    let footer_checksum = read_u32(r)?;

    if footer_size_repeat != footer_size {
        return Err(Mc4Error::content("footer_size_repeat mismatch"));
    }
    if stream_magic != header_variant.magic() {
        return Err(Mc4Error::content("footer stream_magic does not match header magic"));
    }

    let mut body = Vec::with_capacity(footer_size as usize);
    body.extend_from_slice(&footer_size.to_be_bytes());
    body.extend_from_slice(&footer_version.to_be_bytes());
    body.extend_from_slice(&delta_bytes);
    body.extend_from_slice(&footer_size_repeat.to_be_bytes());
    body.extend_from_slice(&stream_magic.to_be_bytes());

    if xxhash::xxh32(&body, 0) != footer_checksum {
        return Err(Mc4Error::content("footer checksum mismatch"));
    }

    Ok(Footer { deltas })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_index_footer_is_20_bytes() {
        let index = BlockIndex::new();
        let mut buf = Vec::new();
        write_footer(&mut buf, &index, Variant::Lz4).unwrap();
        assert_eq!(buf.len(), FOOTER_FIXED_SIZE);

        let mut cur = Cursor::new(buf);
        let footer = read_footer(&mut cur, Variant::Lz4).unwrap();
        assert!(footer.deltas.is_empty());
    }

    #[test]
    fn deltas_reproduce_absolute_offsets() {
        let mut index = BlockIndex::new();
        index.push(12);
        index.push(12 + 100);
        index.push(12 + 100 + 55);

        let mut buf = Vec::new();
        write_footer(&mut buf, &index, Variant::Zstd).unwrap();
        let mut cur = Cursor::new(buf);
        let footer = read_footer(&mut cur, Variant::Zstd).unwrap();

        assert_eq!(footer.deltas, vec![12, 100, 55]);
        let mut acc = 0u64;
        let mut absolute = Vec::new();
        for d in &footer.deltas {
            acc += *d as u64;
            absolute.push(acc);
        }
        assert_eq!(absolute, vec![12, 112, 167]);
    }

    #[test]
    fn footer_size_matches_block_count() {
        let mut index = BlockIndex::new();
        for i in 0..5 {
            index.push(i as u64 * 100);
        }
        let mut buf = Vec::new();
        write_footer(&mut buf, &index, Variant::Lz4).unwrap();
        assert_eq!(buf.len(), FOOTER_FIXED_SIZE + 4 * 5);
    }

    #[test]
    fn flipped_bit_in_footer_is_content_error() {
        let mut index = BlockIndex::new();
        index.push(12);
        let mut buf = Vec::new();
        write_footer(&mut buf, &index, Variant::Lz4).unwrap();
        let last = buf.len() - 1;
        buf[last] ^= 0x01;
        let mut cur = Cursor::new(buf);
        assert!(read_footer(&mut cur, Variant::Lz4).is_err());
    }

    #[test]
    fn wrong_variant_is_content_error() {
        let index = BlockIndex::new();
        let mut buf = Vec::new();
        write_footer(&mut buf, &index, Variant::Zstd).unwrap();
        let mut cur = Cursor::new(buf);
        assert!(read_footer(&mut cur, Variant::Lz4).is_err());
    }
}
