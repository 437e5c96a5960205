//! Streaming encoder: chunks an input reader into blocks of at most
//! `BLOCK_MAX` bytes and writes a complete, self-contained stream
//! (`spec.md` §4.5).

use std::io::{Read, Write};

use crate::codec::{CompressionLevel, Variant};
use crate::config::{BLOCK_MAX, HEADER_SIZE};
use crate::error::Result;
use crate::format::{write_block, write_end_marker, write_footer, BlockIndex, Header};
use crate::ioprim::read_up_to;

/// Drives one complete stream's worth of encoding: header, blocks, end
/// marker, footer. Holds the resources a single `encode_stream` call needs
/// and nothing else — no cross-stream state, per `spec.md` §5.
pub struct Encoder {
    variant: Variant,
    level: CompressionLevel,
    index: BlockIndex,
}

impl Encoder {
    pub fn new(variant: Variant, level: CompressionLevel) -> Self {
        Encoder { variant, level, index: BlockIndex::new() }
    }

    /// Reads all of `src`, writing one complete stream to `dst`. Returns the
    /// number of blocks written.
    pub fn encode_stream(mut self, src: &mut impl Read, dst: &mut impl Write) -> Result<usize> {
        Header::new(self.variant).write(dst)?;

        let mut offset = HEADER_SIZE as u64;
        let mut buf = vec![0u8; BLOCK_MAX];
        let mut n_blocks = 0usize;

        loop {
            let filled = read_up_to(src, &mut buf)?;
            if filled == 0 {
                break;
            }
            self.index.push(offset);
            let written = write_block(dst, &buf[..filled], self.variant, self.level)?;
            offset += written;
            n_blocks += 1;
        }

        write_end_marker(dst)?;
        write_footer(dst, &self.index, self.variant)?;
        Ok(n_blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Decoder;
    use std::io::Cursor;

    #[test]
    fn empty_input_produces_header_end_marker_footer_only() {
        let mut src = Cursor::new(Vec::<u8>::new());
        let mut dst = Vec::new();
        let n = Encoder::new(Variant::Lz4, CompressionLevel::Fast)
            .encode_stream(&mut src, &mut dst)
            .unwrap();
        assert_eq!(n, 0);
        assert_eq!(dst.len(), HEADER_SIZE + 12 + 20);
    }

    #[test]
    fn single_block_roundtrips_through_decoder() {
        let payload = b"the quick brown fox jumps over the lazy dog".repeat(50);
        let mut src = Cursor::new(payload.clone());
        let mut dst = Vec::new();
        Encoder::new(Variant::Zstd, CompressionLevel::Medium)
            .encode_stream(&mut src, &mut dst)
            .unwrap();

        let mut cur = Cursor::new(dst);
        let decoded = Decoder::decode_one(&mut cur).unwrap().expect("non-empty stream");
        assert_eq!(decoded, payload);
    }

    #[test]
    fn multi_block_input_splits_at_block_max() {
        let payload = vec![7u8; BLOCK_MAX * 2 + 10];
        let mut src = Cursor::new(payload.clone());
        let mut dst = Vec::new();
        let n = Encoder::new(Variant::Lz4, CompressionLevel::Fast)
            .encode_stream(&mut src, &mut dst)
            .unwrap();
        assert_eq!(n, 3);

        let mut cur = Cursor::new(dst);
        let decoded = Decoder::decode_one(&mut cur).unwrap().unwrap();
        assert_eq!(decoded, payload);
    }
}
