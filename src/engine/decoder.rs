//! Streaming decoder for a single container stream (`spec.md` §4.6).

use std::io::Read;

use crate::error::Result;
use crate::format::{read_block, read_footer, Block, Header};

pub struct Decoder;

impl Decoder {
    /// Decodes exactly one stream from `r`: header, blocks until the end
    /// marker, then the footer. Returns `Ok(None)` if `r` is at a clean
    /// boundary (no header bytes available at all) — the multi-stream
    /// driver's loop-termination signal (`spec.md` §4.7).
    ///
    /// The footer's per-block deltas are validated but not otherwise used
    /// here; sequential decoding never needs random access into the stream
    /// it is already reading linearly.
    pub fn decode_one(r: &mut impl Read) -> Result<Option<Vec<u8>>> {
        let header = match Header::read(r)? {
            Some(h) => h,
            None => return Ok(None),
        };

        let mut out = Vec::new();
        loop {
            match read_block(r, header.variant)? {
                Block::Data(chunk) => out.extend_from_slice(&chunk),
                Block::End => break,
            }
        }

        read_footer(r, header.variant)?;
        Ok(Some(out))
    }
}
