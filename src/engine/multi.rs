//! Multi-stream driver: decodes a byte source that may hold more than one
//! concatenated container stream (`spec.md` §4.7).

use std::io::Read;

use crate::error::Result;
use crate::engine::Decoder;

/// Decodes every stream concatenated in `r` in order, writing each stream's
/// decoded bytes through `sink` as soon as it finishes. Stops cleanly when
/// `Decoder::decode_one` reports EOF at a stream boundary.
pub fn decode_all(r: &mut impl Read, mut sink: impl FnMut(Vec<u8>) -> Result<()>) -> Result<usize> {
    let mut n_streams = 0;
    loop {
        match Decoder::decode_one(r)? {
            Some(decoded) => {
                sink(decoded)?;
                n_streams += 1;
            }
            None => break,
        }
    }
    Ok(n_streams)
}
