//! Big-endian read/write primitives over arbitrary byte streams.
//!
//! Every multi-byte field in the container format is big-endian, regardless
//! of host endianness (`spec.md` §4.1). Reads that return fewer bytes than
//! requested are short-read failures; a read of exactly zero bytes at a
//! stream boundary is not an error (see [`read_up_to`]).

use std::io::{Read, Write};

use crate::error::{map_output_err, Mc4Error, Result};

/// Reads exactly `buf.len()` bytes, treating any short read as a content-level
/// input failure. Use this once the caller already knows more data is
/// structurally required (e.g. mid-frame).
pub fn read_exact(r: &mut impl Read, buf: &mut [u8]) -> Result<()> {
    r.read_exact(buf)
        .map_err(|e| Mc4Error::Input(format!("short read: {e}")))
}

/// Fills `buf` as much as possible, stopping only at EOF. Returns the number
/// of bytes actually read, which may be anywhere from `0` to `buf.len()`.
/// Never itself treats a partial fill as an error — callers that know a
/// partial fill means something specific (clean end-of-stream vs. truncated
/// structure) classify the returned count themselves.
pub fn read_up_to(r: &mut impl Read, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = r.read(&mut buf[filled..]).map_err(Mc4Error::from)?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

#[inline]
pub fn read_u32(r: &mut impl Read) -> Result<u32> {
    let mut buf = [0u8; 4];
    read_exact(r, &mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

#[inline]
pub fn write_u32(w: &mut impl Write, value: u32) -> Result<()> {
    w.write_all(&value.to_be_bytes()).map_err(map_output_err)
}

/// Reads a variable-length payload of `len` bytes, failing with `Input` on a
/// short read.
pub fn read_vec(r: &mut impl Read, len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    read_exact(r, &mut buf)?;
    Ok(buf)
}
