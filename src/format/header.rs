//! Stream header: 12 bytes of magic, version, and a header checksum
//! (`spec.md` §3).

use std::io::{Read, Write};

use crate::codec::Variant;
use crate::config::FORMAT_VERSION;
use crate::error::{map_output_err, Mc4Error, Result};
use crate::ioprim::{read_u32, read_up_to, write_u32};
use crate::xxhash;

#[derive(Debug, Clone, Copy)]
pub struct Header {
    pub variant: Variant,
}

impl Header {
    pub fn new(variant: Variant) -> Self {
        Header { variant }
    }

    /// Writes the 12-byte header: magic, version, then
    /// `xxh32(magic ++ version, seed=0)`.
    pub fn write(&self, w: &mut impl Write) -> Result<()> {
        let mut checksummed = [0u8; 8];
        checksummed[0..4].copy_from_slice(&self.variant.magic().to_be_bytes());
        checksummed[4..8].copy_from_slice(&FORMAT_VERSION.to_be_bytes());
        let checksum = xxhash::xxh32(&checksummed, 0);

        w.write_all(&checksummed).map_err(map_output_err)?;
        write_u32(w, checksum)
    }

    /// Reads and validates a stream header.
    ///
    /// Returns `Ok(None)` if the stream ended before any bytes were read —
    /// the multi-stream driver's clean-EOF signal (`spec.md` §4.6 step 1).
    /// A partial magic (1-3 bytes available) is a `ContentError`, matching
    /// `spec.md`'s "fewer than 4 bytes available" rule.
    pub fn read(r: &mut impl Read) -> Result<Option<Self>> {
        let mut magic_buf = [0u8; 4];
        let n = read_up_to(r, &mut magic_buf)?;
        if n == 0 {
            return Ok(None);
        }
        if n < magic_buf.len() {
            return Err(Mc4Error::content(format!(
                "truncated header: only {n} byte(s) available, need 4 for magic"
            )));
        }

        let magic = u32::from_be_bytes(magic_buf);
        let variant = Variant::from_magic(magic)
            .ok_or_else(|| Mc4Error::content(format!("unknown magic number {magic:#010x}")))?;

        let version = read_u32(r)?;
        let checksum = read_u32(r)?;

        if version != FORMAT_VERSION {
            return Err(Mc4Error::content(format!(
                "unsupported format version {version}"
            )));
        }

        let mut checksummed = [0u8; 8];
        checksummed[0..4].copy_from_slice(&magic_buf);
        checksummed[4..8].copy_from_slice(&version.to_be_bytes());
        if xxhash::xxh32(&checksummed, 0) != checksum {
            return Err(Mc4Error::content("header checksum mismatch"));
        }

        Ok(Some(Header { variant }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let mut buf = Vec::new();
        Header::new(Variant::Lz4).write(&mut buf).unwrap();
        assert_eq!(buf.len(), crate::config::HEADER_SIZE);

        let mut cur = Cursor::new(buf);
        let header = Header::read(&mut cur).unwrap().unwrap();
        assert_eq!(header.variant, Variant::Lz4);
    }

    #[test]
    fn empty_stream_is_clean_eof() {
        let mut cur = Cursor::new(Vec::<u8>::new());
        assert!(Header::read(&mut cur).unwrap().is_none());
    }

    #[test]
    fn truncated_magic_is_content_error() {
        let mut cur = Cursor::new(vec![0x34u8, 0x4D, 0x43]);
        let err = Header::read(&mut cur).unwrap_err();
        assert!(matches!(err, Mc4Error::Content(_)));
    }

    #[test]
    fn single_byte_magic_is_content_error() {
        let mut cur = Cursor::new(vec![0x34u8]);
        let err = Header::read(&mut cur).unwrap_err();
        assert!(matches!(err, Mc4Error::Content(_)));
    }

    #[test]
    fn unknown_magic_is_content_error() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&0xAAAA_AAAAu32.to_be_bytes());
        buf.extend_from_slice(&1u32.to_be_bytes());
        buf.extend_from_slice(&0u32.to_be_bytes());
        let mut cur = Cursor::new(buf);
        let err = Header::read(&mut cur).unwrap_err();
        assert!(matches!(err, Mc4Error::Content(_)));
    }

    #[test]
    fn bad_version_is_content_error() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&Variant::Lz4.magic().to_be_bytes());
        buf.extend_from_slice(&2u32.to_be_bytes());
        let mut checksummed = [0u8; 8];
        checksummed[0..4].copy_from_slice(&Variant::Lz4.magic().to_be_bytes());
        checksummed[4..8].copy_from_slice(&2u32.to_be_bytes());
        buf.extend_from_slice(&xxhash::xxh32(&checksummed, 0).to_be_bytes());
        let mut cur = Cursor::new(buf);
        assert!(Header::read(&mut cur).is_err());
    }

    #[test]
    fn flipped_checksum_bit_is_content_error() {
        let mut buf = Vec::new();
        Header::new(Variant::Zstd).write(&mut buf).unwrap();
        let last = buf.len() - 1;
        buf[last] ^= 0x01;
        let mut cur = Cursor::new(buf);
        assert!(Header::read(&mut cur).is_err());
    }
}
