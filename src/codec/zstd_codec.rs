//! Zstandard block codec backed by the `zstd` crate's `bulk` API, which
//! binds directly to the reference `libzstd` compression levels used by
//! `spec.md` §4.2's level-mapping table (1, 3, 6, 12).

use super::{Codec, CompressionLevel};
use crate::error::{Mc4Error, Result};

pub(super) struct ZstdCodec;

impl Codec for ZstdCodec {
    fn compress_bounded(
        &self,
        src: &[u8],
        level: CompressionLevel,
        cap: usize,
    ) -> Result<Option<Vec<u8>>> {
        let mut dst = vec![0u8; cap];
        match zstd::bulk::compress_to_buffer(src, &mut dst, level.zstd_level()) {
            Ok(n) => {
                dst.truncate(n);
                Ok(Some(dst))
            }
            Err(_) => Ok(None),
        }
    }

    fn decompress_exact(&self, src: &[u8], uncompressed_size: usize) -> Result<Vec<u8>> {
        let mut dst = vec![0u8; uncompressed_size];
        let n = zstd::bulk::decompress_to_buffer(src, &mut dst)
            .map_err(|e| Mc4Error::content(format!("zstd block decode failed: {e}")))?;
        if n != uncompressed_size {
            return Err(Mc4Error::content(format!(
                "zstd block decoded to {n} bytes, expected {uncompressed_size}"
            )));
        }
        Ok(dst)
    }
}
