//! A splittable, block-oriented compressed container format, in two
//! codec-backed variants ("4mc" over LZ4, "4mz" over Zstandard) that share
//! identical framing, indexing, and integrity rules.

pub mod cli;
pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod io;
pub mod ioprim;
pub mod xxhash;

pub use codec::{CompressionLevel, Variant};
pub use engine::{decode_all, Decoder, Encoder};
pub use error::{Mc4Error, Result};
