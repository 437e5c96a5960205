//! Typed error model shared by every core component.
//!
//! The five kinds mirror `spec.md` §7 exactly. The core engines (codec
//! adapter, frame codec, encoder/decoder) never call `std::process::exit`
//! or print diagnostics themselves — they return an [`Mc4Error`] and leave
//! exit-code mapping and stderr output entirely to the CLI layer
//! (`cli::dispatch`), per the design note in `spec.md` §9.

use thiserror::Error;

/// Failure kinds produced by the container codec, its engines, and the CLI.
#[derive(Debug, Error)]
pub enum Mc4Error {
    /// Invalid command-line invocation. Raised only by the CLI layer.
    #[error("usage error: {0}")]
    Usage(String),

    /// Cannot open the input, or a structurally required byte range was
    /// short-read or failed to read at all.
    #[error("input error: {0}")]
    Input(String),

    /// Cannot open the output, or a write did not complete.
    #[error("output error: {0}")]
    Output(String),

    /// Structural corruption: unknown magic, unsupported version, a
    /// checksum mismatch, an oversized block, a malformed footer, or a
    /// codec decode failure.
    #[error("content error: {0}")]
    Content(String),

    /// A working-buffer allocation failed.
    #[error("resource error: {0}")]
    Resource(String),
}

impl Mc4Error {
    /// Maps this error to the exit code contract in `spec.md` §7 / §6.
    pub fn exit_code(&self) -> i32 {
        match self {
            Mc4Error::Usage(_) => 1,
            Mc4Error::Input(_) => 2,
            Mc4Error::Output(_) => 3,
            Mc4Error::Content(_) => 4,
            Mc4Error::Resource(_) => 1,
        }
    }

    pub(crate) fn content(msg: impl Into<String>) -> Self {
        Mc4Error::Content(msg.into())
    }
}

/// Short-read / failed-read during a structurally required read.
impl From<std::io::Error> for Mc4Error {
    fn from(e: std::io::Error) -> Self {
        // A bare io::Error reaching the core is always from a read or write
        // on the caller-supplied stream; distinguish by kind where we can,
        // otherwise default to Input (the much more common source in
        // practice — writes are wrapped explicitly at their call sites with
        // `map_output_err`).
        Mc4Error::Input(e.to_string())
    }
}

/// Wraps an I/O error observed while writing, producing `Mc4Error::Output`
/// instead of the `From<io::Error>` impl's default `Input` classification.
pub(crate) fn map_output_err(e: std::io::Error) -> Mc4Error {
    Mc4Error::Output(e.to_string())
}

pub type Result<T> = std::result::Result<T, Mc4Error>;
