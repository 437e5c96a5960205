//! Resolves CLI path arguments (including the stdin/stdout/null sentinels)
//! to concrete readers and writers, and enforces the overwrite policy.
//!
//! On Windows, stdin/stdout default to text mode, which would translate
//! `\n`/`\r\n` inside a binary archive stream; both are switched to binary
//! mode via `_setmode` before use (`spec.md` §6).

use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::atomic::Ordering;

use crate::cli::constants::DISPLAY_LEVEL;
use crate::error::{map_output_err, Mc4Error, Result};

pub const STDIN_MARK: &str = "-";
pub const STDOUT_MARK: &str = "-";

#[cfg(windows)]
pub const NUL_MARK: &str = "nul";
#[cfg(not(windows))]
pub const NUL_MARK: &str = "/dev/null";

fn is_directory(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Resolves an input path: `"-"` means stdin; a directory is rejected;
/// otherwise the file is opened for reading.
pub fn open_src_file(path: &str) -> Result<Box<dyn Read>> {
    if path == STDIN_MARK {
        if DISPLAY_LEVEL.load(Ordering::Relaxed) >= 4 {
            eprintln!("Using stdin for input");
        }
        #[cfg(windows)]
        // SAFETY: calling _setmode on stdin (fd=0) is always valid.
        unsafe {
            libc::_setmode(0, libc::O_BINARY);
        }
        return Ok(Box::new(io::stdin()));
    }

    if is_directory(Path::new(path)) {
        return Err(Mc4Error::Input(format!("{path}: is a directory")));
    }

    let f = std::fs::File::open(path).map_err(|e| Mc4Error::Input(format!("{path}: {e}")))?;
    Ok(Box::new(io::BufReader::new(f)))
}

/// A write-capable destination produced by [`open_dst_file`].
pub struct DstFile {
    inner: Box<dyn Write>,
    pub is_stdout: bool,
}

impl Write for DstFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Resolves an output path: `"-"` means stdout; [`NUL_MARK`] discards all
/// bytes; otherwise the file is opened for writing, subject to the
/// overwrite policy (`force_overwrite`, or an interactive Y/N prompt when
/// the display level allows one).
pub fn open_dst_file(path: &str, force_overwrite: bool) -> Result<DstFile> {
    if path == STDOUT_MARK {
        if DISPLAY_LEVEL.load(Ordering::Relaxed) >= 4 {
            eprintln!("Using stdout for output");
        }
        #[cfg(windows)]
        // SAFETY: calling _setmode on stdout (fd=1) is always valid.
        unsafe {
            libc::_setmode(1, libc::O_BINARY);
        }
        return Ok(DstFile { inner: Box::new(io::stdout()), is_stdout: true });
    }

    if path == NUL_MARK {
        return Ok(DstFile { inner: Box::new(io::sink()), is_stdout: false });
    }

    if !force_overwrite && Path::new(path).exists() {
        let display_level = DISPLAY_LEVEL.load(Ordering::Relaxed);
        if display_level <= 1 {
            return Err(Mc4Error::Output(format!("{path}: already exists; not overwritten")));
        }
        eprint!("{path} already exists; do you want to overwrite (y/N) ? ");
        let _ = io::stderr().flush();
        let mut line = String::new();
        io::stdin().read_line(&mut line).map_err(map_output_err)?;
        let first = line.trim_start().chars().next().unwrap_or('\0');
        if first != 'y' && first != 'Y' {
            return Err(Mc4Error::Output(format!("{path}: not overwritten")));
        }
    }

    let f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Mc4Error::Output(format!("{path}: {e}")))?;

    Ok(DstFile { inner: Box::new(f), is_stdout: false })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_src_file_nonexistent_is_input_error() {
        let err = open_src_file("/nonexistent/path/that/cannot/exist.4mc").unwrap_err();
        assert!(matches!(err, Mc4Error::Input(_)));
    }

    #[test]
    fn open_dst_file_stdout_sentinel() {
        let dst = open_dst_file(STDOUT_MARK, true).unwrap();
        assert!(dst.is_stdout);
    }

    #[test]
    fn open_dst_file_devnull_sentinel() {
        let dst = open_dst_file(NUL_MARK, true).unwrap();
        assert!(!dst.is_stdout);
    }

    #[test]
    fn open_dst_file_overwrite_false_nonexistent_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.4mc");
        assert!(open_dst_file(path.to_str().unwrap(), false).is_ok());
    }

    #[test]
    fn open_dst_file_overwrite_false_existing_is_output_error() {
        crate::cli::constants::set_display_level(0);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.4mc");
        std::fs::write(&path, b"existing").unwrap();
        let result = open_dst_file(path.to_str().unwrap(), false);
        crate::cli::constants::set_display_level(2);
        assert!(matches!(result, Err(Mc4Error::Output(_))));
    }
}
