//! Path resolution and overwrite-policy enforcement for the CLI front-end.

pub mod file_io;

pub use file_io::{open_dst_file, open_src_file, DstFile, NUL_MARK, STDIN_MARK, STDOUT_MARK};
