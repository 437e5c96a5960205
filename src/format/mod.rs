//! On-disk container format: header, block frames, and footer
//! (`spec.md` §3, §4.3, §4.4).

mod footer;
mod frame;
mod header;

pub use footer::{read_footer, write_footer, BlockIndex, Footer};
pub use frame::{read_block, write_block, write_end_marker, Block};
pub use header::Header;
