//! Usage and version text.

use crate::cli::constants::COMPRESSOR_NAME;

pub fn print_usage(exe_name: &str) {
    println!("Usage: {exe_name} [flags] [input] [output]");
    println!();
    println!("Flags:");
    println!("  -z        use the Zstandard variant (default: LZ4)");
    println!("  -1 .. -4  compression level, fast .. ultra (default: 1)");
    println!("  -d        decompress");
    println!("  -f        overwrite output without prompting");
    println!("  -c        force writing to stdout");
    println!("  -t        test mode: decompress, discard output");
    println!("  -v        increase verbosity");
    println!("  -q        decrease verbosity");
    println!("  -V        show version");
    println!("  -h, -H    show this help");
    println!();
    println!("input/output default to stdin/stdout; \"-\" means the same explicitly.");
}

pub fn print_version() {
    println!("{COMPRESSOR_NAME} {}", env!("CARGO_PKG_VERSION"));
}
