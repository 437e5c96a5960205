//! Binary entry point for the `mc4` command-line tool.

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    std::process::exit(mc4::cli::run(argv));
}
