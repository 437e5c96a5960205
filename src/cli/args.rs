//! Command-line argument parsing (`spec.md` §6).
//!
//! Flags are aggregated short options, e.g. `-dfc` means `-d -f -c`, the
//! same convention the reference CLI uses. There is no long-option form
//! beyond `--help`/`--version`, which exist only as discoverability aliases.

use crate::codec::{CompressionLevel, Variant};
use crate::cli::constants::{display_level, set_display_level};
use crate::cli::op_mode::OpMode;
use crate::error::{Mc4Error, Result};

#[derive(Debug, Clone)]
pub struct ParsedArgs {
    pub exe_name: String,
    pub op_mode: OpMode,
    /// Explicit `-z` selection. `None` means "infer from extension, default LZ4".
    pub variant: Option<Variant>,
    pub level: CompressionLevel,
    pub force_overwrite: bool,
    pub force_stdout: bool,
    pub show_help: bool,
    pub show_version: bool,
    pub input_filename: Option<String>,
    pub output_filename: Option<String>,
}

impl Default for ParsedArgs {
    fn default() -> Self {
        ParsedArgs {
            exe_name: crate::cli::constants::COMPRESSOR_NAME.to_owned(),
            op_mode: OpMode::Auto,
            variant: None,
            level: CompressionLevel::Fast,
            force_overwrite: false,
            force_stdout: false,
            show_help: false,
            show_version: false,
            input_filename: None,
            output_filename: None,
        }
    }
}

/// Parses `argv` (including `argv[0]`) into a [`ParsedArgs`].
///
/// `-v`/`-q` mutate the global display level as a side effect, matching the
/// reference CLI's immediate-effect option handling.
pub fn parse_args(argv: &[String]) -> Result<ParsedArgs> {
    let mut parsed = ParsedArgs::default();
    if let Some(exe) = argv.first() {
        parsed.exe_name = exe.clone();
    }

    for arg in argv.iter().skip(1) {
        match arg.as_str() {
            "--help" => parsed.show_help = true,
            "--version" => parsed.show_version = true,
            "-" => push_positional(&mut parsed, arg.clone())?,
            s if s.starts_with('-') && s.len() > 1 => {
                for c in s[1..].chars() {
                    match c {
                        'z' => parsed.variant = Some(Variant::Zstd),
                        '1' => parsed.level = CompressionLevel::Fast,
                        '2' => parsed.level = CompressionLevel::Medium,
                        '3' => parsed.level = CompressionLevel::High,
                        '4' => parsed.level = CompressionLevel::Ultra,
                        'd' => parsed.op_mode = OpMode::Decompress,
                        'f' => parsed.force_overwrite = true,
                        'c' => parsed.force_stdout = true,
                        't' => parsed.op_mode = OpMode::Test,
                        'v' => set_display_level(display_level() + 1),
                        'q' => {
                            let lvl = display_level();
                            set_display_level(lvl.saturating_sub(1));
                        }
                        'V' => parsed.show_version = true,
                        'h' | 'H' => parsed.show_help = true,
                        other => {
                            return Err(Mc4Error::Usage(format!("unrecognized flag -{other}")))
                        }
                    }
                }
            }
            _ => push_positional(&mut parsed, arg.clone())?,
        }
    }

    Ok(parsed)
}

fn push_positional(parsed: &mut ParsedArgs, value: String) -> Result<()> {
    if parsed.input_filename.is_none() {
        parsed.input_filename = Some(value);
    } else if parsed.output_filename.is_none() {
        parsed.output_filename = Some(value);
    } else {
        return Err(Mc4Error::Usage(format!("unexpected extra argument: {value}")));
    }
    Ok(())
}
