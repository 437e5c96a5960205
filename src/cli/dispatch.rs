//! Post-parse dispatch: resolves filenames and variants, then drives the
//! encoder or decoder engine against the resolved I/O pair.

use std::io::{IsTerminal, Write};

use crate::cli::args::ParsedArgs;
use crate::cli::op_mode::{determine_op_mode, variant_from_extension, OpMode};
use crate::codec::Variant;
use crate::engine::{decode_all, Encoder};
use crate::error::{Mc4Error, Result};
use crate::io::{open_dst_file, open_src_file, NUL_MARK, STDIN_MARK, STDOUT_MARK};

/// Runs the full CLI pipeline for an already-parsed invocation. Returns the
/// process exit code per `spec.md` §6.
pub fn run(argv: Vec<String>) -> i32 {
    let parsed = match crate::cli::args::parse_args(&argv) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}: {e}", crate::cli::constants::COMPRESSOR_NAME);
            return e.exit_code();
        }
    };

    if parsed.show_help {
        crate::cli::help::print_usage(&parsed.exe_name);
        return 0;
    }
    if parsed.show_version {
        crate::cli::help::print_version();
        return 0;
    }

    match execute(parsed) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}: {e}", crate::cli::constants::COMPRESSOR_NAME);
            e.exit_code()
        }
    }
}

fn execute(mut parsed: ParsedArgs) -> Result<()> {
    let test_mode = parsed.op_mode == OpMode::Test;
    if test_mode {
        parsed.op_mode = OpMode::Decompress;
    }

    let input = parsed.input_filename.clone().unwrap_or_else(|| STDIN_MARK.to_owned());

    if input == STDIN_MARK && std::io::stdin().is_terminal() {
        return Err(Mc4Error::Usage("refusing to read from a console".into()));
    }

    if input == STDIN_MARK && parsed.output_filename.is_none() {
        parsed.output_filename = Some(STDOUT_MARK.to_owned());
    }

    if test_mode {
        parsed.output_filename = Some(NUL_MARK.to_owned());
    }

    if parsed.op_mode == OpMode::Auto {
        parsed.op_mode = determine_op_mode(&input);
    }

    let output = match parsed.output_filename.clone() {
        Some(o) => o,
        None => match parsed.op_mode {
            OpMode::Compress => {
                let variant = parsed.variant.unwrap_or(Variant::Lz4);
                let out = format!("{input}{}", variant.extension());
                crate::displaylevel!(2, "Compressed filename will be: {out}\n");
                out
            }
            OpMode::Decompress => variant_from_extension(&input)
                .and_then(|v| input.strip_suffix(v.extension()))
                .map(|base| {
                    crate::displaylevel!(2, "Decoding file {base}\n");
                    base.to_owned()
                })
                .ok_or_else(|| Mc4Error::Usage("cannot determine an output filename".into()))?,
            OpMode::Test | OpMode::Auto => unreachable!("resolved above"),
        },
    };

    if output == STDOUT_MARK
        && parsed.op_mode != OpMode::Test
        && std::io::stdout().is_terminal()
        && !parsed.force_stdout
    {
        return Err(Mc4Error::Usage("refusing to write to console without -c".into()));
    }

    match parsed.op_mode {
        OpMode::Compress => {
            let variant = parsed.variant.unwrap_or(Variant::Lz4);
            compress_path(&input, &output, variant, parsed.level, parsed.force_overwrite)
        }
        OpMode::Decompress => decompress_path(&input, &output, parsed.force_overwrite),
        OpMode::Auto | OpMode::Test => unreachable!("resolved above"),
    }
}

fn compress_path(
    input: &str,
    output: &str,
    variant: Variant,
    level: crate::codec::CompressionLevel,
    force_overwrite: bool,
) -> Result<()> {
    let mut src = open_src_file(input)?;
    let mut dst = open_dst_file(output, force_overwrite)?;

    let n_blocks = Encoder::new(variant, level).encode_stream(&mut src, &mut dst)?;
    dst.flush().map_err(crate::error::map_output_err)?;
    crate::displaylevel!(3, "Compressed {input} into {output}: {n_blocks} block(s)\n");
    Ok(())
}

fn decompress_path(input: &str, output: &str, force_overwrite: bool) -> Result<()> {
    let mut src = open_src_file(input)?;
    let mut dst = open_dst_file(output, force_overwrite)?;

    let n_streams = decode_all(&mut src, |chunk| dst.write_all(&chunk).map_err(crate::error::map_output_err))?;
    dst.flush().map_err(crate::error::map_output_err)?;
    crate::displaylevel!(3, "Decoded {input} into {output}: {n_streams} stream(s)\n");
    Ok(())
}
