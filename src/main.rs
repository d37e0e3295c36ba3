//! Binary entry point for the `fastlz` command-line tool.
//!
//! 1. `clap` parses argv into a [`Cli`].
//! 2. [`ParsedArgs::from_cli`] folds in the `FASTLZ_LEVEL` default.
//! 3. [`run`] reads the input, calls the library, writes the output and
//!    reports the length the caller must keep for decompression.
//!
//! Any error is printed with its full context chain at display level 1 and
//! the process exits with status 1.

use std::fs;
use std::io::{self, Read, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use fastlz::cli::args::{Cli, ParsedArgs};
use fastlz::cli::constants::{adjust_display_level, AUTHOR, COMPRESSOR_NAME};
use fastlz::cli::op_mode::OpMode;
use fastlz::config::ENV_LEVEL;
use fastlz::{displaylevel, displayout};

fn read_input(args: &ParsedArgs) -> Result<Vec<u8>> {
    if args.input_is_stdin() {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("cannot read stdin")?;
        Ok(buf)
    } else {
        fs::read(&args.input).with_context(|| format!("cannot read {}", args.input))
    }
}

fn write_output(args: &ParsedArgs, data: &[u8]) -> Result<()> {
    if args.output_is_stdout() {
        let mut out = io::stdout().lock();
        out.write_all(data).context("cannot write stdout")?;
        out.flush().context("cannot flush stdout")
    } else {
        fs::write(&args.output, data).with_context(|| format!("cannot write {}", args.output))
    }
}

fn compress(args: &ParsedArgs) -> Result<()> {
    let input = read_input(args)?;
    let level = fastlz::select_level(input.len(), Some(args.level))?;
    displaylevel!(3, "Using level {} for {} bytes\n", level, input.len());

    let start = Instant::now();
    let compressed = fastlz::compress_level(&input, level)
        .with_context(|| format!("compressing {}", args.input))?;
    let elapsed = start.elapsed();

    write_output(args, &compressed.data)?;

    let ratio = if input.is_empty() {
        0.0
    } else {
        compressed.data.len() as f64 / input.len() as f64 * 100.0
    };
    displaylevel!(
        2,
        "Compressed {} bytes into {} bytes ==> {:.2}%\n",
        input.len(),
        compressed.data.len(),
        ratio
    );
    displaylevel!(3, "Done in {:.3} ms\n", elapsed.as_secs_f64() * 1000.0);

    // The stream does not record its length; hand it to the caller.
    if args.output_is_stdout() {
        displaylevel!(1, "{}\n", compressed.original_length);
    } else {
        displayout!("{}\n", compressed.original_length);
    }
    Ok(())
}

fn decompress(args: &ParsedArgs) -> Result<()> {
    let encoded = read_input(args)?;

    let start = Instant::now();
    let decoded = fastlz::decompress(&encoded, args.size)
        .with_context(|| format!("decompressing {} to {} bytes", args.input, args.size))?;
    let elapsed = start.elapsed();

    write_output(args, &decoded)?;
    displaylevel!(
        2,
        "Decompressed {} bytes into {} bytes\n",
        encoded.len(),
        decoded.len()
    );
    displaylevel!(3, "Done in {:.3} ms\n", elapsed.as_secs_f64() * 1000.0);
    Ok(())
}

/// Execute the selected operation.
fn run(args: &ParsedArgs) -> Result<()> {
    match args.op_mode {
        OpMode::Compress => compress(args),
        OpMode::Decompress => decompress(args),
    }
}

fn main() {
    let cli = Cli::parse();
    let env_level = std::env::var(ENV_LEVEL).ok();
    let args = ParsedArgs::from_cli(cli, env_level.as_deref());
    adjust_display_level(args.verbose, args.quiet);

    displaylevel!(
        4,
        "*** {} v{} {}-bit, by {} ***\n",
        COMPRESSOR_NAME,
        fastlz::FASTLZ_VERSION_STRING,
        std::mem::size_of::<*const ()>() * 8,
        AUTHOR
    );

    if let Err(err) = run(&args) {
        displaylevel!(1, "Error: {:#}\n", err);
        std::process::exit(1);
    }
}
