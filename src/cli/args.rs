//! Command-line argument parsing for the `fastlz` binary.
//!
//! Parsing is done with `clap` derive; [`Cli::parse_from`] takes an explicit
//! iterator, which the unit tests below use. Post-parse resolution (level
//! default from the environment, display level from `-v`/`-q`) lives in
//! [`ParsedArgs::from_cli`] so the binary only has to dispatch.

use clap::{ArgAction, Parser, Subcommand};

use crate::cli::constants::{COMPRESSOR_NAME, STDIO_MARK};
use crate::cli::op_mode::{init_level_from, OpMode};

#[derive(Debug, Parser)]
#[command(name = COMPRESSOR_NAME, version, about = "FastLZ block compressor")]
pub struct Cli {
    /// Raise verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Lower verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compress INPUT into a raw token stream; prints the original length.
    Compress {
        /// 0 = choose by input size, 1 = fast, 2 = better ratio.
        /// Defaults to $FASTLZ_LEVEL, then 0.
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(0..=2))]
        level: Option<i32>,
        /// Input file, or `-` for stdin.
        input: String,
        /// Output file, or `-` for stdout.
        output: String,
    },
    /// Decompress a raw token stream back to exactly SIZE bytes.
    Decompress {
        /// Original (uncompressed) length as printed by `compress`.
        #[arg(short, long)]
        size: usize,
        /// Input file, or `-` for stdin.
        input: String,
        /// Output file, or `-` for stdout.
        output: String,
    },
}

/// Resolved options handed to the dispatch in `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub op_mode: OpMode,
    /// Raw level for compression (`0` = auto). Unused when decompressing.
    pub level: i32,
    /// Declared output length for decompression. Unused when compressing.
    pub size: usize,
    pub input: String,
    pub output: String,
    pub verbose: u8,
    pub quiet: u8,
}

impl ParsedArgs {
    /// Resolve a parsed command line. `env_level` is the raw `FASTLZ_LEVEL`
    /// value, consulted only when `-l` was not given.
    pub fn from_cli(cli: Cli, env_level: Option<&str>) -> Self {
        let (op_mode, level, size, input, output) = match cli.command {
            Command::Compress { level, input, output } => {
                let level = level.unwrap_or_else(|| init_level_from(env_level));
                (OpMode::Compress, level, 0, input, output)
            }
            Command::Decompress { size, input, output } => {
                (OpMode::Decompress, 0, size, input, output)
            }
        };
        ParsedArgs {
            op_mode,
            level,
            size,
            input,
            output,
            verbose: cli.verbose,
            quiet: cli.quiet,
        }
    }

    pub fn input_is_stdin(&self) -> bool {
        self.input == STDIO_MARK
    }

    pub fn output_is_stdout(&self) -> bool {
        self.output == STDIO_MARK
    }
}
