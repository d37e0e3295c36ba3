// config.rs: compile-time tuning constants.
//
// The auto-level threshold and the capacity formula are part of the public
// contract: callers pre-size buffers from them, so changing either is a
// breaking change.

// Inputs shorter than this pick level 1 when no level is requested.
pub const AUTO_LEVEL2_THRESHOLD: usize = 65_536;

// Smallest output buffer the compressor is ever given.
pub const MIN_OUTPUT_CAPACITY: usize = 66;

// Worst-case expansion ratio, as a fraction (1.05).
pub const EXPANSION_NUMERATOR: u64 = 105;
pub const EXPANSION_DENOMINATOR: u64 = 100;

// Candidates the level 2 hash chain inspects per position.
pub const MAX_CHAIN_DEPTH: usize = 16;

// Default CLI level: 0 = pick from input size.
// Can be overridden by the FASTLZ_LEVEL environment variable,
// or by the -l command-line flag.
pub const LEVEL_DEFAULT: i32 = 0;

// Environment variable consulted by the CLI for its default level.
pub const ENV_LEVEL: &str = "FASTLZ_LEVEL";
