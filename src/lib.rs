// fastlz: FastLZ-format block compression

pub mod block;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod level;

// ── Version constants ─────────────────────────────────────────────────────────
pub const FASTLZ_VERSION_MAJOR: u32 = 0;
pub const FASTLZ_VERSION_MINOR: u32 = 1;
pub const FASTLZ_VERSION_RELEASE: u32 = 0;
pub const FASTLZ_VERSION_NUMBER: u32 =
    FASTLZ_VERSION_MAJOR * 100 * 100 + FASTLZ_VERSION_MINOR * 100 + FASTLZ_VERSION_RELEASE;
pub const FASTLZ_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the runtime version number.
pub fn version_number() -> u32 {
    FASTLZ_VERSION_NUMBER
}

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    FASTLZ_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::{CompressError, DecompressError, MAX_INPUT_SIZE};
pub use codec::{
    check_input_len, check_lengths, compress, compress_bound, compress_level, decompress,
    Compressed,
};
pub use error::{Error, ErrorKind, Result};
pub use level::{select_level, Level, LEVEL_AUTO};
