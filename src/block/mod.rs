//! FastLZ block compression and decompression.
//!
//! This module is the slice-level engine: it knows the token format, the two
//! match finders, and the capacity bound, and reports detailed errors. The
//! crate root wraps it with size validation and the coarse error kinds
//! callers branch on.

pub mod chain;
pub mod compress;
pub mod decompress;
pub mod encode;
pub mod types;

pub use compress::{compress_bound, compress_to_buf, compress_to_vec, CompressError, MAX_INPUT_SIZE};
pub use decompress::{decompress_to_buf, decompress_to_vec, stream_level, DecompressError};
