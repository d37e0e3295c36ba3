//! Error types for the one-shot compress/decompress API.

use thiserror::Error;

use crate::block::{CompressError, DecompressError};

/// Coarse failure category, for callers that branch on kind rather than on
/// the full error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    SizeExceeded,
    OutOfMemory,
    CompressionFailure,
    DecompressionFailure,
}

/// Main error type for `fastlz` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument is out of range (e.g. an unknown level).
    #[error("{0}")]
    InvalidArgument(String),

    /// An input length or declared length exceeds the 32-bit signed ceiling.
    #[error("{what} of {len} bytes is too large (limit {limit})")]
    SizeExceeded {
        what: &'static str,
        len: usize,
        limit: usize,
    },

    /// A working buffer could not be allocated.
    #[error("out of memory allocating {0} bytes")]
    OutOfMemory(usize),

    /// The compressor could not represent the input within its bound.
    #[error("could not compress: {0}")]
    CompressionFailure(#[source] CompressError),

    /// The stream is malformed or decodes to a length other than declared.
    #[error("could not decompress")]
    DecompressionFailure(#[source] DecompressError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::SizeExceeded { .. } => ErrorKind::SizeExceeded,
            Error::OutOfMemory(_) => ErrorKind::OutOfMemory,
            Error::CompressionFailure(_) => ErrorKind::CompressionFailure,
            Error::DecompressionFailure(_) => ErrorKind::DecompressionFailure,
        }
    }
}

impl From<CompressError> for Error {
    fn from(err: CompressError) -> Self {
        match err {
            CompressError::InputTooLarge(len) => Error::SizeExceeded {
                what: "input",
                len,
                limit: crate::block::MAX_INPUT_SIZE,
            },
            other => Error::CompressionFailure(other),
        }
    }
}

impl From<DecompressError> for Error {
    fn from(err: DecompressError) -> Self {
        Error::DecompressionFailure(err)
    }
}

/// Result alias for `fastlz` operations.
pub type Result<T> = std::result::Result<T, Error>;
