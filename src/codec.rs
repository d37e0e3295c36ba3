//! One-shot compress/decompress with size validation.
//!
//! This is the boundary callers use: sizes are checked against the 32-bit
//! signed ceiling before anything is allocated, buffers are reserved
//! fallibly, and every block-level failure collapses into one of the
//! [`ErrorKind`](crate::error::ErrorKind)s. The encoded stream does not
//! record its own length, so [`Compressed`] hands the original length back
//! alongside the bytes and [`decompress`] requires it.

use crate::block::{self, CompressError, DecompressError, MAX_INPUT_SIZE};
use crate::error::{Error, Result};
use crate::level::{select_level, Level};

/// Output of [`compress`]: the token stream plus the length to hand back to
/// [`decompress`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    pub data: Vec<u8>,
    pub original_length: usize,
}

impl Compressed {
    pub fn into_parts(self) -> (Vec<u8>, usize) {
        (self.data, self.original_length)
    }
}

fn check_len(what: &'static str, len: usize) -> Result<()> {
    if len > MAX_INPUT_SIZE {
        return Err(Error::SizeExceeded {
            what,
            len,
            limit: MAX_INPUT_SIZE,
        });
    }
    Ok(())
}

/// Reject inputs too large to compress. Nothing is allocated.
pub fn check_input_len(len: usize) -> Result<()> {
    check_len("input", len)
}

/// Reject decompression requests whose encoded or declared length is too
/// large. Nothing is allocated.
pub fn check_lengths(encoded_len: usize, expected_len: usize) -> Result<()> {
    check_len("encoded input", encoded_len)?;
    check_len("declared output", expected_len)
}

/// Capacity the compressor needs for an input of `input_len` bytes.
pub fn compress_bound(input_len: usize) -> Result<usize> {
    check_input_len(input_len)?;
    block::compress_bound(input_len).ok_or(Error::SizeExceeded {
        what: "input",
        len: input_len,
        limit: MAX_INPUT_SIZE,
    })
}

fn alloc_zeroed(len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::OutOfMemory(len))?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Compress `input`, choosing the level from `level` (`None` or `0` = by
/// size, `1`, `2`).
pub fn compress(input: &[u8], level: Option<i32>) -> Result<Compressed> {
    check_input_len(input.len())?;
    let level = select_level(input.len(), level)?;
    compress_level(input, level)
}

/// Compress `input` at an already-resolved level.
pub fn compress_level(input: &[u8], level: Level) -> Result<Compressed> {
    let bound = compress_bound(input.len())?;
    let mut out = alloc_zeroed(bound)?;

    let n = block::compress_to_buf(input, &mut out, level)?;
    if n == 0 && !input.is_empty() {
        return Err(Error::CompressionFailure(CompressError::EmptyOutput));
    }

    out.truncate(n);
    Ok(Compressed {
        data: out,
        original_length: input.len(),
    })
}

/// Reconstruct exactly `original_length` bytes from `encoded`.
///
/// A stream that is malformed, or that decodes to any other length, fails
/// with [`Error::DecompressionFailure`]; no partial output is returned.
pub fn decompress(encoded: &[u8], original_length: usize) -> Result<Vec<u8>> {
    check_lengths(encoded.len(), original_length)?;
    let mut out = alloc_zeroed(original_length)?;

    let n = block::decompress_to_buf(encoded, &mut out)?;
    if n != original_length {
        return Err(Error::DecompressionFailure(DecompressError::LengthMismatch {
            expected: original_length,
            actual: n,
        }));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn size_checks_at_the_ceiling() {
        assert!(check_input_len(MAX_INPUT_SIZE).is_ok());
        assert_eq!(check_input_len(MAX_INPUT_SIZE + 1).unwrap_err().kind(), ErrorKind::SizeExceeded);
        assert_eq!(check_lengths(0, MAX_INPUT_SIZE + 1).unwrap_err().kind(), ErrorKind::SizeExceeded);
        assert_eq!(check_lengths(MAX_INPUT_SIZE + 1, 0).unwrap_err().kind(), ErrorKind::SizeExceeded);
        assert_eq!(compress_bound(MAX_INPUT_SIZE + 1).unwrap_err().kind(), ErrorKind::SizeExceeded);
    }

    #[test]
    fn empty_roundtrip() {
        let c = compress(b"", None).unwrap();
        assert!(c.data.is_empty());
        assert_eq!(c.original_length, 0);
        assert_eq!(decompress(&c.data, 0).unwrap(), b"");
    }

    #[test]
    fn off_by_one_length_fails() {
        let c = compress(b"hello hello hello hello", None).unwrap();
        for len in [c.original_length - 1, c.original_length + 1] {
            let err = decompress(&c.data, len).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DecompressionFailure);
        }
    }

    #[test]
    fn unknown_level_rejected() {
        assert_eq!(compress(b"x", Some(3)).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }
}
