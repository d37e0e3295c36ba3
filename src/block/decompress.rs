//! Block decompression.
//!
//! The decoder walks the token stream once, writing into a fixed-size
//! destination. It never trusts the stream: every read is bounds checked,
//! back-references must land inside what has already been produced, and
//! writing past the destination is an error rather than a reallocation.
//! Back-references may overlap the bytes they produce (distance shorter than
//! length), so copies run forward one byte at a time in that case.

use super::types::{BufOutput, LEN_ESCAPE, LEVEL1_TAG, LEVEL2_TAG, LEVEL_TAG_MASK, MAX_SHORT_DISTANCE};
use crate::level::Level;

/// Errors returned by the block decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecompressError {
    /// The stream ended in the middle of a token.
    #[error("input was truncated")]
    InputTruncated,
    /// A back-reference points before the start of the output.
    #[error("invalid backreference")]
    InvalidBackreference,
    /// The stream decodes to more bytes than the destination holds.
    #[error("output buffer was insufficient")]
    OutputTooSmall,
    /// The first byte carries a level tag other than 1 or 2.
    #[error("unknown level tag {0:#05b}")]
    UnknownLevel(u8),
    /// The stream decoded cleanly but to a different length than declared.
    #[error("decoded {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Level recorded in the first byte of `input`, or `None` for an empty stream.
pub fn stream_level(input: &[u8]) -> Result<Option<Level>, DecompressError> {
    let Some(&first) = input.first() else {
        return Ok(None);
    };
    match first & LEVEL_TAG_MASK {
        LEVEL1_TAG => Ok(Some(Level::Level1)),
        LEVEL2_TAG => Ok(Some(Level::Level2)),
        tag => Err(DecompressError::UnknownLevel(tag >> 5)),
    }
}

struct Reader<'a> {
    inp: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    #[inline]
    fn byte(&mut self) -> Result<usize, DecompressError> {
        let b = *self.inp.get(self.pos).ok_or(DecompressError::InputTruncated)?;
        self.pos += 1;
        Ok(b as usize)
    }

    #[inline]
    fn take(&mut self, n: usize) -> Result<&'a [u8], DecompressError> {
        let s = self
            .inp
            .get(self.pos..self.pos + n)
            .ok_or(DecompressError::InputTruncated)?;
        self.pos += n;
        Ok(s)
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.pos >= self.inp.len()
    }
}

/// Copy `len` bytes from `distance + 1` bytes behind the cursor.
///
/// On overflow the bytes that fit are still written before the error is
/// returned.
fn put_backref(out: &mut BufOutput<'_>, distance: usize, len: usize) -> Result<(), DecompressError> {
    if distance + 1 > out.pos {
        return Err(DecompressError::InvalidBackreference);
    }
    let n = len.min(out.remaining());
    let src = out.pos - distance - 1;

    if distance + 1 >= n {
        out.buf.copy_within(src..src + n, out.pos);
    } else {
        for i in 0..n {
            out.buf[out.pos + i] = out.buf[src + i];
        }
    }
    out.pos += n;

    if n == len {
        Ok(())
    } else {
        Err(DecompressError::OutputTooSmall)
    }
}

/// Decode one back-reference whose opcode is `ctrl`; returns `(distance, len)`.
#[inline]
fn read_backref(rd: &mut Reader<'_>, ctrl: usize, level: Level) -> Result<(usize, usize), DecompressError> {
    let mut len = (ctrl >> 5) - 1;
    let high = (ctrl & 31) << 8;

    match level {
        Level::Level1 => {
            if len == LEN_ESCAPE - 1 {
                len += rd.byte()?;
            }
            let distance = high + rd.byte()?;
            Ok((distance, len + 3))
        }
        Level::Level2 => {
            if len == LEN_ESCAPE - 1 {
                loop {
                    let code = rd.byte()?;
                    len += code;
                    if code != 0xff {
                        break;
                    }
                }
            }
            let mut distance = high + rd.byte()?;
            if distance == MAX_SHORT_DISTANCE {
                let far = (rd.byte()? << 8) | rd.byte()?;
                distance += far;
            }
            Ok((distance, len + 3))
        }
    }
}

/// Decode `input` into `output`; returns the number of bytes produced.
///
/// The destination is a hard limit. A stream that decodes to fewer bytes
/// than `output.len()` is not an error here; [`decompress_to_vec`] is the
/// variant that insists on an exact length.
pub fn decompress_to_buf(input: &[u8], output: &mut [u8]) -> Result<usize, DecompressError> {
    let Some(level) = stream_level(input)? else {
        return Ok(0);
    };

    let mut out: BufOutput = output.into();
    let mut rd = Reader { inp: input, pos: 0 };
    let mut ctrl = rd.byte()? & 31;

    loop {
        if ctrl >= 32 {
            let (distance, len) = read_backref(&mut rd, ctrl, level)?;
            put_backref(&mut out, distance, len)?;
        } else {
            let lits = rd.take(ctrl + 1)?;
            if !out.extend(lits) {
                return Err(DecompressError::OutputTooSmall);
            }
        }

        if rd.at_end() {
            break;
        }
        ctrl = rd.byte()?;
    }

    Ok(out.pos)
}

/// Decode `input` into a vector of exactly `expected_len` bytes.
///
/// Any stream that does not produce exactly `expected_len` bytes fails; no
/// partial output is returned.
pub fn decompress_to_vec(input: &[u8], expected_len: usize) -> Result<Vec<u8>, DecompressError> {
    let mut out = vec![0u8; expected_len];
    let n = decompress_to_buf(input, &mut out)?;
    if n != expected_len {
        return Err(DecompressError::LengthMismatch {
            expected: expected_len,
            actual: n,
        });
    }
    Ok(out)
}
