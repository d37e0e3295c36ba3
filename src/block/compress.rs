//! Block compression: the level 1 single-slot matcher, level dispatch, and
//! the worst-case capacity formula.
//!
//! | Function               | Purpose                                              |
//! |------------------------|------------------------------------------------------|
//! | [`compress_bound`]     | capacity a caller must provide for any input length  |
//! | [`compress_to_buf`]    | compress into a caller-owned slice                   |
//! | [`compress_to_vec`]    | allocate [`compress_bound`] bytes and compress       |
//!
//! Capacity-exceeded conditions surface as [`CompressError::OutputTooSmall`];
//! whatever was written before the overflow is left in the slice but is not a
//! valid stream.

use super::chain;
use super::encode::{L1Writer, L2Writer, TokenSink};
use super::types::{count_match, hash3, peek4, HASH_SIZE, MIN_MATCH};
use crate::config::{EXPANSION_DENOMINATOR, EXPANSION_NUMERATOR, MIN_OUTPUT_CAPACITY};
use crate::level::Level;

/// Largest input either tier accepts (the 32-bit signed ceiling).
pub const MAX_INPUT_SIZE: usize = i32::MAX as usize;

/// Errors returned by the block compressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CompressError {
    /// The output slice cannot hold the encoded stream.
    #[error("output buffer was insufficient")]
    OutputTooSmall,
    /// The input exceeds [`MAX_INPUT_SIZE`].
    #[error("input of {0} bytes exceeds the maximum block size")]
    InputTooLarge(usize),
    /// A non-empty input produced no output at all.
    #[error("no output produced for a non-empty input")]
    EmptyOutput,
}

/// Worst-case encoded size for an input of `input_len` bytes:
/// `max(66, ceil(input_len * 1.05))`.
///
/// Returns `None` above [`MAX_INPUT_SIZE`].
pub fn compress_bound(input_len: usize) -> Option<usize> {
    if input_len > MAX_INPUT_SIZE {
        return None;
    }
    let len = input_len as u64;
    let scaled = (len * EXPANSION_NUMERATOR).div_ceil(EXPANSION_DENOMINATOR);
    Some((scaled as usize).max(MIN_OUTPUT_CAPACITY))
}

/// Single-slot matcher: each hash bucket remembers only the latest position.
///
/// The first byte is always a literal so the level tag has somewhere to go.
/// After a match only the two positions at its tail are re-hashed.
fn compress_single_slot<S: TokenSink>(input: &[u8], sink: &mut S) -> Result<(), CompressError> {
    // Zero doubles as "position 0", which is never inserted explicitly.
    let mut htab = vec![0u32; HASH_SIZE];
    let mut anchor = 0;
    let mut pos = 1;

    while let Some(head) = peek4(input, pos) {
        let candidate = std::mem::replace(&mut htab[hash3(head)], pos as u32) as usize;
        debug_assert!(candidate < pos);
        let distance = pos - candidate - 1;

        let in_window = distance <= S::MAX_DISTANCE;
        if !in_window || input[pos..pos + MIN_MATCH] != input[candidate..candidate + MIN_MATCH] {
            pos += 1;
            continue;
        }

        let len = count_match(input, candidate, pos, MIN_MATCH, input.len());
        sink.put_lits(&input[anchor..pos])?;
        sink.put_backref(distance, len)?;
        pos += len;
        anchor = pos;

        let tail = pos - 2;
        match peek4(input, tail) {
            Some(head) => {
                htab[hash3(head)] = tail as u32;
                htab[hash3(head >> 8)] = (tail + 1) as u32;
            }
            None => break,
        }
    }

    sink.put_lits(&input[anchor..])
}

/// Compress `input` into `output` at the given level.
///
/// Returns the number of bytes written. An empty input writes nothing and
/// returns `Ok(0)`.
pub fn compress_to_buf(input: &[u8], output: &mut [u8], level: Level) -> Result<usize, CompressError> {
    if input.len() > MAX_INPUT_SIZE {
        return Err(CompressError::InputTooLarge(input.len()));
    }
    if input.is_empty() {
        return Ok(0);
    }

    match level {
        Level::Level1 => {
            let mut sink = L1Writer(output.into());
            compress_single_slot(input, &mut sink)?;
            Ok(sink.finish())
        }
        Level::Level2 => {
            let mut sink = L2Writer(output.into());
            chain::compress_chained(input, &mut sink)?;
            Ok(sink.finish())
        }
    }
}

/// Compress `input` into a freshly allocated vector sized by
/// [`compress_bound`] and trimmed to the encoded length.
pub fn compress_to_vec(input: &[u8], level: Level) -> Result<Vec<u8>, CompressError> {
    let bound = compress_bound(input.len()).ok_or(CompressError::InputTooLarge(input.len()))?;
    let mut out = vec![0u8; bound];
    let n = compress_to_buf(input, &mut out, level)?;
    out.truncate(n);
    Ok(out)
}

/// Single-slot matcher driving the level 2 writer, so the chain tests can
/// compare both matchers on the same token format.
#[cfg(test)]
pub(crate) fn compress_single_slot_l2(input: &[u8], output: &mut [u8]) -> Result<usize, CompressError> {
    let mut sink = L2Writer(output.into());
    compress_single_slot(input, &mut sink)?;
    Ok(sink.finish())
}
