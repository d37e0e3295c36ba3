//! Block-format constants, the level tag, the match hash, and the
//! fixed-capacity output cursor shared by the encoder and decoder.
//!
//! Layout summary (all distances are "bytes behind the write cursor minus
//! one", so a distance of 0 repeats the previous byte):
//!
//! | Opcode bits  | Meaning                                                 |
//! |--------------|---------------------------------------------------------|
//! | `000LLLLL`   | literal run of `L + 1` bytes follows                    |
//! | `LLLDDDDD`   | back-reference, `LLL != 0`, `D` = distance bits 12..8   |
//!
//! The top three bits of the very first byte carry the level tag instead,
//! which is safe because every non-empty stream starts with a literal run.

/// Shortest back-reference either level will emit.
pub const MIN_MATCH: usize = 3;

/// Longest literal run a single opcode can describe.
pub const MAX_LITERAL_RUN: usize = 32;

/// Largest distance that fits in the 13-bit short form.
pub const MAX_SHORT_DISTANCE: usize = 8191;

/// Level 1 never reaches past the short form.
pub const L1_MAX_DISTANCE: usize = MAX_SHORT_DISTANCE;

/// Level 2 extends the short form with a 16-bit big-endian tail.
pub const L2_MAX_DISTANCE: usize = MAX_SHORT_DISTANCE + 65_535;

/// Longest length a single level 1 back-reference can carry (`0xff + 9`).
pub const L1_MAX_MATCH: usize = 0xff + 9;

/// Level 1 splits very long matches into chunks of this size so the final
/// piece always keeps at least [`MIN_MATCH`] bytes.
pub const L1_SPLIT_MATCH: usize = 0xff - 2 + 9;

/// Far level 2 matches (distance >= [`MAX_SHORT_DISTANCE`]) cost two extra
/// bytes, so they are only taken when at least this many bytes match.
pub const L2_FAR_MIN_MATCH: usize = 5;

/// Length code that announces an extension byte (level 1) or sequence (level 2).
pub const LEN_ESCAPE: usize = 7;

/// Level tag values stored in the top three bits of the first byte.
pub const LEVEL1_TAG: u8 = 0b000_00000;
pub const LEVEL2_TAG: u8 = 0b001_00000;
pub const LEVEL_TAG_MASK: u8 = 0b111_00000;

pub const HASH_LOG: u32 = 13;
pub const HASH_SIZE: usize = 1 << HASH_LOG;

/// Multiplicative hash of the low 24 bits of `v` down to [`HASH_LOG`] bits.
#[inline]
pub fn hash3(v: u32) -> usize {
    let h = (v & 0x00ff_ffff).wrapping_mul(2_654_435_769);
    (h >> (32 - HASH_LOG)) as usize
}

/// Little-endian 4-byte window starting at `pos`, if the input has that many
/// bytes left.
#[inline]
pub fn peek4(input: &[u8], pos: usize) -> Option<u32> {
    let bytes = input.get(pos..pos + 4)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Count how many bytes match between `input[a..]` and `input[b..]`, starting
/// the comparison at `skip` and never reading past `limit`.
#[inline]
pub fn count_match(input: &[u8], a: usize, b: usize, skip: usize, limit: usize) -> usize {
    debug_assert!(a < b);
    let max = limit - b;
    let mut n = skip;
    while n < max && input[a + n] == input[b + n] {
        n += 1;
    }
    n
}

/// Fixed-capacity write cursor over a caller-owned slice.
///
/// Writes stop at the end of the slice; everything up to that point is kept
/// so callers can inspect partial output when an overflow is reported.
pub struct BufOutput<'a> {
    pub pos: usize,
    pub buf: &'a mut [u8],
}

impl<'a> From<&'a mut [u8]> for BufOutput<'a> {
    fn from(buf: &'a mut [u8]) -> Self {
        Self { pos: 0, buf }
    }
}

impl BufOutput<'_> {
    /// Bytes still available.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Append one byte; `false` when the slice is already full.
    #[inline]
    pub fn push(&mut self, c: u8) -> bool {
        match self.buf.get_mut(self.pos) {
            Some(slot) => {
                *slot = c;
                self.pos += 1;
                true
            }
            None => false,
        }
    }

    /// Append as much of `bytes` as fits; `false` if it was cut short.
    #[inline]
    pub fn extend(&mut self, bytes: &[u8]) -> bool {
        let n = bytes.len().min(self.remaining());
        self.buf[self.pos..self.pos + n].copy_from_slice(&bytes[..n]);
        self.pos += n;
        n == bytes.len()
    }

    /// Set the level tag on the first byte.
    #[inline]
    pub fn tag_level(&mut self, tag: u8) {
        if let Some(first) = self.buf.first_mut() {
            *first = (*first & !LEVEL_TAG_MASK) | tag;
        }
    }
}
