//! Token writers for the two levels.
//!
//! Both levels share the literal-run opcode; they differ only in how a
//! back-reference's length and distance are spelled. The match finders in
//! [`super::compress`] and [`super::chain`] drive a [`TokenSink`] and never
//! touch opcode bits themselves.

use super::compress::CompressError;
use super::types::{
    BufOutput, L1_MAX_DISTANCE, L1_MAX_MATCH, L1_SPLIT_MATCH, L2_MAX_DISTANCE, LEN_ESCAPE,
    LEVEL1_TAG, LEVEL2_TAG, MAX_LITERAL_RUN, MAX_SHORT_DISTANCE, MIN_MATCH,
};

/// Receives the token stream produced by a match finder.
pub trait TokenSink {
    /// Farthest distance this format can encode.
    const MAX_DISTANCE: usize;
    /// Level tag written into the first byte once the stream is complete.
    const TAG: u8;

    /// Emit `lits` verbatim, split into runs of at most [`MAX_LITERAL_RUN`].
    fn put_lits(&mut self, lits: &[u8]) -> Result<(), CompressError>;

    /// Emit a copy of `len` bytes from `distance + 1` bytes back.
    fn put_backref(&mut self, distance: usize, len: usize) -> Result<(), CompressError>;

    /// Stamp the level tag and return the number of bytes written.
    fn finish(self) -> usize;
}

fn put_lits_common(out: &mut BufOutput<'_>, mut lits: &[u8]) -> Result<(), CompressError> {
    while !lits.is_empty() {
        let run = lits.len().min(MAX_LITERAL_RUN);
        if !out.push((run - 1) as u8) || !out.extend(&lits[..run]) {
            return Err(CompressError::OutputTooSmall);
        }
        lits = &lits[run..];
    }
    Ok(())
}

fn put_bytes(out: &mut BufOutput<'_>, bytes: &[u8]) -> Result<(), CompressError> {
    if out.extend(bytes) {
        Ok(())
    } else {
        Err(CompressError::OutputTooSmall)
    }
}

/// Level 1: 13-bit distances, lengths up to 264 per token.
pub struct L1Writer<'a>(pub BufOutput<'a>);

/// Level 2: optional 16-bit distance tail and open-ended length extension.
pub struct L2Writer<'a>(pub BufOutput<'a>);

impl TokenSink for L1Writer<'_> {
    const MAX_DISTANCE: usize = L1_MAX_DISTANCE;
    const TAG: u8 = LEVEL1_TAG;

    fn put_lits(&mut self, lits: &[u8]) -> Result<(), CompressError> {
        put_lits_common(&mut self.0, lits)
    }

    fn put_backref(&mut self, distance: usize, mut len: usize) -> Result<(), CompressError> {
        debug_assert!(distance <= Self::MAX_DISTANCE);
        debug_assert!(len >= MIN_MATCH);

        let hi = (distance >> 8) as u8;
        let lo = distance as u8;

        // chunks of 262 leave a tail of at least 3 whenever the total exceeds 264
        while len > L1_MAX_MATCH {
            put_bytes(&mut self.0, &[0b111_00000 | hi, (L1_SPLIT_MATCH - 9) as u8, lo])?;
            len -= L1_SPLIT_MATCH;
        }

        if len < LEN_ESCAPE + 2 {
            put_bytes(&mut self.0, &[(((len - 2) << 5) as u8) | hi, lo])
        } else {
            put_bytes(&mut self.0, &[0b111_00000 | hi, (len - 9) as u8, lo])
        }
    }

    fn finish(mut self) -> usize {
        self.0.tag_level(Self::TAG);
        self.0.pos
    }
}

impl TokenSink for L2Writer<'_> {
    const MAX_DISTANCE: usize = L2_MAX_DISTANCE;
    const TAG: u8 = LEVEL2_TAG;

    fn put_lits(&mut self, lits: &[u8]) -> Result<(), CompressError> {
        put_lits_common(&mut self.0, lits)
    }

    fn put_backref(&mut self, distance: usize, len: usize) -> Result<(), CompressError> {
        debug_assert!(distance <= Self::MAX_DISTANCE);
        debug_assert!(len >= MIN_MATCH);

        let short = distance.min(MAX_SHORT_DISTANCE);
        let mut len = len - 2;
        let early = len.min(LEN_ESCAPE);

        put_bytes(&mut self.0, &[((early << 5) | (short >> 8)) as u8])?;

        if early == LEN_ESCAPE {
            len -= LEN_ESCAPE;
            loop {
                let b = len.min(0xff);
                put_bytes(&mut self.0, &[b as u8])?;
                if b != 0xff {
                    break;
                }
                len -= b;
            }
        }

        put_bytes(&mut self.0, &[short as u8])?;
        if short == MAX_SHORT_DISTANCE {
            let far = distance - MAX_SHORT_DISTANCE;
            put_bytes(&mut self.0, &[(far >> 8) as u8, far as u8])?;
        }
        Ok(())
    }

    fn finish(mut self) -> usize {
        self.0.tag_level(Self::TAG);
        self.0.pos
    }
}
