//! Hash-chain match finder used by level 2.
//!
//! Every position is linked into a per-bucket chain, newest first. A probe
//! walks at most [`MAX_CHAIN_DEPTH`] links, keeps the longest candidate, and
//! gives up as soon as a link falls outside the level's window. Because
//! links always point backwards, stale ring-buffer slots can only hold
//! positions that are farther than the window and are rejected by the
//! distance check.

use super::compress::CompressError;
use super::encode::TokenSink;
use super::types::{
    count_match, hash3, peek4, HASH_SIZE, L2_FAR_MIN_MATCH, L2_MAX_DISTANCE, MAX_SHORT_DISTANCE,
    MIN_MATCH,
};
use crate::config::MAX_CHAIN_DEPTH;

const NIL: u32 = u32::MAX;

/// Ring size for the `prev` links; must exceed the level 2 window.
const CHAIN_LOG: u32 = 17;
const CHAIN_SIZE: usize = 1 << CHAIN_LOG;
const CHAIN_MASK: usize = CHAIN_SIZE - 1;

const _: () = assert!(CHAIN_SIZE > L2_MAX_DISTANCE + 1);

/// A back-reference candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Bytes behind the cursor, minus one.
    pub distance: usize,
    pub len: usize,
}

pub struct HashChain {
    head: Vec<u32>,
    prev: Vec<u32>,
}

impl HashChain {
    pub fn new() -> Self {
        Self {
            head: vec![NIL; HASH_SIZE],
            prev: vec![NIL; CHAIN_SIZE],
        }
    }

    /// Link `pos` into the chain of its hash. Positions without four bytes of
    /// look-ahead are skipped; they can never start a match anyway.
    #[inline]
    pub fn insert(&mut self, input: &[u8], pos: usize) {
        if let Some(head) = peek4(input, pos) {
            self.insert_hashed(pos, hash3(head));
        }
    }

    #[inline]
    fn insert_hashed(&mut self, pos: usize, h: usize) {
        self.prev[pos & CHAIN_MASK] = self.head[h];
        self.head[h] = pos as u32;
    }

    /// Longest match for `input[pos..]` among earlier positions sharing hash
    /// `h`, within `max_distance`. Ties keep the nearer candidate.
    pub fn find_best(
        &self,
        input: &[u8],
        pos: usize,
        h: usize,
        max_distance: usize,
        depth: usize,
    ) -> Option<Match> {
        let limit = input.len();
        let longest_possible = limit - pos;
        let mut best: Option<Match> = None;
        let mut cand = self.head[h];

        for _ in 0..depth {
            if cand == NIL {
                break;
            }
            let c = cand as usize;
            debug_assert!(c < pos);
            let distance = pos - c - 1;
            if distance > max_distance {
                break;
            }

            let best_len = best.map_or(MIN_MATCH - 1, |m| m.len);
            // cheap reject: a longer match must agree at the current best length
            if input[c + best_len] == input[pos + best_len] {
                let len = count_match(input, c, pos, 0, limit);
                let needed = if distance >= MAX_SHORT_DISTANCE {
                    L2_FAR_MIN_MATCH
                } else {
                    MIN_MATCH
                };
                if len >= needed && len > best_len {
                    best = Some(Match { distance, len });
                    if len == longest_possible {
                        break;
                    }
                }
            }

            cand = self.prev[c & CHAIN_MASK];
        }

        best
    }
}

impl Default for HashChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Chained matcher: like the single-slot one, but searches deeper and links
/// every position a match covers so later probes can find them.
pub fn compress_chained<S: TokenSink>(input: &[u8], sink: &mut S) -> Result<(), CompressError> {
    debug_assert!(S::MAX_DISTANCE <= L2_MAX_DISTANCE);

    let mut chain = HashChain::new();
    chain.insert(input, 0);
    let mut anchor = 0;
    let mut pos = 1;

    while let Some(head) = peek4(input, pos) {
        let h = hash3(head);
        let found = chain.find_best(input, pos, h, S::MAX_DISTANCE, MAX_CHAIN_DEPTH);
        chain.insert_hashed(pos, h);

        let Some(m) = found else {
            pos += 1;
            continue;
        };

        sink.put_lits(&input[anchor..pos])?;
        sink.put_backref(m.distance, m.len)?;

        let end = pos + m.len;
        for p in pos + 1..end {
            chain.insert(input, p);
        }
        pos = end;
        anchor = end;
    }

    sink.put_lits(&input[anchor..])
}
