//! Compression level and the automatic level choice.
//!
//! Level 1 uses a single-slot hash table and an 8 KiB window; level 2 walks a
//! hash chain over a ~72 KiB window and spends more bytes on long matches.
//! When no level is requested, inputs below
//! [`AUTO_LEVEL2_THRESHOLD`](crate::config::AUTO_LEVEL2_THRESHOLD) get level 1.

use std::fmt;

use crate::config::AUTO_LEVEL2_THRESHOLD;
use crate::error::Error;

/// Raw level value that means "choose from the input size".
pub const LEVEL_AUTO: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Faster, 8 KiB window.
    Level1 = 1,
    /// Better ratio, larger window and hash-chain search.
    Level2 = 2,
}

impl Level {
    /// The level picked for an input of `input_len` bytes when the caller
    /// leaves it open.
    pub fn auto_for(input_len: usize) -> Self {
        if input_len < AUTO_LEVEL2_THRESHOLD {
            Level::Level1
        } else {
            Level::Level2
        }
    }

    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Level {
    type Error = Error;

    fn try_from(v: i32) -> Result<Self, Error> {
        match v {
            1 => Ok(Level::Level1),
            2 => Ok(Level::Level2),
            _ => Err(Error::InvalidArgument(
                "level must be either 1 or 2".to_string(),
            )),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

/// Resolve a requested level for an input of `input_len` bytes.
///
/// `None` and [`LEVEL_AUTO`] select by size; 1 and 2 are used as given;
/// anything else is an [`Error::InvalidArgument`].
pub fn select_level(input_len: usize, requested: Option<i32>) -> Result<Level, Error> {
    match requested {
        None | Some(LEVEL_AUTO) => Ok(Level::auto_for(input_len)),
        Some(v) => Level::try_from(v),
    }
}
