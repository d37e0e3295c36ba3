//! Operation mode and startup defaults for the CLI.
//!
//! - [`OpMode`]: what the CLI should do with its input.
//! - [`init_level_from`]: parse the default level taken from [`ENV_LEVEL`],
//!   falling back to [`LEVEL_DEFAULT`] (auto).

use crate::config::{ENV_LEVEL, LEVEL_DEFAULT};
use crate::displaylevel;
use crate::level::LEVEL_AUTO;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    Compress,
    Decompress,
}

/// Parse an optional `FASTLZ_LEVEL` value into a raw level.
///
/// Accepts `0` (auto), `1` and `2`. Anything else is ignored with a warning
/// at display level 2 and the default is used.
pub fn init_level_from(env_val: Option<&str>) -> i32 {
    if let Some(env) = env_val {
        match env.trim().parse::<i32>() {
            Ok(v @ (LEVEL_AUTO | 1 | 2)) => return v,
            _ => displaylevel!(
                2,
                "Ignore environment variable setting {}={}: not 0, 1 or 2\n",
                ENV_LEVEL,
                env
            ),
        }
    }
    LEVEL_DEFAULT
}
