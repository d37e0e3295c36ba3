// cli/constants.rs: program identity strings and display infrastructure.

use std::sync::atomic::{AtomicU32, Ordering};

// ── Identity constants ────────────────────────────────────────────────────────
pub const COMPRESSOR_NAME: &str = "fastlz";
pub const AUTHOR: &str = "the fastlz authors";

/// Path that stands for stdin (input) or stdout (output).
pub const STDIO_MARK: &str = "-";

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal (downgradable); 3 = verbose; 4 = debug
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Apply `-v` / `-q` counts on top of the default level, saturating at 0.
pub fn adjust_display_level(verbose: u8, quiet: u8) -> u32 {
    let level = (2 + verbose as u32).saturating_sub(quiet as u32);
    set_display_level(level);
    level
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr only at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressor_name_constant() {
        assert_eq!(COMPRESSOR_NAME, "fastlz");
    }

    #[test]
    fn display_level_round_trip() {
        let prev = display_level();
        set_display_level(3);
        assert_eq!(display_level(), 3);
        set_display_level(prev);
    }

    #[test]
    fn adjust_saturates() {
        let prev = display_level();
        assert_eq!(adjust_display_level(0, 0), 2);
        assert_eq!(adjust_display_level(2, 0), 4);
        assert_eq!(adjust_display_level(0, 5), 0);
        set_display_level(prev);
    }
}
