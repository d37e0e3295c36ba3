//! Command-line interface for the `fastlz` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings and the shared `DISPLAY_LEVEL` atomic with its print macros. |
//! | [`op_mode`]   | `OpMode` and the `FASTLZ_LEVEL` environment default. |
//! | [`args`]      | `clap` definitions and `ParsedArgs`, the resolved option set. |
//!
//! Typical call sequence: `Cli::parse` → `ParsedArgs::from_cli` → dispatch in `main`.

pub mod constants;
pub mod op_mode;
pub mod args;
