//! Command-line interface for the `kefka` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, mode selectors, the global `DISPLAY_LEVEL` and display macros. |
//! | [`help`]      | Help topics, usage text and the version banner. |
//! | [`arg_utils`] | Low-level helpers: size/count parsing, `prefix=value` splitting. |
//! | [`op_mode`]   | `OpKind`, the first-argument mapping, and the `Command` variant that runs a pipeline. |
//! | [`args`]      | `ParsedArgs` — the argument loop that turns `argv` into an action plus preferences. |
//!
//! Typical call sequence: `Prefs::from_env` → `parse_args` → `Command::run`.

pub mod constants;
pub mod help;
pub mod arg_utils;
pub mod op_mode;
pub mod args;
