// kefka — streaming end-of-line normalization and file concatenation

pub mod eol;
pub mod error;
pub mod config;
pub mod util;
pub mod transform;
pub mod io;
pub mod cli;

pub use eol::EolKind;
pub use error::{ErrorKind, FileOutcome, FileStats, KefkaError, RunReport};
pub use io::{
    concat_files, convert_file, convert_files, ConcatParams, EolParams, OutputTarget, Prefs,
};
pub use transform::{normalize_eol, splice_streams, NormalizeOptions, SpliceSpec};

// ── Version constants ─────────────────────────────────────────────────────────
pub const KEFKA_VERSION_STRING: &str = cli::constants::KEFKA_VERSION_STRING;

/// Returns the crate version string.
pub fn version_string() -> &'static str {
    KEFKA_VERSION_STRING
}
