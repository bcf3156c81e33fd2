//! File-level pipelines.
//!
//! This module opens and closes files, checks that inputs and output
//! locations exist, and drives the byte-level engines in
//! [`crate::transform`]. Every entry point returns a
//! [`RunReport`](crate::error::RunReport); none of them print results.

pub mod concat;
pub mod convert;
pub mod file_io;
pub mod in_place;
pub mod params;
pub mod prefs;

// ── Core type re-exports ──────────────────────────────────────────────────────
pub use params::{ConcatParams, EolParams, OutputTarget};
pub use prefs::Prefs;

// ── Pipelines ─────────────────────────────────────────────────────────────────
/// Convert line endings in a batch of files.
pub use convert::convert_files;

/// Convert one file into a separate output file.
pub use convert::convert_file;

/// Concatenate files with optional delimiters and terminator.
pub use concat::concat_files;

/// Rewrite a file in place through a staging file.
pub use in_place::rewrite_in_place;
