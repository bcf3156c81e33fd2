//! Operation selection for the CLI.
//!
//! This module provides:
//! - [`OpKind`] — the two things kefka can do.
//! - [`determine_op_kind`] — maps the mode-selecting first argument to an [`OpKind`].
//! - [`Command`] — a closed variant carrying the validated parameters of one run,
//!   and [`Command::run`] which hands them to the matching pipeline.

use crate::cli::constants::{CONCAT_MODE, EOL_MODE_PREFIX};
use crate::error::RunReport;
use crate::io::{concat_files, convert_files, ConcatParams, EolParams, Prefs};

/// What the CLI should do with its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// Rewrite line endings (`--eol=<kind>`).
    EolConversion,
    /// Join files (`--concat`).
    Concatenation,
}

impl OpKind {
    /// Short name used in help topics and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            OpKind::EolConversion => "eol",
            OpKind::Concatenation => "concat",
        }
    }
}

/// Infer the operation from the first command-line argument.
///
/// Matching is case-insensitive. Returns `None` for anything that selects
/// neither mode.
pub fn determine_op_kind(selector: &str) -> Option<OpKind> {
    let selector = selector.to_ascii_lowercase();
    if selector.starts_with(EOL_MODE_PREFIX) {
        Some(OpKind::EolConversion)
    } else if selector == CONCAT_MODE {
        Some(OpKind::Concatenation)
    } else {
        None
    }
}

/// A fully parsed, validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    EolConversion(EolParams),
    Concatenation(ConcatParams),
}

impl Command {
    pub fn kind(&self) -> OpKind {
        match self {
            Command::EolConversion(_) => OpKind::EolConversion,
            Command::Concatenation(_) => OpKind::Concatenation,
        }
    }

    /// Run the pipeline for this command.
    pub fn run(&self, prefs: &Prefs) -> RunReport {
        match self {
            Command::EolConversion(p) => convert_files(p, prefs),
            Command::Concatenation(p) => concat_files(p, prefs),
        }
    }
}
