//! Error kinds and the per-run report returned by the engines.
//!
//! Parameter-level problems are detected before any file is opened; I/O
//! faults raised while streaming are wrapped in [`KefkaError::UnhandledIo`]
//! together with the path being processed. Nothing here prints.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors produced by parameter validation and by the transform engines.
#[derive(Debug)]
pub enum KefkaError {
    /// A required parameter (or its value) was not supplied.
    MissingParameter(String),
    /// A parameter was supplied with a value outside its accepted set.
    InvalidParameterValue { param: String, value: String },
    /// An input file does not exist or is not a readable regular file.
    InputNotFound(PathBuf),
    /// The directory an output should land in does not exist.
    OutputLocationMissing(PathBuf),
    /// More than one of output directory / output file / in-place was given.
    ConflictingOutputTargets,
    /// The options are individually valid but cannot be combined.
    UnsupportedCombination(String),
    /// A lower-level I/O fault while working on `path`.
    UnhandledIo { path: PathBuf, source: io::Error },
}

/// Field-less discriminant of [`KefkaError`], convenient for matching in
/// callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingParameter,
    InvalidParameterValue,
    InputNotFound,
    OutputLocationMissing,
    ConflictingOutputTargets,
    UnsupportedCombination,
    UnhandledIo,
}

impl KefkaError {
    /// Wrap an I/O error raised while processing `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        KefkaError::UnhandledIo {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            KefkaError::MissingParameter(_) => ErrorKind::MissingParameter,
            KefkaError::InvalidParameterValue { .. } => ErrorKind::InvalidParameterValue,
            KefkaError::InputNotFound(_) => ErrorKind::InputNotFound,
            KefkaError::OutputLocationMissing(_) => ErrorKind::OutputLocationMissing,
            KefkaError::ConflictingOutputTargets => ErrorKind::ConflictingOutputTargets,
            KefkaError::UnsupportedCombination(_) => ErrorKind::UnsupportedCombination,
            KefkaError::UnhandledIo { .. } => ErrorKind::UnhandledIo,
        }
    }

    /// `true` for errors found while validating parameters, before any I/O.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::MissingParameter
                | ErrorKind::InvalidParameterValue
                | ErrorKind::ConflictingOutputTargets
                | ErrorKind::UnsupportedCombination
        )
    }
}

impl fmt::Display for KefkaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KefkaError::MissingParameter(what) => write!(f, "missing {what}"),
            KefkaError::InvalidParameterValue { param, value } => {
                write!(f, "invalid {param} value \"{value}\"")
            }
            KefkaError::InputNotFound(p) => write!(
                f,
                "input file \"{}\" not found or you don't have read permission",
                p.display()
            ),
            KefkaError::OutputLocationMissing(p) => write!(
                f,
                "output directory \"{}\" does not exist or you don't have read permission",
                p.display()
            ),
            KefkaError::ConflictingOutputTargets => f.write_str(
                "only one of output directory (-o), output file (-of) or in-place (-i) may be given",
            ),
            KefkaError::UnsupportedCombination(msg) => f.write_str(msg),
            KefkaError::UnhandledIo { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for KefkaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KefkaError::UnhandledIo { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Run report
// ─────────────────────────────────────────────────────────────────────────────

/// Byte counts for one completed file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub bytes_read: u64,
    pub bytes_written: u64,
    /// Line endings rewritten. Always 0 for concatenation.
    pub line_endings: u64,
    /// Delimiter bytes written after this input. Always 0 for conversion.
    pub delimiter_bytes: u64,
    pub bom_removed: bool,
}

/// Outcome of one successfully processed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: FileStats,
}

/// Ordered per-file results of one engine invocation.
///
/// The engines stop at the first failure, so a report holds zero or more
/// successes optionally followed by a single error. Parameter errors found
/// during preflight produce a report containing only that error.
#[derive(Debug, Default)]
pub struct RunReport {
    results: Vec<Result<FileOutcome, KefkaError>>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A report holding a single error and nothing else.
    pub fn failed(err: KefkaError) -> Self {
        let mut report = Self::new();
        report.push_error(err);
        report
    }

    pub fn push_success(&mut self, outcome: FileOutcome) {
        self.results.push(Ok(outcome));
    }

    pub fn push_error(&mut self, err: KefkaError) {
        self.results.push(Err(err));
    }

    /// Append `other` after the results already held. Collectors filled by
    /// separate workers are combined here, in worker order.
    pub fn merge(&mut self, other: RunReport) {
        self.results.extend(other.results);
    }

    pub fn is_success(&self) -> bool {
        self.results.iter().all(Result::is_ok)
    }

    pub fn results(&self) -> &[Result<FileOutcome, KefkaError>] {
        &self.results
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &FileOutcome> {
        self.results.iter().filter_map(|r| r.as_ref().ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = &KefkaError> {
        self.results.iter().filter_map(|r| r.as_ref().err())
    }

    /// Outcome for `input`, if it completed.
    pub fn outcome_for(&self, input: &Path) -> Option<&FileOutcome> {
        self.outcomes().find(|o| o.input == input)
    }

    pub fn into_results(self) -> Vec<Result<FileOutcome, KefkaError>> {
        self.results
    }
}
