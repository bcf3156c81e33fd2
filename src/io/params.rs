//! Validated parameter structures consumed by the pipelines.
//!
//! The CLI builds these; library callers may build them directly. Each
//! carries a `validate` check for the constraints that do not need the
//! filesystem.

use std::path::PathBuf;

use crate::config::DELIMITER_REPEAT_DEFAULT;
use crate::eol::EolKind;
use crate::error::KefkaError;
use crate::transform::SpliceSpec;

/// Where converted files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Into an existing directory, keeping each input's file name.
    Directory(PathBuf),
    /// Into one named file. Only valid with a single input.
    File(PathBuf),
    /// Over the input itself, via a temporary file.
    InPlace,
}

/// Parameters of an end-of-line conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EolParams {
    pub target: EolKind,
    pub inputs: Vec<PathBuf>,
    pub output: OutputTarget,
    pub remove_bom: bool,
}

impl EolParams {
    pub fn validate(&self) -> Result<(), KefkaError> {
        if self.inputs.is_empty() {
            return Err(KefkaError::MissingParameter("[input-files]".to_owned()));
        }
        if matches!(self.output, OutputTarget::File(_)) && self.inputs.len() > 1 {
            return Err(KefkaError::UnsupportedCombination(
                "an output file (-of) can only be used with a single input file".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Parameters of a concatenation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatParams {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    /// Written after every input; `None` for no delimiter.
    pub delimiter: Option<EolKind>,
    pub delimiter_repeat: usize,
    /// Written once at the end of the output.
    pub terminator: Option<EolKind>,
}

impl ConcatParams {
    /// Plain concatenation of `inputs` into `output`.
    pub fn new(inputs: Vec<PathBuf>, output: PathBuf) -> Self {
        ConcatParams {
            inputs,
            output,
            delimiter: None,
            delimiter_repeat: DELIMITER_REPEAT_DEFAULT,
            terminator: None,
        }
    }

    pub fn validate(&self) -> Result<(), KefkaError> {
        match self.inputs.len() {
            0 => Err(KefkaError::MissingParameter("[input-files]".to_owned())),
            1 => Err(KefkaError::UnsupportedCombination(
                "at least 2 [input-files] are required for concatenation".to_owned(),
            )),
            _ => Ok(()),
        }
    }

    pub fn splice_spec(&self, buffer_cap: usize) -> SpliceSpec {
        SpliceSpec {
            delimiter: self.delimiter,
            delimiter_repeat: self.delimiter_repeat,
            terminator: self.terminator,
            buffer_cap,
        }
    }
}
