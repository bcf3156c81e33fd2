//! End-of-line conversion across a batch of input files.
//!
//! [`convert_files`] runs a preflight pass (parameters, input existence,
//! output location) before touching any file, then converts the inputs
//! strictly in order. The first failure stops the run; files after it are
//! not attempted.
//!
//! Output targeting:
//!
//! | [`OutputTarget`] | Written to                                   |
//! |------------------|----------------------------------------------|
//! | `Directory(d)`   | `d/<input file name>`                        |
//! | `File(f)`        | `f` (single input only)                      |
//! | `InPlace`        | the input itself, staged via the temp dir    |
//!
//! An output path that resolves to its own input is rewritten in place
//! rather than truncated under the reader.

use std::path::{Path, PathBuf};

use crate::error::{FileOutcome, FileStats, KefkaError, RunReport};
use crate::io::file_io::{check_inputs, create_dst_file, open_src_file};
use crate::io::in_place::rewrite_in_place;
use crate::io::params::{EolParams, OutputTarget};
use crate::io::prefs::Prefs;
use crate::transform::{normalize_eol, NormalizeOptions, NormalizeStats};
use crate::util::{is_directory, output_parent, parent_exists, same_file};

/// Converts every input named by `params`.
pub fn convert_files(params: &EolParams, prefs: &Prefs) -> RunReport {
    if let Err(e) = preflight(params) {
        return RunReport::failed(e);
    }

    let opts = NormalizeOptions {
        target: params.target,
        remove_bom: params.remove_bom,
        buffer_cap: prefs.buffer_cap,
    };

    let mut report = RunReport::new();
    for input in &params.inputs {
        crate::displaylevel!(3, "Converting {} to {} \n", input.display(), params.target);
        let result = output_path(&params.output, input)
            .and_then(|output| convert_one(input, &output, &opts, prefs));
        match result {
            Ok(outcome) => report.push_success(outcome),
            Err(e) => {
                report.push_error(e);
                break;
            }
        }
    }
    report
}

fn preflight(params: &EolParams) -> Result<(), KefkaError> {
    params.validate()?;
    check_inputs(&params.inputs)?;
    match &params.output {
        OutputTarget::Directory(dir) if !is_directory(dir) => {
            Err(KefkaError::OutputLocationMissing(dir.clone()))
        }
        OutputTarget::File(file) if !parent_exists(file) => {
            Err(KefkaError::OutputLocationMissing(output_parent(file)))
        }
        _ => Ok(()),
    }
}

/// Where `input` lands under `target`.
fn output_path(target: &OutputTarget, input: &Path) -> Result<PathBuf, KefkaError> {
    match target {
        OutputTarget::Directory(dir) => input
            .file_name()
            .map(|name| dir.join(name))
            .ok_or_else(|| KefkaError::InputNotFound(input.to_path_buf())),
        OutputTarget::File(file) => Ok(file.clone()),
        OutputTarget::InPlace => Ok(input.to_path_buf()),
    }
}

fn convert_one(
    input: &Path,
    output: &Path,
    opts: &NormalizeOptions,
    prefs: &Prefs,
) -> Result<FileOutcome, KefkaError> {
    let stats = if input == output || same_file(input, output) {
        rewrite_in_place(input, prefs, |src, dst| {
            let len = src.len;
            normalize_eol(src, len, dst, opts)
        })?
    } else {
        convert_file(input, output, opts)?
    };
    crate::displaylevel!(
        4,
        "{}: {} line endings, {} -> {} bytes\n",
        input.display(),
        stats.line_endings,
        stats.bytes_read,
        stats.bytes_written
    );
    Ok(FileOutcome {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        stats: file_stats(&stats),
    })
}

/// Converts `input` into a separate `output` file.
pub fn convert_file(
    input: &Path,
    output: &Path,
    opts: &NormalizeOptions,
) -> Result<NormalizeStats, KefkaError> {
    let mut src = open_src_file(input)?;
    let mut dst = create_dst_file(output)?;
    let len = src.len;
    let stats = normalize_eol(&mut src, len, &mut dst, opts).map_err(|e| KefkaError::io(input, e))?;
    dst.finish()?;
    Ok(stats)
}

fn file_stats(s: &NormalizeStats) -> FileStats {
    FileStats {
        bytes_read: s.bytes_read,
        bytes_written: s.bytes_written,
        line_endings: s.line_endings,
        delimiter_bytes: 0,
        bom_removed: s.bom_removed,
    }
}
