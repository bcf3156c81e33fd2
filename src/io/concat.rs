//! File-level concatenation.
//!
//! [`concat_files`] copies two or more inputs, in order, into one output
//! file, writing the delimiter run after every input and the terminator
//! once at the end (see [`crate::transform::splice`]). The report holds one
//! outcome per input; the first failure stops the run.

use std::path::Path;

use crate::error::{FileOutcome, FileStats, KefkaError, RunReport};
use crate::io::file_io::{check_inputs, create_dst_file, open_src_file};
use crate::io::params::ConcatParams;
use crate::io::prefs::Prefs;
use crate::transform::Splicer;
use crate::util::{get_file_size, output_parent, parent_exists, same_file};

/// Concatenates the inputs named by `params` into `params.output`.
pub fn concat_files(params: &ConcatParams, prefs: &Prefs) -> RunReport {
    if let Err(e) = preflight(params) {
        return RunReport::failed(e);
    }

    let mut report = RunReport::new();
    if let Err(e) = splice_into_output(params, prefs, &mut report) {
        report.push_error(e);
    }
    report
}

fn preflight(params: &ConcatParams) -> Result<(), KefkaError> {
    params.validate()?;
    check_inputs(&params.inputs)?;
    if !parent_exists(&params.output) {
        return Err(KefkaError::OutputLocationMissing(output_parent(&params.output)));
    }
    if params.inputs.iter().any(|i| same_file(i, &params.output)) {
        return Err(KefkaError::UnsupportedCombination(format!(
            "output file \"{}\" is also one of the input files",
            params.output.display()
        )));
    }
    Ok(())
}

fn splice_into_output(params: &ConcatParams, prefs: &Prefs, report: &mut RunReport) -> Result<(), KefkaError> {
    let output: &Path = &params.output;
    crate::displaylevel!(
        4,
        "concat: {} inputs, {} bytes of content\n",
        params.inputs.len(),
        params.inputs.iter().map(|p| get_file_size(p)).sum::<u64>()
    );
    let mut dst = create_dst_file(output)?;
    let mut splicer = Splicer::new(&mut dst, params.splice_spec(prefs.buffer_cap));

    for input in &params.inputs {
        crate::displaylevel!(3, "Appending {} \n", input.display());
        let mut src = open_src_file(input)?;
        let len = src.len;
        let (copied, delim) = splicer
            .append(&mut src, len)
            .map_err(|e| KefkaError::io(input, e))?;
        report.push_success(FileOutcome {
            input: input.clone(),
            output: output.to_path_buf(),
            stats: FileStats {
                bytes_read: copied,
                bytes_written: copied + delim,
                line_endings: 0,
                delimiter_bytes: delim,
                bom_removed: false,
            },
        });
    }

    let totals = splicer.finish().map_err(|e| KefkaError::io(output, e))?;
    crate::displaylevel!(
        4,
        "{}: {} inputs, {} bytes written\n",
        output.display(),
        totals.inputs,
        totals.bytes_written()
    );
    dst.finish()
}
