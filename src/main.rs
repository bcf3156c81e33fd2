//! Binary entry point for the `kefka` command-line tool.
//!
//! # Control flow
//!
//! 1. [`Prefs::from_env`] applies `KEFKA_BUFFER_SIZE` to the defaults.
//! 2. [`parse_args`] processes all arguments and builds a [`ParsedArgs`] value.
//! 3. [`run`] prints help or version, or runs the selected [`Command`] and
//!    reports its per-file results.
//!
//! Exit code 0 means every file was processed; any error exits with 1.

use anyhow::Context;

use kefka::cli::args::{parse_args, Action, ParsedArgs};
use kefka::cli::constants::{set_display_level, PROGRAM_NAME};
use kefka::cli::help::{print_help, version_banner, HelpTopic};
use kefka::cli::op_mode::{Command, OpKind};
use kefka::error::RunReport;
use kefka::io::Prefs;

/// Execute the action selected by argument parsing.
///
/// Returns the process exit code, or the first error of the run.
fn run(args: ParsedArgs) -> anyhow::Result<i32> {
    match args.action {
        Action::Help(topic) => {
            print_help(&topic);
            Ok(if matches!(topic, HelpTopic::Unknown(_)) { 1 } else { 0 })
        }
        Action::Version => {
            kefka::displayout!("{}\n", version_banner());
            Ok(0)
        }
        Action::Run(command) => {
            kefka::displaylevel!(
                4,
                "{}: buffer {} bytes, temp dir {}\n",
                PROGRAM_NAME,
                args.prefs.buffer_cap,
                args.prefs.temp_dir().display()
            );
            let report = command.run(&args.prefs);
            display_report(&command, &report);
            finish(&command, report)
        }
    }
}

/// Per-file lines at level 3, a one-line summary at level 2.
fn display_report(command: &Command, report: &RunReport) {
    for outcome in report.outcomes() {
        let s = &outcome.stats;
        match command.kind() {
            OpKind::EolConversion => kefka::displaylevel!(
                3,
                "{} -> {} : {} line endings, {} -> {} bytes{}\n",
                outcome.input.display(),
                outcome.output.display(),
                s.line_endings,
                s.bytes_read,
                s.bytes_written,
                if s.bom_removed { ", BOM removed" } else { "" }
            ),
            OpKind::Concatenation => kefka::displaylevel!(
                3,
                "{} : {} bytes copied, {} delimiter bytes\n",
                outcome.input.display(),
                s.bytes_read,
                s.delimiter_bytes
            ),
        }
    }

    if !report.is_success() {
        return;
    }
    let files = report.outcomes().count();
    match command {
        Command::EolConversion(p) => kefka::displaylevel!(
            2,
            "Converted {} file(s) to {}\n",
            files,
            p.target
        ),
        Command::Concatenation(p) => kefka::displaylevel!(
            2,
            "Concatenated {} file(s) into {}\n",
            files,
            p.output.display()
        ),
    }
}

fn finish(command: &Command, report: RunReport) -> anyhow::Result<i32> {
    let first_error = report.into_results().into_iter().find_map(Result::err);
    match first_error {
        None => Ok(0),
        Some(e) => Err::<i32, _>(e).with_context(|| match command.kind() {
            OpKind::EolConversion => "end-of-line conversion failed",
            OpKind::Concatenation => "concatenation failed",
        }),
    }
}

fn main() {
    let args = match parse_args(Prefs::from_env()) {
        Ok(a) => a,
        Err(e) => {
            kefka::displaylevel!(1, "{}: {}\n", PROGRAM_NAME, e);
            if e.is_usage_error() {
                kefka::displaylevel!(1, "Run '{} -h' for usage.\n", PROGRAM_NAME);
            }
            std::process::exit(1);
        }
    };

    if let Some(level) = args.display_level {
        set_display_level(level);
    }

    let exit_code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            kefka::displaylevel!(1, "{}: {:#}\n", PROGRAM_NAME, e);
            1
        }
    };
    std::process::exit(exit_code);
}
