//! Command-line argument parsing for the `kefka` binary.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both return a [`ParsedArgs`] value describing what to do.
//!
//! The global options `--quiet`, `--verbose`, `--buffer=SIZE` and
//! `--temp-dir=DIR` may appear anywhere. Of what remains, the first argument
//! selects the mode (see [`determine_op_kind`]); the rest are parsed by that
//! mode. Options take their value either after `=` (`-d=lf`, `-dn=2`) or as
//! the following argument (`-o dir`, `-of file`).
//!
//! Problems come back as [`KefkaError`] usage errors; nothing here touches
//! the filesystem.

use std::path::{Path, PathBuf};

use crate::cli::arg_utils::{option_value, read_count, read_u32_from_str};
use crate::cli::constants::EOL_MODE_PREFIX;
use crate::cli::help::HelpTopic;
use crate::cli::op_mode::{determine_op_kind, Command, OpKind};
use crate::eol::EolKind;
use crate::error::KefkaError;
use crate::io::{ConcatParams, EolParams, OutputTarget, Prefs};

// ── Display levels selected by the global flags ───────────────────────────────
const QUIET_LEVEL: u32 = 1;
const VERBOSE_LEVEL: u32 = 4;

// ── Public output type ─────────────────────────────────────────────────────────

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Run(Command),
    Help(HelpTopic),
    Version,
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub action: Action,
    /// Starting preferences with `--buffer=` / `--temp-dir=` applied.
    pub prefs: Prefs,
    /// Display level requested by `--quiet` / `--verbose`; the last one wins.
    pub display_level: Option<u32>,
}

// ── Public API ─────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` (skipping argv[0]) on top of `prefs`.
pub fn parse_args(prefs: Prefs) -> Result<ParsedArgs, KefkaError> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(prefs, &argv)
}

/// Parse an explicit argument list (argv[1..]) on top of `prefs`.
pub fn parse_args_from(mut prefs: Prefs, argv: &[String]) -> Result<ParsedArgs, KefkaError> {
    let mut display_level = None;
    let mut rest: Vec<&str> = Vec::with_capacity(argv.len());

    for arg in argv {
        let arg = arg.as_str();
        if arg == "--quiet" {
            display_level = Some(QUIET_LEVEL);
        } else if arg == "--verbose" {
            display_level = Some(VERBOSE_LEVEL);
        } else if let Some(value) = option_value(arg, "--buffer=") {
            prefs.set_buffer_cap(parse_size("--buffer", value)?);
        } else if let Some(value) = option_value(arg, "--temp-dir=") {
            if value.trim().is_empty() {
                return Err(KefkaError::MissingParameter("--temp-dir= value".to_owned()));
            }
            prefs.set_temp_dir(Some(Path::new(value)));
        } else {
            rest.push(arg);
        }
    }

    let action = parse_action(&rest)?;
    Ok(ParsedArgs {
        action,
        prefs,
        display_level,
    })
}

// ── Mode dispatch ──────────────────────────────────────────────────────────────

fn parse_action(args: &[&str]) -> Result<Action, KefkaError> {
    let Some(first) = args.first() else {
        return Ok(Action::Help(HelpTopic::General));
    };
    let selector = first.to_ascii_lowercase();

    match selector.as_str() {
        "--help" | "-h" | "help" | "/?" => {
            return Ok(Action::Help(HelpTopic::from_word(args.get(1).copied())))
        }
        "--version" | "-v" => return Ok(Action::Version),
        _ => {}
    }

    match determine_op_kind(&selector) {
        Some(OpKind::EolConversion) => {
            let value = &selector[EOL_MODE_PREFIX.len()..];
            parse_eol(value, &args[1..]).map(|p| Action::Run(Command::EolConversion(p)))
        }
        Some(OpKind::Concatenation) => {
            parse_concat(&args[1..]).map(|p| Action::Run(Command::Concatenation(p)))
        }
        None => Err(KefkaError::InvalidParameterValue {
            param: "mode".to_owned(),
            value: (*first).to_owned(),
        }),
    }
}

// ── --eol= ─────────────────────────────────────────────────────────────────────

fn parse_eol(value: &str, args: &[&str]) -> Result<EolParams, KefkaError> {
    let target = EolKind::parse(EOL_MODE_PREFIX, value)?;

    let mut inputs = Vec::new();
    let mut outputs: Vec<OutputTarget> = Vec::new();
    let mut remove_bom = true;

    let mut idx = 0;
    while idx < args.len() {
        let arg = args[idx];
        match arg {
            "-o" => {
                let dir = next_value(args, &mut idx, "-o")?;
                outputs.push(OutputTarget::Directory(PathBuf::from(dir)));
            }
            "-of" => {
                let file = next_value(args, &mut idx, "-of")?;
                outputs.push(OutputTarget::File(PathBuf::from(file)));
            }
            "-i" | "--in-place" => outputs.push(OutputTarget::InPlace),
            "--keep-bom" => remove_bom = false,
            _ if is_option(arg) => return Err(unknown_option(arg)),
            _ => inputs.push(PathBuf::from(arg)),
        }
        idx += 1;
    }

    let output = match outputs.len() {
        0 => {
            return Err(KefkaError::MissingParameter(
                "[output] (-o output-dir, -of output-file or -i)".to_owned(),
            ))
        }
        1 => outputs.remove(0),
        _ => return Err(KefkaError::ConflictingOutputTargets),
    };

    let params = EolParams {
        target,
        inputs,
        output,
        remove_bom,
    };
    params.validate()?;
    Ok(params)
}

// ── --concat ───────────────────────────────────────────────────────────────────

fn parse_concat(args: &[&str]) -> Result<ConcatParams, KefkaError> {
    let mut params = ConcatParams::new(Vec::new(), PathBuf::new());
    let mut output = None;

    let mut idx = 0;
    while idx < args.len() {
        let arg = args[idx];
        if arg == "-of" {
            output = Some(PathBuf::from(next_value(args, &mut idx, "-of")?));
        } else if let Some(v) = option_value(arg, "-d=") {
            params.delimiter = Some(EolKind::parse("-d=", v)?);
        } else if let Some(v) = option_value(arg, "-dn=") {
            params.delimiter_repeat = read_count(v).ok_or_else(|| KefkaError::InvalidParameterValue {
                param: "-dn=".to_owned(),
                value: v.to_owned(),
            })?;
        } else if let Some(v) = option_value(arg, "-e=") {
            params.terminator = Some(EolKind::parse("-e=", v)?);
        } else if is_option(arg) {
            return Err(unknown_option(arg));
        } else {
            params.inputs.push(PathBuf::from(arg));
        }
        idx += 1;
    }

    params.validate()?;
    params.output = output.ok_or_else(|| KefkaError::MissingParameter("[-of output-file]".to_owned()))?;
    Ok(params)
}

// ── Private helpers ────────────────────────────────────────────────────────────

/// Consumes the argument after `args[*idx]` as the value of `flag`.
fn next_value<'a>(args: &[&'a str], idx: &mut usize, flag: &str) -> Result<&'a str, KefkaError> {
    match args.get(*idx + 1) {
        Some(&v) if !v.trim().is_empty() && !is_option(v) => {
            *idx += 1;
            Ok(v)
        }
        _ => Err(KefkaError::MissingParameter(format!("{flag} value"))),
    }
}

/// `-x` style arguments are options; a lone `-` is not.
fn is_option(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-')
}

fn unknown_option(arg: &str) -> KefkaError {
    KefkaError::InvalidParameterValue {
        param: "option".to_owned(),
        value: arg.to_owned(),
    }
}

/// Reads a byte size such as `4096`, `64K` or `1MiB`.
fn parse_size(param: &str, value: &str) -> Result<usize, KefkaError> {
    if value.trim().is_empty() {
        return Err(KefkaError::MissingParameter(format!("{param}= value")));
    }
    match read_u32_from_str(value) {
        Some((n, "")) => Ok(n as usize),
        _ => Err(KefkaError::InvalidParameterValue {
            param: param.to_owned(),
            value: value.to_owned(),
        }),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
