// Integration tests for src/cli/op_mode.rs — mode selection and command dispatch.

use std::fs;

use kefka::cli::op_mode::{determine_op_kind, Command, OpKind};
use kefka::{ConcatParams, EolKind, EolParams, ErrorKind, OutputTarget, Prefs};
use tempfile::TempDir;

#[test]
fn selectors_map_to_kinds() {
    assert_eq!(determine_op_kind("--eol=crlf"), Some(OpKind::EolConversion));
    assert_eq!(determine_op_kind("--concat"), Some(OpKind::Concatenation));
    assert_eq!(determine_op_kind("--help"), None);
    assert_eq!(determine_op_kind(""), None);
}

#[test]
fn eol_command_runs_conversion() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("a.txt");
    fs::write(&input, b"p\rq\r").unwrap();
    let staging = TempDir::new().unwrap();
    let mut prefs = Prefs::default();
    prefs.set_temp_dir(Some(staging.path()));

    let cmd = Command::EolConversion(EolParams {
        target: EolKind::Crlf,
        inputs: vec![input.clone()],
        output: OutputTarget::InPlace,
        remove_bom: true,
    });
    assert_eq!(cmd.kind(), OpKind::EolConversion);
    assert!(cmd.run(&prefs).is_success());
    assert_eq!(fs::read(&input).unwrap(), b"p\r\nq\r\n");
}

#[test]
fn concat_command_runs_concatenation() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&a, b"1").unwrap();
    fs::write(&b, b"2").unwrap();
    let out = dir.path().join("out");

    let mut params = ConcatParams::new(vec![a, b], out.clone());
    params.terminator = Some(EolKind::Lf);
    let cmd = Command::Concatenation(params);
    assert_eq!(cmd.kind(), OpKind::Concatenation);
    assert!(cmd.run(&Prefs::default()).is_success());
    assert_eq!(fs::read(&out).unwrap(), b"12\n");
}

#[test]
fn command_reports_pipeline_errors() {
    let dir = TempDir::new().unwrap();
    let cmd = Command::Concatenation(ConcatParams::new(
        vec![dir.path().join("a"), dir.path().join("b")],
        dir.path().join("out"),
    ));
    let report = cmd.run(&Prefs::default());
    assert_eq!(report.errors().next().unwrap().kind(), ErrorKind::InputNotFound);
}
