// e2e/error_handling.rs — exit codes and diagnostics for bad invocations
//
// Every failure exits with status 1 and prints `kefka: <message>` on stderr.
// Usage errors are reported before any file is touched.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kefka"))
        .args(args)
        .current_dir(dir)
        .env_remove("KEFKA_BUFFER_SIZE")
        .output()
        .expect("failed to run kefka")
}

fn assert_fails_with(out: &Output, needle: &str) {
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("kefka: "), "stderr: {stderr}");
    assert!(stderr.contains(needle), "stderr: {stderr}");
}

#[test]
fn test_err_blank_eol_value() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["--eol=", "a.txt", "-o", "."]);
    assert_fails_with(&out, "missing --eol= value");
}

#[test]
fn test_err_unknown_eol_value() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["--eol=mac", "a.txt", "-o", "."]);
    assert_fails_with(&out, "invalid --eol= value \"mac\"");
}

#[test]
fn test_err_unknown_mode() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["--compress", "a.txt"]);
    assert_fails_with(&out, "invalid mode value \"--compress\"");
}

#[test]
fn test_err_conflicting_outputs() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["--eol=lf", "a.txt", "-o", ".", "-i"]);
    assert_fails_with(&out, "only one of output directory");
}

#[test]
fn test_err_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["--eol=lf", "ghost.txt", "-o", "."]);
    assert_fails_with(&out, "input file \"ghost.txt\" not found");
    assert!(String::from_utf8_lossy(&out.stderr).contains("end-of-line conversion failed"));
}

#[test]
fn test_err_missing_output_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), b"x\r\n").unwrap();
    let out = run(dir.path(), &["--eol=lf", "a.txt", "-o", "nowhere"]);
    assert_fails_with(&out, "output directory \"nowhere\" does not exist");
}

#[test]
fn test_err_concat_single_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a"), b"x").unwrap();
    let out = run(dir.path(), &["--concat", "a", "-of", "o"]);
    assert_fails_with(&out, "at least 2 [input-files]");
    assert!(!dir.path().join("o").exists());
}

#[test]
fn test_err_concat_output_is_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a"), b"x").unwrap();
    fs::write(dir.path().join("b"), b"y").unwrap();
    let out = run(dir.path(), &["--concat", "a", "b", "-of", "./b"]);
    assert_fails_with(&out, "concatenation failed");
    assert_eq!(fs::read(dir.path().join("b")).unwrap(), b"y");
}

#[test]
fn test_err_quiet_still_reports_errors() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["--quiet", "--concat", "a", "b", "-of", "o"]);
    assert_fails_with(&out, "not found");
}
