// e2e/cli_integration.rs — CLI integration tests
//
// Runs the `kefka` binary as a black box with std::process::Command.
// Covers end-of-line conversion to a directory, a file and in place,
// concatenation with delimiters, help and version output, and the
// KEFKA_BUFFER_SIZE / --buffer settings on large inputs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Locate the `kefka` binary produced by Cargo.
fn kefka_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_kefka"))
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(kefka_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("KEFKA_BUFFER_SIZE")
        .output()
        .expect("failed to run kefka")
}

fn write(dir: &Path, name: &str, data: &[u8]) {
    fs::write(dir.join(name), data).unwrap();
}

// ── 1. End-of-line conversion ────────────────────────────────────────────────

#[test]
fn test_cli_eol_to_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.txt", b"\xEF\xBB\xBFone\r\ntwo\rthree\n");
    fs::create_dir(dir.path().join("out")).unwrap();

    let out = run(dir.path(), &["--eol=lf", "a.txt", "-o", "out"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(dir.path().join("out/a.txt")).unwrap(), b"one\ntwo\nthree\n");
    assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), b"\xEF\xBB\xBFone\r\ntwo\rthree\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("Converted 1 file(s) to lf"));
}

#[test]
fn test_cli_eol_to_file_keep_bom() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.txt", b"\xEF\xBB\xBFx\ny");

    let out = run(dir.path(), &["--eol=crlf", "a.txt", "-of", "b.txt", "--keep-bom"]);
    assert!(out.status.success());
    assert_eq!(fs::read(dir.path().join("b.txt")).unwrap(), b"\xEF\xBB\xBFx\r\ny");
}

#[test]
fn test_cli_eol_in_place() {
    let dir = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    write(dir.path(), "a.txt", b"1\r\n2\r\n");
    write(dir.path(), "b.txt", b"3\n");

    let temp_arg = format!("--temp-dir={}", staging.path().display());
    let out = run(dir.path(), &["--eol=cr", "a.txt", "b.txt", "-i", &temp_arg]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), b"1\r2\r");
    assert_eq!(fs::read(dir.path().join("b.txt")).unwrap(), b"3\r");
    assert_eq!(fs::read_dir(staging.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_large_file_small_buffer() {
    let dir = TempDir::new().unwrap();
    let body = b"0123456789abcde\r\n".repeat(60_000);
    write(dir.path(), "big.txt", &body);

    let out = Command::new(kefka_bin())
        .args(["--eol=lf", "big.txt", "-of", "big.lf"])
        .current_dir(dir.path())
        .env("KEFKA_BUFFER_SIZE", "7")
        .output()
        .unwrap();
    assert!(out.status.success());
    let expected = b"0123456789abcde\n".repeat(60_000);
    assert_eq!(fs::read(dir.path().join("big.lf")).unwrap(), expected);

    // --buffer wins over the environment.
    let out = Command::new(kefka_bin())
        .args(["--eol=crlf", "big.lf", "-of", "big.crlf", "--buffer=3"])
        .current_dir(dir.path())
        .env("KEFKA_BUFFER_SIZE", "1M")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(fs::read(dir.path().join("big.crlf")).unwrap(), body);
}

// ── 2. Concatenation ─────────────────────────────────────────────────────────

#[test]
fn test_cli_concat_with_delimiters() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "1.js", b"var a;");
    write(dir.path(), "2.js", b"var b;");

    let out = run(
        dir.path(),
        &["--concat", "1.js", "2.js", "-of", "all.js", "-d=lf", "-dn=2", "-e=crlf"],
    );
    assert!(out.status.success());
    assert_eq!(fs::read(dir.path().join("all.js")).unwrap(), b"var a;\n\nvar b;\n\n\r\n");
}

#[test]
fn test_cli_concat_plain() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a", b"AAA");
    write(dir.path(), "b", b"");
    write(dir.path(), "c", b"C\r");

    let out = run(dir.path(), &["--concat", "a", "b", "c", "-of", "abc", "--quiet"]);
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
    assert_eq!(fs::read(dir.path().join("abc")).unwrap(), b"AAAC\r");
}

// ── 3. Help and version ──────────────────────────────────────────────────────

#[test]
fn test_cli_help_topics() {
    let dir = TempDir::new().unwrap();

    let out = run(dir.path(), &[]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("kefka -h eol"));

    let out = run(dir.path(), &["-h", "concat"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("-dn=DELIMITER_NUMBER"));

    let out = run(dir.path(), &["--help", "bogus"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Unrecognized help topic."));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["-v"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with(&format!("kefka v{}", env!("CARGO_PKG_VERSION"))));
}
