// Integration tests for src/io/concat.rs — file concatenation.

use std::fs;
use std::path::{Path, PathBuf};

use kefka::{concat_files, ConcatParams, EolKind, ErrorKind, Prefs};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, data).unwrap();
    p
}

#[test]
fn delimiter_run_after_each_input_then_terminator() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a", b"A");
    let b = write(dir.path(), "b", b"B");
    let out = dir.path().join("out");
    let mut params = ConcatParams::new(vec![a.clone(), b.clone()], out.clone());
    params.delimiter = Some(EolKind::Lf);
    params.delimiter_repeat = 2;
    params.terminator = Some(EolKind::Crlf);

    let report = concat_files(&params, &Prefs::default());

    assert!(report.is_success());
    assert_eq!(fs::read(&out).unwrap(), b"A\n\nB\n\n\r\n");
    let first = report.outcome_for(&a).unwrap();
    assert_eq!(first.stats.bytes_read, 1);
    assert_eq!(first.stats.delimiter_bytes, 2);
    assert_eq!(first.stats.line_endings, 0);
    assert_eq!(first.output, out);
}

#[test]
fn no_delimiter_output_is_sum_of_inputs() {
    let dir = TempDir::new().unwrap();
    let inputs: Vec<PathBuf> = (0..5)
        .map(|i| write(dir.path(), &format!("part{i}"), &vec![b'0' + i as u8; 100 * i + 3]))
        .collect();
    let total: u64 = inputs.iter().map(|p| fs::metadata(p).unwrap().len()).sum();
    let out = dir.path().join("joined");

    let mut prefs = Prefs::default();
    prefs.set_buffer_cap(64);
    let report = concat_files(&ConcatParams::new(inputs.clone(), out.clone()), &prefs);

    assert!(report.is_success());
    assert_eq!(report.outcomes().count(), inputs.len());
    assert_eq!(fs::metadata(&out).unwrap().len(), total);
    let joined = fs::read(&out).unwrap();
    assert!(joined.starts_with(b"000"));
    assert!(joined.ends_with(b"4444"));
}

#[test]
fn content_is_not_normalized() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a", b"\xEF\xBB\xBFx\r\n");
    let b = write(dir.path(), "b", b"y\r");
    let out = dir.path().join("out");
    let report = concat_files(&ConcatParams::new(vec![a, b], out.clone()), &Prefs::default());
    assert!(report.is_success());
    assert_eq!(fs::read(&out).unwrap(), b"\xEF\xBB\xBFx\r\ny\r");
}

#[test]
fn existing_output_is_truncated() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a", b"1");
    let b = write(dir.path(), "b", b"2");
    let out = write(dir.path(), "out", b"a much longer previous body");
    let report = concat_files(&ConcatParams::new(vec![a, b], out.clone()), &Prefs::default());
    assert!(report.is_success());
    assert_eq!(fs::read(&out).unwrap(), b"12");
}

#[test]
fn same_input_twice_is_allowed() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a", b"ab");
    let out = dir.path().join("out");
    let mut params = ConcatParams::new(vec![a.clone(), a], out.clone());
    params.delimiter = Some(EolKind::Cr);
    assert!(concat_files(&params, &Prefs::default()).is_success());
    assert_eq!(fs::read(&out).unwrap(), b"ab\rab\r");
}

#[test]
fn single_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a", b"x");
    let out = dir.path().join("out");
    let report = concat_files(&ConcatParams::new(vec![a], out.clone()), &Prefs::default());
    assert_eq!(report.errors().next().unwrap().kind(), ErrorKind::UnsupportedCombination);
    assert!(!out.exists());
}

#[cfg(unix)]
#[test]
fn output_hard_linked_to_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a", b"AAAA");
    let b = write(dir.path(), "b", b"BB");
    let link = dir.path().join("h");
    fs::hard_link(&a, &link).unwrap();

    let report = concat_files(&ConcatParams::new(vec![a.clone(), b], link), &Prefs::default());

    assert!(!report.is_success());
    assert_eq!(report.errors().next().unwrap().kind(), ErrorKind::UnsupportedCombination);
    assert_eq!(fs::read(&a).unwrap(), b"AAAA");
}

#[test]
fn missing_output_directory() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a", b"x");
    let b = write(dir.path(), "b", b"y");
    let report = concat_files(
        &ConcatParams::new(vec![a, b], dir.path().join("missing").join("out")),
        &Prefs::default(),
    );
    assert_eq!(report.errors().next().unwrap().kind(), ErrorKind::OutputLocationMissing);
}
