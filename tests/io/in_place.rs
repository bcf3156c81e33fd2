// Integration tests for src/io/in_place.rs — rewriting a file through a staging copy.

use std::fs;
use std::io::{self, Read, Write};

use kefka::io::file_io::SrcFile;
use kefka::io::rewrite_in_place;
use kefka::transform::{normalize_eol, NormalizeOptions};
use kefka::{ErrorKind, Prefs};
use tempfile::TempDir;

fn staged_prefs(staging: &TempDir) -> Prefs {
    let mut prefs = Prefs::default();
    prefs.set_temp_dir(Some(staging.path()));
    prefs
}

#[test]
fn normalizes_a_file_in_place() {
    let work = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let path = work.path().join("notes.txt");
    fs::write(&path, b"\xEF\xBB\xBFa\r\nb\r\n").unwrap();

    let opts = NormalizeOptions::default();
    let stats = rewrite_in_place(&path, &staged_prefs(&staging), |src, dst| {
        let len = src.len;
        normalize_eol(src, len, dst, &opts)
    })
    .unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"a\nb\n");
    assert_eq!(stats.line_endings, 2);
    assert!(stats.bom_removed);
    assert_eq!(fs::read_dir(staging.path()).unwrap().count(), 0);
}

#[test]
fn shrinking_rewrite_truncates_the_original() {
    let work = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let path = work.path().join("f");
    fs::write(&path, b"0123456789").unwrap();

    rewrite_in_place(&path, &staged_prefs(&staging), |src: &mut SrcFile, dst: &mut dyn Write| {
        let mut head = [0u8; 3];
        src.read_exact(&mut head)?;
        dst.write_all(&head)
    })
    .unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"012");
}

#[test]
fn failure_keeps_original_and_cleans_staging() {
    let work = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let path = work.path().join("f");
    fs::write(&path, b"unchanged").unwrap();

    let err = rewrite_in_place(&path, &staged_prefs(&staging), |_, dst| -> io::Result<()> {
        dst.write_all(b"partial")?;
        Err(io::Error::new(io::ErrorKind::InvalidData, "bad input"))
    })
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnhandledIo);
    assert!(err.to_string().contains("bad input"));
    assert_eq!(fs::read(&path).unwrap(), b"unchanged");
    assert_eq!(fs::read_dir(staging.path()).unwrap().count(), 0);
}

#[test]
fn missing_file_is_input_not_found() {
    let work = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let err = rewrite_in_place(&work.path().join("ghost"), &staged_prefs(&staging), |_, _| Ok(()))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InputNotFound);
    assert_eq!(fs::read_dir(staging.path()).unwrap().count(), 0);
}
