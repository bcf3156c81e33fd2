// Integration tests for src/io/file_io.rs — opening inputs and creating outputs.

use std::fs;
use std::io::{Read, Write};

use kefka::io::file_io::{check_inputs, create_dst_file, open_src_file};
use kefka::{ErrorKind, KefkaError};
use tempfile::TempDir;

#[test]
fn src_file_reads_whole_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("in");
    fs::write(&path, vec![7u8; 10_000]).unwrap();

    let mut src = open_src_file(&path).unwrap();
    assert_eq!(src.len, 10_000);
    let mut data = Vec::new();
    src.read_to_end(&mut data).unwrap();
    assert_eq!(data.len(), 10_000);
}

#[test]
fn dst_file_is_buffered_until_finish() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out");
    let mut dst = create_dst_file(&path).unwrap();
    dst.write_all(b"buffered").unwrap();
    dst.finish().unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"buffered");
}

#[test]
fn check_inputs_rejects_directories() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("f");
    fs::write(&file, b"").unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();

    assert!(check_inputs(&[file.clone()]).is_ok());
    match check_inputs(&[file, sub.clone()]) {
        Err(KefkaError::InputNotFound(p)) => assert_eq!(p, sub),
        other => panic!("expected InputNotFound, got {:?}", other),
    }
}

#[test]
fn error_messages_name_the_path() {
    let err = open_src_file(std::path::Path::new("no-such-input.txt")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InputNotFound);
    assert_eq!(
        err.to_string(),
        "input file \"no-such-input.txt\" not found or you don't have read permission"
    );
}
