use std::fs;
use std::path::PathBuf;

use system_io::errors::InvalidHandle;
use system_io::{
    FileGateway, FILE_APPEND, FILE_CREATE, FILE_TRUNCATE, FILE_WRITE_ONLY, SENTINEL,
};
use tempfile::TempDir;
use test_case::test_case;

const SCRIPT_FLAGS: u32 = FILE_WRITE_ONLY | FILE_CREATE | FILE_TRUNCATE;

fn scratch_file(tmp_dir: &TempDir, name: &str) -> PathBuf {
    tmp_dir.path().join(name)
}

#[test_case("test.txt"; "plain name")]
#[test_case("with space.txt"; "name with space")]
#[test_case("ünïcödé"; "unicode name")]
fn test_open_close_leaves_empty_file(name: &str) {
    let tmp_dir = TempDir::new().expect("Unable to create temporary directory");
    let path = scratch_file(&tmp_dir, name);
    let gateway = FileGateway::new();

    let handle = gateway.open(&path, SCRIPT_FLAGS).expect("Open failed");
    gateway.close(handle).expect("Close failed");

    let metadata = fs::metadata(&path).expect("File missing");
    assert!(metadata.is_file());
    assert_eq!(metadata.len(), 0);
}

#[test]
fn test_existing_content_is_truncated_on_open() {
    let tmp_dir = TempDir::new().expect("Unable to create temporary directory");
    let path = scratch_file(&tmp_dir, "test.txt");
    fs::write(&path, "previous content").expect("Preparing file failed");
    let gateway = FileGateway::new();

    let handle = gateway.open(&path, SCRIPT_FLAGS).expect("Open failed");
    gateway.close(handle).expect("Close failed");

    assert_eq!(fs::read(&path).expect("Reading file failed").len(), 0);
}

#[test]
fn test_write_hello_world() {
    let tmp_dir = TempDir::new().expect("Unable to create temporary directory");
    let path = scratch_file(&tmp_dir, "test.txt");
    let gateway = FileGateway::new();

    let handle = gateway.open(&path, SCRIPT_FLAGS).expect("Open failed");
    assert_eq!(gateway.write(handle, "Hello World"), 11);
    gateway.close(handle).expect("Close failed");

    assert_eq!(
        fs::read_to_string(&path).expect("Reading file failed"),
        "Hello World"
    );
}

#[test]
fn test_write_after_close() {
    let tmp_dir = TempDir::new().expect("Unable to create temporary directory");
    let gateway = FileGateway::new();

    let handle = gateway
        .open(scratch_file(&tmp_dir, "test.txt"), SCRIPT_FLAGS)
        .expect("Open failed");
    gateway.close(handle).expect("Close failed");

    assert_eq!(gateway.write(handle, "Hello World"), SENTINEL);
    assert_eq!(gateway.close(handle), Err(InvalidHandle(handle)));
}

#[test]
fn test_reopen_with_truncate() {
    let tmp_dir = TempDir::new().expect("Unable to create temporary directory");
    let path = scratch_file(&tmp_dir, "test.txt");
    let gateway = FileGateway::new();

    let handle = gateway.open(&path, SCRIPT_FLAGS).expect("Open failed");
    assert_eq!(gateway.write(handle, "AAAA"), 4);
    gateway.close(handle).expect("Close failed");

    let handle = gateway.open(&path, SCRIPT_FLAGS).expect("Open failed");
    assert_eq!(gateway.write(handle, "B"), 1);
    gateway.close(handle).expect("Close failed");

    assert_eq!(fs::read_to_string(&path).expect("Reading file failed"), "B");
}

#[test]
fn test_consecutive_writes_are_ordered() {
    let tmp_dir = TempDir::new().expect("Unable to create temporary directory");
    let path = scratch_file(&tmp_dir, "test.txt");
    let gateway = FileGateway::new();

    let handle = gateway.open(&path, SCRIPT_FLAGS).expect("Open failed");
    assert_eq!(gateway.write(handle, "Hello World this is a test for fun"), 34);
    assert_eq!(gateway.write(handle, b"!" as &[u8]), 1);
    assert_eq!(gateway.write(handle, ""), 0);
    gateway.close(handle).expect("Close failed");

    assert_eq!(
        fs::read_to_string(&path).expect("Reading file failed"),
        "Hello World this is a test for fun!"
    );
}

#[test]
fn test_without_create_missing_file_fails() {
    let tmp_dir = TempDir::new().expect("Unable to create temporary directory");
    let path = scratch_file(&tmp_dir, "missing.txt");
    let gateway = FileGateway::new();

    assert!(gateway.open(&path, FILE_WRITE_ONLY).is_err());
    assert!(!path.exists());
    assert_eq!(gateway.open_count(), 0);
}

#[test]
fn test_append_with_truncate_empties_then_appends() {
    let tmp_dir = TempDir::new().expect("Unable to create temporary directory");
    let path = scratch_file(&tmp_dir, "log.txt");
    fs::write(&path, "stale entry\n").expect("Preparing file failed");
    let gateway = FileGateway::new();

    let handle = gateway
        .open(&path, FILE_WRITE_ONLY | FILE_APPEND | FILE_TRUNCATE)
        .expect("Open failed");
    assert_eq!(gateway.write(handle, "first\n"), 6);
    assert_eq!(gateway.write(handle, "second\n"), 7);
    gateway.close(handle).expect("Close failed");

    assert_eq!(
        fs::read_to_string(&path).expect("Reading file failed"),
        "first\nsecond\n"
    );
}
