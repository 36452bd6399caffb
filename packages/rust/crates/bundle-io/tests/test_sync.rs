//! Tests for sync module - bounded text reads.

use std::io::Write;
use tempfile::TempDir;

use bundle_io::{IoError, read_text_safe};

#[test]
fn test_sync_read() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("NAB_Bundle_Admin.xml");
    std::fs::write(&p, "<Bundle displayName=\"Admin\" name=\"Admin\">").unwrap();
    assert_eq!(
        read_text_safe(&p, 1024).unwrap(),
        "<Bundle displayName=\"Admin\" name=\"Admin\">"
    );
}

#[test]
fn test_sync_binary() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("binary.xml");
    let mut file = std::fs::File::create(&p).unwrap();
    file.write_all(b"\x00\x01\x02\x03").unwrap();
    assert!(matches!(read_text_safe(&p, 1024), Err(IoError::BinaryFile)));
}

#[test]
fn test_file_too_large() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("large.xml");
    std::fs::write(&p, "12345678901234567890").unwrap();
    assert!(matches!(
        read_text_safe(&p, 10),
        Err(IoError::TooLarge { size: 20, limit: 10 })
    ));
}

#[test]
fn test_file_not_found() {
    let result = read_text_safe("/nonexistent/NAB_Bundle_Admin.xml", 1024);
    assert!(matches!(result, Err(IoError::NotFound(_))));
}

#[test]
fn test_sync_read_rejects_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("NAB_Bundle_Cafe.xml");
    std::fs::write(&p, b"<Bundle displayName=\"Caf\xe9\">").unwrap();
    assert!(matches!(
        read_text_safe(&p, 1024),
        Err(IoError::Encoding { offset: 24 })
    ));
    assert_eq!(std::fs::read(&p).unwrap().len(), 27);
}
