//! Unit tests for walker eligibility and error recording

use crate::fixtures::write_file_sync;
use sqm::ScanOptions;
use sqm::services::walk::{WalkContext, collect_source_files};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_only_configured_extensions_collected() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("sub")).unwrap();
    write_file_sync(root.join("a.kt"), "// a\n").unwrap();
    write_file_sync(root.join("b.txt"), "plain text\n").unwrap();
    write_file_sync(root.join("noext"), "no extension\n").unwrap();
    write_file_sync(root.join("sub/c.java"), "// c\n").unwrap();

    let mut context = WalkContext::new(ScanOptions::default());
    collect_source_files(root, &mut context);

    assert!(context.errors.is_empty());
    assert_eq!(context.files.len(), 2);

    let mut names: Vec<String> = context
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(names, ["a.kt", "c.java"]);
}

#[test]
fn test_extension_match_is_case_insensitive() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file_sync(root.join("UPPER.KT"), "// shouted\n").unwrap();

    let mut context = WalkContext::new(ScanOptions::default());
    collect_source_files(root, &mut context);

    assert_eq!(context.files.len(), 1);
}

#[test]
fn test_missing_root_records_error_without_panicking() {
    let mut context = WalkContext::new(ScanOptions::default());
    collect_source_files("/definitely/does/not/exist/xyz123", &mut context);

    assert!(context.files.is_empty());
    assert_eq!(context.errors.len(), 1);
    assert_eq!(context.errors[0].code, "ENOENT");
}
