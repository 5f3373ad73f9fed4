//! Integration test for the scan API

use crate::fixtures::{create_project_fixture, write_file_sync};
use sqm::ScanOptions;
use tempfile::TempDir;

#[test]
fn test_scan_via_api() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_project_fixture(root).unwrap();

    let opts = ScanOptions::default();
    let result = sqm::scan_summary(root, &opts);
    assert!(result.is_ok());

    let summary = result.unwrap();
    assert_eq!(summary.root, root.to_string_lossy());
    assert_eq!(summary.files.len(), 2, "only the .kt files are eligible");
    assert!(summary.errors.is_empty());

    let totals = &summary.totals;
    assert_eq!(totals.total_lines, 17);
    assert_eq!(totals.comment_lines, 3);
    assert_eq!(totals.complexity, 3);
    assert_eq!(totals.max_nesting_depth, 2);
    assert_eq!(totals.duplicate_lines, 2);

    let util = summary
        .files
        .iter()
        .find(|f| f.path.ends_with("util.kt"))
        .expect("Should find util.kt");
    assert_eq!(util.total_lines, 11);
    assert_eq!(util.comment_lines, 2);
    assert_eq!(util.complexity, 3);
    assert_eq!(util.max_nesting_depth, 2);
    assert_eq!(util.duplicate_lines, 1);

    let main = summary
        .files
        .iter()
        .find(|f| f.path.ends_with("main.kt"))
        .expect("Should find main.kt");
    assert_eq!(main.total_lines, 6);
    assert_eq!(main.comment_lines, 1);
    assert_eq!(main.complexity, 0);
    assert_eq!(main.max_nesting_depth, 1);
    assert_eq!(main.duplicate_lines, 1);
}

#[test]
fn test_extension_override() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_project_fixture(root).unwrap();

    let opts = ScanOptions {
        extensions: vec!["md".to_string()],
        ..Default::default()
    };

    let summary = sqm::scan_summary(root, &opts).unwrap();
    assert_eq!(summary.files.len(), 1);
    assert!(summary.files[0].path.ends_with("README.md"));
}

#[test]
fn test_max_depth_limits_walk() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_project_fixture(root).unwrap();
    write_file_sync(root.join("top.kt"), "// shallow\n").unwrap();

    let opts = ScanOptions {
        max_depth: Some(1),
        ..Default::default()
    };

    let summary = sqm::scan_summary(root, &opts).unwrap();
    assert_eq!(
        summary.files.len(),
        1,
        "files under src/ sit below the depth limit"
    );
    assert!(summary.files[0].path.ends_with("top.kt"));
}
