//! Report persistence at the caller boundary
//!
//! A failed write never invalidates the computed totals; callers log the
//! failure and fall back to printing the report.

use std::fs;
use std::io::Result;
use std::path::Path;

/// Write the rendered report to the given path, creating parent directories
/// as needed.
pub fn write_report(path: &str, contents: &str) -> Result<()> {
    let file_path = Path::new(path);

    if let Some(parent) = file_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(file_path, contents)
}
