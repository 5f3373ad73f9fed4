//! Per-file metric scanners
//!
//! Each scanner is an independent pure function over a file's lines; no
//! scanner depends on another's intermediate state. `scan_file` reads a file
//! once and runs every scanner over the same line slice.

pub mod comment;
pub mod complexity;
pub mod duplicates;
pub mod nesting;

use crate::ScanOptions;
use crate::models::{ErrorItem, FileMetrics};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a file and run all scanners over its lines.
///
/// The file handle is released before this returns on every path, including
/// read errors. Contents are decoded lossily; only a true read failure makes
/// a file drop out of the scan.
pub fn scan_file(path: &Path, opts: &ScanOptions) -> std::io::Result<FileMetrics> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let lines: Vec<&str> = text.lines().collect();

    log::trace!("Scanning {} ({} lines)", path.display(), lines.len());

    Ok(FileMetrics {
        path: path.to_string_lossy().to_string(),
        total_lines: lines.len() as u64,
        comment_lines: comment::comment_lines(&lines),
        complexity: complexity::complexity(&lines, &opts.keywords),
        max_nesting_depth: nesting::max_nesting_depth(&lines),
        duplicate_lines: duplicates::duplicate_lines(&lines),
    })
}

/// Scan all collected files, sharded across the rayon worker pool.
///
/// Valid because every metric combines commutatively across files; totals
/// are folded from the flattened result list afterwards. A failed read
/// contributes an error record and nothing else.
pub fn scan_all(files: Vec<PathBuf>, opts: &ScanOptions) -> (Vec<FileMetrics>, Vec<ErrorItem>) {
    let outcomes: Vec<Result<FileMetrics, ErrorItem>> = files
        .into_par_iter()
        .map(|path| scan_file(&path, opts).map_err(|e| ErrorItem::from_io(&path, &e)))
        .collect();

    let mut metrics = Vec::with_capacity(outcomes.len());
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(m) => metrics.push(m),
            Err(e) => {
                log::warn!("Failed to read {}: {}", e.path, e.message);
                errors.push(e);
            }
        }
    }

    (metrics, errors)
}
