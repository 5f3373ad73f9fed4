//! Data models for per-file metrics, tree totals, and recovered errors

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Metric results for a single scanned source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetrics {
    pub path: String,
    pub total_lines: u64,
    pub comment_lines: u64,
    pub complexity: u64,
    pub max_nesting_depth: u64,
    pub duplicate_lines: u64,
}

/// Tree-wide metric totals folded across all scanned files
///
/// Line, comment, complexity, and duplicate counts are sums; nesting depth
/// is the maximum of per-file maxima.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricTotals {
    pub total_lines: u64,
    pub comment_lines: u64,
    pub complexity: u64,
    pub max_nesting_depth: u64,
    pub duplicate_lines: u64,
}

impl MetricTotals {
    /// Fold one file's results into the running totals.
    pub fn absorb(&mut self, file: &FileMetrics) {
        self.total_lines += file.total_lines;
        self.comment_lines += file.comment_lines;
        self.complexity += file.complexity;
        self.max_nesting_depth = self.max_nesting_depth.max(file.max_nesting_depth);
        self.duplicate_lines += file.duplicate_lines;
    }
}

/// Represents an error encountered and recovered during scanning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorItem {
    pub path: String,
    pub code: String,
    pub message: String,
}

impl ErrorItem {
    /// Build an error record from an I/O failure on the given path.
    #[must_use]
    pub fn from_io(path: &Path, error: &std::io::Error) -> Self {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => "ENOENT",
            std::io::ErrorKind::PermissionDenied => "EACCES",
            _ => "IO",
        };

        Self {
            path: path.to_string_lossy().to_string(),
            code: code.to_string(),
            message: error.to_string(),
        }
    }
}
