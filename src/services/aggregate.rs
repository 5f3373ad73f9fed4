//! Folding per-file scanner results into tree totals

use crate::models::{FileMetrics, MetricTotals};

/// Fold per-file results into the five tree-wide totals.
///
/// Line, comment, complexity, and duplicate counts are summed; nesting depth
/// is combined as the maximum of per-file maxima.
#[must_use]
pub fn fold_totals(files: &[FileMetrics]) -> MetricTotals {
    let mut totals = MetricTotals::default();
    for file in files {
        totals.absorb(file);
    }
    totals
}

/// Sort key for the worst-file listing
#[derive(Debug, Clone, Copy)]
pub enum SortBy {
    Lines,
    Complexity,
    Nesting,
    Duplicates,
}

/// Sort per-file results by a metric and limit to top K
#[must_use]
pub fn sort_and_limit(
    mut files: Vec<FileMetrics>,
    sort_by: SortBy,
    top_k: Option<usize>,
) -> Vec<FileMetrics> {
    // Sort entries, worst first
    match sort_by {
        SortBy::Lines => {
            files.sort_by(|a, b| b.total_lines.cmp(&a.total_lines));
        }
        SortBy::Complexity => {
            files.sort_by(|a, b| b.complexity.cmp(&a.complexity));
        }
        SortBy::Nesting => {
            files.sort_by(|a, b| b.max_nesting_depth.cmp(&a.max_nesting_depth));
        }
        SortBy::Duplicates => {
            files.sort_by(|a, b| b.duplicate_lines.cmp(&a.duplicate_lines));
        }
    }

    // Truncate to top K if specified
    if let Some(k) = top_k {
        files.truncate(k);
    }

    files
}
