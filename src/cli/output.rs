//! Output formatting for CLI
//!
//! Formatters return the rendered report as a `String`; persisting or
//! printing it is the caller's concern.

use crate::Summary;
use crate::services::aggregate::{SortBy, sort_and_limit};
use crate::services::classify;
use std::fmt::Write;

/// Render the quality report: each metric's raw value followed by its
/// classification sentence, in a fixed order.
#[must_use]
pub fn format_report(summary: &Summary) -> String {
    format_report_with_listing(summary, 0, SortBy::Complexity)
}

/// Render the quality report with an optional worst-file listing appended.
/// A `top` of zero suppresses the listing.
#[must_use]
pub fn format_report_with_listing(summary: &Summary, top: usize, sort_by: SortBy) -> String {
    let totals = &summary.totals;
    let mut out = String::new();

    let _ = writeln!(out, "Source quality report for {}", summary.root);
    let _ = writeln!(out);

    let _ = writeln!(out, "Total lines: {}", totals.total_lines);

    let _ = writeln!(out, "Comment lines: {}", totals.comment_lines);
    let comment_ratio = classify::ratio(totals.comment_lines, totals.total_lines);
    let _ = writeln!(out, "Comment ratio: {comment_ratio:.2}");
    let comment_level = classify::classify(totals.comment_lines, totals.total_lines);
    let _ = writeln!(
        out,
        "The amount of comments in the project is {}.",
        comment_level.amount_str()
    );

    let _ = writeln!(out, "Cyclomatic complexity: {}", totals.complexity);
    let complexity_level = classify::classify(totals.complexity, totals.total_lines);
    let _ = writeln!(
        out,
        "Cyclomatic complexity of the project is {complexity_level}."
    );

    let _ = writeln!(out, "Maximum nesting depth: {}", totals.max_nesting_depth);
    let nesting_level = classify::classify(totals.max_nesting_depth, totals.total_lines);
    let _ = writeln!(out, "Nesting depth of the project is {nesting_level}.");

    let _ = writeln!(out, "Duplicate lines: {}", totals.duplicate_lines);
    let duplicate_level = classify::classify(totals.duplicate_lines, totals.total_lines);
    let _ = writeln!(out, "Duplication of the project is {duplicate_level}.");

    if top > 0 && !summary.files.is_empty() {
        let label = match sort_by {
            SortBy::Lines => "lines",
            SortBy::Complexity => "complexity",
            SortBy::Nesting => "nesting depth",
            SortBy::Duplicates => "duplicate lines",
        };
        let _ = writeln!(out);
        let _ = writeln!(out, "Worst files by {label}:");
        let worst = sort_and_limit(summary.files.clone(), sort_by, Some(top));
        for file in &worst {
            let _ = writeln!(
                out,
                "  {:<60} lines {:>6}  complexity {:>5}  nesting {:>3}  duplicates {:>5}",
                file.path,
                file.total_lines,
                file.complexity,
                file.max_nesting_depth,
                file.duplicate_lines
            );
        }
    }

    if !summary.errors.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Errors encountered: {}", summary.errors.len());
        for error in summary.errors.iter().take(5) {
            let _ = writeln!(out, "  {}: {}", error.path, error.message);
        }
        if summary.errors.len() > 5 {
            let _ = writeln!(out, "  ... and {} more", summary.errors.len() - 5);
        }
    }

    out
}

/// Format summary as JSON
#[must_use]
pub fn format_json(summary: &Summary) -> String {
    let totals = &summary.totals;
    let output = serde_json::json!({
        "root": summary.root,
        "totals": totals,
        "comment_ratio": classify::ratio(totals.comment_lines, totals.total_lines),
        "levels": {
            "comments": classify::classify(totals.comment_lines, totals.total_lines).as_str(),
            "complexity": classify::classify(totals.complexity, totals.total_lines).as_str(),
            "nesting": classify::classify(totals.max_nesting_depth, totals.total_lines).as_str(),
            "duplicates": classify::classify(totals.duplicate_lines, totals.total_lines).as_str(),
        },
        "files": summary.files,
        "error_count": summary.errors.len(),
        "errors": if summary.errors.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::json!(summary.errors)
        }
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}
