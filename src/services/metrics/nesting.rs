//! Brace-nesting depth scanner
//!
//! Tracks a running brace balance across the file and reports the peak.
//! The balance may dip below zero on unbalanced input; the scanner tolerates
//! malformed snippets and never fails.

/// Peak nesting depth reached anywhere in the file.
#[must_use]
pub fn max_nesting_depth(lines: &[&str]) -> u64 {
    let mut current_depth: i64 = 0;
    let mut max_depth: i64 = 0;

    for line in lines {
        let opens = line.matches('{').count() as i64;
        let closes = line.matches('}').count() as i64;
        current_depth += opens - closes;
        max_depth = max_depth.max(current_depth);
    }

    // max_depth starts at 0 and only grows, so the cast is lossless
    max_depth as u64
}
