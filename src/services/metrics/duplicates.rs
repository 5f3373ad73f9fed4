//! Duplicate-line scanner
//!
//! Tracks trimmed, non-empty line occurrences within one file. The frequency
//! map is reset per file; there is no cross-file deduplication.

use std::collections::HashMap;

/// Count duplicated lines in a file.
///
/// A line text is counted exactly once, at the moment its occurrence count
/// goes from one to two. Third and later repeats add nothing. Lines that are
/// empty after trimming are never tracked.
#[must_use]
pub fn duplicate_lines(lines: &[&str]) -> u64 {
    let mut occurrences: HashMap<&str, u32> = HashMap::new();
    let mut count = 0u64;

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let seen = occurrences.entry(trimmed).or_insert(0);
        *seen += 1;
        if *seen == 2 {
            count += 1;
        }
    }

    count
}
