//! Comment-line scanner
//!
//! A single-pass scanner with one piece of state: whether the current line
//! sits inside a block comment. Detection is prefix-based on the trimmed
//! line, so a trailing `// note` after code is not seen, and a block comment
//! that opens mid-line after code is not seen either. A line that opens a
//! block comment closes it again only when the trimmed line *ends* with the
//! close token; `/* x */ code();` leaves the state open.

/// Count comment lines. Block-comment state starts fresh for every file.
#[must_use]
pub fn comment_lines(lines: &[&str]) -> u64 {
    let mut count = 0u64;
    let mut in_block_comment = false;

    for line in lines {
        let trimmed = line.trim();

        if in_block_comment {
            count += 1;
            if trimmed.ends_with("*/") {
                in_block_comment = false;
            }
        } else if trimmed.starts_with("/*") {
            count += 1;
            in_block_comment = !trimmed.ends_with("*/");
        } else if trimmed.starts_with("//") {
            count += 1;
        }
    }

    count
}
