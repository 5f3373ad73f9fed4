//! Approximate cyclomatic-complexity scanner
//!
//! Counts control-flow keywords per line as a proxy for decision points.
//! Matching is plain substring search against the raw line; a keyword inside
//! an identifier or string literal still counts (`classify` contains `if`).
//! Tokenized or word-boundary matching would report different values.

/// Control-flow vocabulary counted by default.
const DEFAULT_KEYWORDS: &[&str] = &[
    "if", "else", "when", "switch", "for", "while", "catch", "throw",
];

/// Default keyword vocabulary as owned strings for `ScanOptions`.
#[must_use]
pub fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(ToString::to_string).collect()
}

/// Complexity contribution of a single raw (untrimmed) line: the number of
/// vocabulary entries appearing anywhere in it. Each entry counts at most
/// once per line.
#[must_use]
pub fn line_complexity(line: &str, keywords: &[String]) -> u64 {
    keywords.iter().filter(|kw| line.contains(kw.as_str())).count() as u64
}

/// File complexity: sum of per-line contributions.
#[must_use]
pub fn complexity(lines: &[&str], keywords: &[String]) -> u64 {
    lines.iter().map(|line| line_complexity(line, keywords)).sum()
}
