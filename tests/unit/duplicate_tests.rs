//! Unit tests for the duplicate-line scanner

use sqm::services::metrics::duplicates::duplicate_lines;

#[test]
fn test_triple_occurrence_counts_once() {
    // Only the 1 -> 2 transition counts; the third repeat adds nothing
    let lines = ["a", "a", "a"];
    assert_eq!(duplicate_lines(&lines), 1);
}

#[test]
fn test_two_repeated_pairs() {
    let lines = ["a", "b", "a", "b"];
    assert_eq!(duplicate_lines(&lines), 2);
}

#[test]
fn test_blank_lines_excluded() {
    let lines = ["", "   ", "\t", "x", "x", ""];
    assert_eq!(duplicate_lines(&lines), 1);
}

#[test]
fn test_comparison_uses_trimmed_text() {
    let lines = ["  println(x)", "println(x)  "];
    assert_eq!(duplicate_lines(&lines), 1);
}

#[test]
fn test_unique_lines_count_zero() {
    let lines = ["a", "b", "c"];
    assert_eq!(duplicate_lines(&lines), 0);
}
