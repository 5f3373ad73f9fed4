//! Unit tests for metric classification thresholds

use sqm::Level;
use sqm::services::classify::{classify, ratio};

#[test]
fn test_breakpoint_005_lands_in_moderate() {
    assert_eq!(classify(5, 100), Level::Moderate);
    assert_eq!(classify(4, 100), Level::Low);
}

#[test]
fn test_breakpoint_020_lands_in_high() {
    assert_eq!(classify(20, 100), Level::High);
    assert_eq!(classify(19, 100), Level::Moderate);
}

#[test]
fn test_zero_total_lines_classifies_low() {
    assert_eq!(ratio(5, 0), 0.0);
    assert_eq!(classify(0, 0), Level::Low);
    assert_eq!(classify(5, 0), Level::Low);
}

#[test]
fn test_level_labels() {
    assert_eq!(Level::Low.to_string(), "low");
    assert_eq!(Level::Moderate.to_string(), "moderate");
    assert_eq!(Level::High.to_string(), "high");

    // The comment metric uses its own wording at the same thresholds
    assert_eq!(Level::Low.amount_str(), "few");
    assert_eq!(Level::Moderate.amount_str(), "moderate");
    assert_eq!(Level::High.amount_str(), "large");
}
