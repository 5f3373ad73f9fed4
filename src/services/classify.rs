//! Qualitative classification of metric totals
//!
//! Each ratio-based metric is bucketed into one of three levels using two
//! fixed breakpoints. Boundaries land in the upper bucket: a ratio of
//! exactly 0.05 is Moderate and exactly 0.20 is High.

/// Ratio below which a metric classifies as Low.
pub const MODERATE_BREAKPOINT: f64 = 0.05;

/// Ratio at or above which a metric classifies as High.
pub const HIGH_BREAKPOINT: f64 = 0.20;

/// Qualitative level for a metric relative to total line count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Moderate,
    High,
}

impl Level {
    /// Classify a precomputed ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= HIGH_BREAKPOINT {
            Level::High
        } else if ratio >= MODERATE_BREAKPOINT {
            Level::Moderate
        } else {
            Level::Low
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Moderate => "moderate",
            Level::High => "high",
        }
    }

    /// Wording used by the comment metric, which reports an "amount of
    /// comments" rather than a low/high level.
    #[must_use]
    pub fn amount_str(&self) -> &'static str {
        match self {
            Level::Low => "few",
            Level::Moderate => "moderate",
            Level::High => "large",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metric-to-total ratio. An empty tree has ratio 0 for every metric.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ratio(value: u64, total_lines: u64) -> f64 {
    if total_lines == 0 {
        0.0
    } else {
        value as f64 / total_lines as f64
    }
}

/// Classify a metric value relative to the total line count.
#[must_use]
pub fn classify(value: u64, total_lines: u64) -> Level {
    Level::from_ratio(ratio(value, total_lines))
}
