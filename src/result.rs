//! Per-trial measurement results.

use crate::types::Pattern;

/// Timing of one predictable loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternTiming {
    /// Pattern that drove the loop.
    pub pattern: Pattern,
    /// Loop wall-clock time in microseconds.
    pub elapsed_us: u64,
    /// Final running sum of the loop.
    pub sum: i64,
}

/// Everything measured in one trial.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    /// 1-based trial index.
    pub trial: usize,
    /// Probability the random sequence was drawn with.
    pub probability: f64,
    /// Share of `true` conditions in the random sequence, in percent.
    pub true_percentage: f64,
    /// Share of `false` conditions in the random sequence, in percent.
    pub false_percentage: f64,
    /// Unpredictable loop time in microseconds.
    pub unpredictable_us: u64,
    /// Final running sum of the unpredictable loop.
    pub unpredictable_sum: i64,
    /// Predictable loop timings, in [`Pattern::ALL`] order.
    pub predictable: [PatternTiming; 5],
}

impl TrialResult {
    /// Unpredictable time minus the time of `pattern`, in microseconds.
    pub fn difference(&self, pattern: Pattern) -> Option<i64> {
        self.predictable
            .iter()
            .find(|t| t.pattern == pattern)
            .map(|t| signed_difference(self.unpredictable_us, t.elapsed_us))
    }

    /// Unpredictable time minus each predictable time, in report order.
    pub fn differences(&self) -> [(Pattern, i64); 5] {
        self.predictable
            .map(|t| (t.pattern, signed_difference(self.unpredictable_us, t.elapsed_us)))
    }

    /// Predictable loop that ran fastest (largest difference).
    pub fn fastest_pattern(&self) -> Option<Pattern> {
        self.predictable
            .iter()
            .min_by_key(|t| t.elapsed_us)
            .map(|t| t.pattern)
    }
}

fn signed_difference(a: u64, b: u64) -> i64 {
    let a = i64::try_from(a).unwrap_or(i64::MAX);
    let b = i64::try_from(b).unwrap_or(i64::MAX);
    a.saturating_sub(b)
}
