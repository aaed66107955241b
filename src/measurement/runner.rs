//! Timed branch loop shared by every test in a trial.

use crate::conditions::pattern_condition;
use crate::types::Pattern;

use super::timer::measure_micros;
use super::workload::workload;

/// Supplies the branch condition for each loop index.
///
/// Implemented for precomputed sequences (`[bool]`, `Vec<bool>`) and for
/// deterministic patterns ([`PatternSource`]). A source must be able to
/// answer for every index in `0..iterations` of the loop it drives.
pub trait ConditionSource {
    /// Condition for loop index `index`.
    fn condition(&self, index: u64) -> bool;
}

impl ConditionSource for [bool] {
    #[inline(always)]
    fn condition(&self, index: u64) -> bool {
        self[index as usize]
    }
}

impl ConditionSource for Vec<bool> {
    #[inline(always)]
    fn condition(&self, index: u64) -> bool {
        self.as_slice().condition(index)
    }
}

/// Deterministic pattern evaluated on the fly inside the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSource {
    /// Rule to evaluate.
    pub pattern: Pattern,
    /// Total loop length; [`Pattern::StrongBias`] needs it to find the tail.
    pub iterations: u64,
}

impl PatternSource {
    /// Create a source for `pattern` over a loop of `iterations` indices.
    pub fn new(pattern: Pattern, iterations: u64) -> Self {
        Self {
            pattern,
            iterations,
        }
    }
}

impl ConditionSource for PatternSource {
    #[inline(always)]
    fn condition(&self, index: u64) -> bool {
        pattern_condition(self.pattern, index, self.iterations)
    }
}

/// Outcome of one timed loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopTiming {
    /// Wall-clock time of the loop in whole microseconds.
    pub elapsed_us: u64,
    /// Final value of the running sum.
    ///
    /// Exists so the loop has an observable result; it carries no meaning.
    pub sum: i64,
}

/// Run the branch loop `iterations` times and time it.
///
/// For each index the condition decides whether the workload result is added
/// to or subtracted from the running sum. Only the loop is timed; producing
/// the conditions (for materialized sources) happens before the call.
///
/// # Panics
///
/// Panics if a slice source holds fewer than `iterations` conditions.
#[inline(never)]
pub fn run_timed<S>(source: &S, iterations: u64) -> LoopTiming
where
    S: ConditionSource + ?Sized,
{
    let (elapsed_us, sum) = measure_micros(|| {
        let mut sum: i64 = 0;
        for i in 0..iterations {
            if source.condition(i) {
                sum = sum.wrapping_add(workload(i));
            } else {
                sum = sum.wrapping_sub(workload(i));
            }
        }
        sum
    });

    tracing::debug!(iterations, elapsed_us, sum, "timed loop finished");

    LoopTiming { elapsed_us, sum }
}
