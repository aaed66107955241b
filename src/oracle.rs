//! Trial orchestration.
//!
//! A trial generates a fresh random condition sequence, times the
//! unpredictable loop over it, then times the five predictable loops with the
//! same iteration count. Trials run strictly one after another on the calling
//! thread; the random generator is owned here and advanced once per trial.

use std::io::Write;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::conditions::generate_random_conditions;
use crate::config::Config;
use crate::error::Result;
use crate::measurement::{run_timed, PatternSource};
use crate::output::{format_header, format_trial};
use crate::result::{PatternTiming, TrialResult};
use crate::types::Pattern;

/// Branch misprediction cost meter.
///
/// Owns the run configuration and the random generator used for the
/// unpredictable conditions.
///
/// # Example
///
/// ```
/// use branch_oracle::{BranchOracle, Config};
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256PlusPlus;
///
/// let config = Config::new().iterations(1_000).trials(2);
/// let mut oracle = BranchOracle::with_rng(config, Xoshiro256PlusPlus::seed_from_u64(7));
/// let first = oracle.run_trial();
/// let second = oracle.run_trial();
/// assert_eq!((first.trial, second.trial), (1, 2));
/// assert_eq!(oracle.completed(), 2);
/// ```
#[derive(Debug)]
pub struct BranchOracle<R = Xoshiro256PlusPlus> {
    config: Config,
    rng: R,
    completed: usize,
}

impl BranchOracle<Xoshiro256PlusPlus> {
    /// Create an oracle whose generator is seeded from OS entropy.
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, Xoshiro256PlusPlus::from_entropy())
    }
}

impl<R: Rng> BranchOracle<R> {
    /// Create an oracle with an explicit generator.
    pub fn with_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            rng,
            completed: 0,
        }
    }

    /// Number of trials run so far.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Run the next trial.
    pub fn run_trial(&mut self) -> TrialResult {
        let iterations = self.config.iterations;
        let loop_len = iterations as u64;

        let random = generate_random_conditions(iterations, &mut self.rng);
        let unpredictable = run_timed(random.conditions.as_slice(), loop_len);

        let predictable = Pattern::ALL.map(|pattern| {
            let timing = run_timed(&PatternSource::new(pattern, loop_len), loop_len);
            PatternTiming {
                pattern,
                elapsed_us: timing.elapsed_us,
                sum: timing.sum,
            }
        });

        self.completed += 1;

        let result = TrialResult {
            trial: self.completed,
            probability: random.probability,
            true_percentage: random.true_percentage(),
            false_percentage: random.false_percentage(),
            unpredictable_us: unpredictable.elapsed_us,
            unpredictable_sum: unpredictable.sum,
            predictable,
        };

        tracing::info!(
            trial = result.trial,
            probability = result.probability,
            unpredictable_us = result.unpredictable_us,
            fastest = ?result.fastest_pattern(),
            "trial complete"
        );

        result
    }

    /// Run every configured trial and write the report to `out`.
    ///
    /// Each trial block is written and flushed as soon as it finishes.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Vec<TrialResult>> {
        out.write_all(format_header(&self.config).as_bytes())?;
        out.flush()?;

        let mut results = Vec::with_capacity(self.config.trials);
        for _ in 0..self.config.trials {
            let result = self.run_trial();
            out.write_all(format_trial(&result).as_bytes())?;
            out.flush()?;
            results.push(result);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(config: Config) -> BranchOracle {
        BranchOracle::with_rng(config, Xoshiro256PlusPlus::seed_from_u64(42))
    }

    #[test]
    fn runs_configured_trial_count() {
        let mut oracle = seeded(Config::new().iterations(500).trials(3));
        let results = oracle.run(&mut std::io::sink()).unwrap();
        assert_eq!(results.iter().map(|r| r.trial).collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(oracle.completed(), 3);
    }

    #[test]
    fn predictable_loops_follow_pattern_order() {
        let mut oracle = seeded(Config::new().iterations(1_000).trials(1));
        let result = oracle.run_trial();
        let patterns: Vec<_> = result.predictable.iter().map(|t| t.pattern).collect();
        assert_eq!(patterns, Pattern::ALL);
    }

    #[test]
    fn predictable_sums_are_deterministic() {
        let mut a = seeded(Config::new().iterations(2_000).trials(1));
        let mut b = BranchOracle::with_rng(
            Config::new().iterations(2_000).trials(1),
            Xoshiro256PlusPlus::seed_from_u64(9),
        );
        let sums_a = a.run_trial().predictable.map(|t| t.sum);
        let sums_b = b.run_trial().predictable.map(|t| t.sum);
        assert_eq!(sums_a, sums_b);
        // Constant pattern adds every square.
        assert_eq!(sums_a[4], (0..2_000i64).map(|i| i * i).sum::<i64>());
    }

    #[test]
    fn same_seed_same_distribution() {
        let config = Config::new().iterations(5_000).trials(2);
        let summary = |results: Vec<TrialResult>| -> Vec<(f64, i64)> {
            results.iter().map(|r| (r.true_percentage, r.unpredictable_sum)).collect()
        };
        let a = summary(seeded(config).run(&mut std::io::sink()).unwrap());
        let b = summary(seeded(config).run(&mut std::io::sink()).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn trials_draw_fresh_probabilities() {
        let mut oracle = seeded(Config::new().iterations(10).trials(2));
        let first = oracle.run_trial();
        let second = oracle.run_trial();
        assert_ne!(first.probability, second.probability);
    }

    #[test]
    fn zero_iterations_does_not_crash() {
        let mut oracle = seeded(Config::new().iterations(0).trials(1));
        let result = oracle.run_trial();
        assert_eq!(result.true_percentage, 0.0);
        assert_eq!(result.false_percentage, 0.0);
        assert_eq!(result.unpredictable_sum, 0);
        assert!(result.predictable.iter().all(|t| t.sum == 0));
    }

    #[test]
    fn run_writes_header_and_one_block_per_trial() {
        colored::control::set_override(false);
        let mut oracle = seeded(Config::new().iterations(1_000).trials(2));
        let mut buf = Vec::new();
        let results = oracle.run(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(results.len(), 2);
        assert!(text.starts_with("Performance Test: 2 Trials"));
        assert_eq!(text.matches("Trial 1:").count(), 1);
        assert_eq!(text.matches("Trial 2:").count(), 1);
        assert_eq!(text.matches("Unpredictable").count(), 4);
    }
}
