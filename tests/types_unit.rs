//! Unit tests for the public types and loop helpers.
//!
//! Tests boundary conditions, edge cases, and method correctness for:
//! - Pattern selector mapping and labels
//! - Config flag resolution
//! - Timed loop sums over materialized and pattern sources
//! - Trial result differences

use branch_oracle::{
    conditions::{generate_with_probability, pattern_conditions},
    run_timed, workload, Config, DefaultsNotice, Pattern, PatternSource, PatternTiming,
    TrialResult, DEFAULT_ITERATIONS, DEFAULT_TRIALS,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

// ============================================================================
// Pattern
// ============================================================================

#[test]
fn pattern_selectors_one_to_five() {
    let selected: Vec<Pattern> = (1..=5).map(Pattern::from_selector).collect();
    assert_eq!(selected, Pattern::ALL);
}

#[test]
fn pattern_display_uses_label() {
    assert_eq!(Pattern::ThreeInTen.to_string(), "3/10 Pattern");
    assert_eq!(Pattern::StrongBias.to_string(), "Strong Bias");
}

#[test]
fn pattern_true_counts_over_1000() {
    let count = |p| pattern_conditions(p, 1_000).filter(|&c| c).count();
    assert_eq!(count(Pattern::Alternating), 500);
    assert_eq!(count(Pattern::ThreeInTen), 300);
    assert_eq!(count(Pattern::StrongBias), 900);
    assert_eq!(count(Pattern::Arithmetic), 200);
    assert_eq!(count(Pattern::Constant), 1_000);
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_flag_matrix() {
    assert_eq!(
        Config::from_flags(None, None),
        (
            Config::default(),
            Some(DefaultsNotice::Both {
                iterations: DEFAULT_ITERATIONS,
                trials: DEFAULT_TRIALS
            })
        )
    );
    assert_eq!(Config::from_flags(Some(10), None).0.iterations, 10);
    assert_eq!(Config::from_flags(None, Some(4)).0.trials, 4);
    assert_eq!(Config::from_flags(Some(10), Some(4)).1, None);
}

// ============================================================================
// Timed loop
// ============================================================================

#[test]
fn constant_pattern_sum_is_sum_of_squares() {
    let n = 10_000u64;
    let timing = run_timed(&PatternSource::new(Pattern::Constant, n), n);
    let expected: i64 = (0..n).map(workload).sum();
    assert_eq!(timing.sum, expected);
}

#[test]
fn alternating_pattern_sum_closed_form() {
    // 0 - 1 + 4 - 9 + ... over 2k terms equals -k(2k - 1).
    let k = 500i64;
    let n = (2 * k) as u64;
    let timing = run_timed(&PatternSource::new(Pattern::Alternating, n), n);
    assert_eq!(timing.sum, -k * (2 * k - 1));
}

#[test]
fn all_false_sequence_negates_constant_sum() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    let none = generate_with_probability(4_000, 0.0, &mut rng);
    let all = generate_with_probability(4_000, 1.0, &mut rng);
    let neg = run_timed(none.conditions.as_slice(), 4_000);
    let pos = run_timed(all.conditions.as_slice(), 4_000);
    assert_eq!(neg.sum, -pos.sum);
}

#[test]
fn random_sequence_sum_is_reproducible() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(77);
    let generated = generate_with_probability(20_000, 0.5, &mut rng);
    let first = run_timed(&generated.conditions, 20_000);
    let second = run_timed(&generated.conditions, 20_000);
    assert_eq!(first.sum, second.sum);
}

// ============================================================================
// TrialResult
// ============================================================================

#[test]
fn differences_keep_sign() {
    let predictable = Pattern::ALL.map(|pattern| PatternTiming {
        pattern,
        elapsed_us: 100 * u64::from(pattern.selector()),
        sum: 0,
    });
    let result = TrialResult {
        trial: 1,
        probability: 0.5,
        true_percentage: 50.0,
        false_percentage: 50.0,
        unpredictable_us: 300,
        unpredictable_sum: 0,
        predictable,
    };
    let diffs: Vec<i64> = result.differences().iter().map(|(_, d)| *d).collect();
    assert_eq!(diffs, [200, 100, 0, -100, -200]);
}
