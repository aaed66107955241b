//! Randomized branch conditions.
//!
//! Each trial draws a fresh probability `p` and then an independent
//! Bernoulli(`p`) condition per index. Varying `p` across trials means the
//! unpredictable loop is measured over a spread of true/false ratios rather
//! than a single fixed mix.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// A materialized random condition sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomConditions {
    /// Probability each condition was drawn true with.
    pub probability: f64,
    /// One condition per loop index.
    pub conditions: Vec<bool>,
    /// Number of `true` entries in `conditions`.
    pub true_count: usize,
}

impl RandomConditions {
    /// Number of conditions (the loop length).
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Share of `true` entries in percent.
    ///
    /// Returns 0.0 for an empty sequence.
    pub fn true_percentage(&self) -> f64 {
        if self.conditions.is_empty() {
            return 0.0;
        }
        self.true_count as f64 / self.conditions.len() as f64 * 100.0
    }

    /// Share of `false` entries in percent.
    pub fn false_percentage(&self) -> f64 {
        if self.conditions.is_empty() {
            return 0.0;
        }
        100.0 - self.true_percentage()
    }
}

/// Draw `p` uniformly from [0, 1) and generate `iterations` conditions with it.
pub fn generate_random_conditions<R>(iterations: usize, rng: &mut R) -> RandomConditions
where
    R: Rng + ?Sized,
{
    let probability = Uniform::new(0.0, 1.0).sample(&mut *rng);
    generate_with_probability(iterations, probability, rng)
}

/// Generate `iterations` conditions, each true iff a uniform [0, 1) sample is below `probability`.
///
/// `probability <= 0.0` yields all false and `probability >= 1.0` all true.
pub fn generate_with_probability<R>(iterations: usize, probability: f64, rng: &mut R) -> RandomConditions
where
    R: Rng + ?Sized,
{
    let unit = Uniform::new(0.0, 1.0);
    let conditions: Vec<bool> = (0..iterations)
        .map(|_| unit.sample(&mut *rng) < probability)
        .collect();
    let true_count = conditions.iter().filter(|&&c| c).count();

    RandomConditions {
        probability,
        conditions,
        true_count,
    }
}
