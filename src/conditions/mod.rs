//! Branch condition generators.
//!
//! Two regimes drive the timed loops:
//! - [`random`]: a per-trial random sequence the branch predictor cannot learn
//! - [`pattern`]: deterministic rules evaluated per index

pub mod pattern;
pub mod random;

pub use pattern::{pattern_condition, pattern_conditions};
pub use random::{generate_random_conditions, generate_with_probability, RandomConditions};
