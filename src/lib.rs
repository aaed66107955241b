//! # branch-oracle
//!
//! Measure the wall-clock cost of branch misprediction.
//!
//! Each trial times the same tight loop under two regimes:
//! - **Unpredictable**: branch conditions drawn at random with a per-trial
//!   probability, so the branch predictor cannot learn them
//! - **Predictable**: five deterministic patterns (alternating, 3-in-10,
//!   strong bias, arithmetic, constant) a predictor learns quickly
//!
//! The loop body adds or subtracts the square of the index depending on the
//! condition. Reported per trial: the true/false split of the random
//! sequence, six loop times in microseconds, and the unpredictable time minus
//! each predictable time.
//!
//! ## Quick Start
//!
//! ```no_run
//! use branch_oracle::{BranchOracle, Config};
//!
//! let config = Config::new().iterations(1_000_000).trials(3);
//! let mut oracle = BranchOracle::new(config);
//!
//! let result = oracle.run_trial();
//! for (pattern, diff) in result.differences() {
//!     println!("trial {} {}: {} us", result.trial, pattern, diff);
//! }
//! ```
//!
//! ## Measurement Caveats
//!
//! Run release builds. Timing is wall-clock on the calling thread, so other
//! load on the machine shows up in the numbers; compare within a trial rather
//! than across runs.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod oracle;
mod result;
mod types;

// Functional modules
pub mod conditions;
pub mod measurement;
pub mod output;

// Re-exports for public API
pub use conditions::{generate_random_conditions, RandomConditions};
pub use config::{Config, DefaultsNotice, DEFAULT_ITERATIONS, DEFAULT_TRIALS};
pub use error::{Error, Result};
pub use measurement::{run_timed, workload, ConditionSource, LoopTiming, PatternSource};
pub use oracle::BranchOracle;
pub use result::{PatternTiming, TrialResult};
pub use types::Pattern;
