//! Measurement infrastructure for branch timing.
//!
//! This module provides:
//! - The workload executed inside each branch arm
//! - Wall-clock timing with microsecond resolution
//! - The timed loop runner shared by the predictable and unpredictable tests
//!
//! # Keeping the loop honest
//!
//! Every loop iteration feeds its workload result into a running sum that is
//! returned alongside the elapsed time, and both the workload input and
//! output pass through [`std::hint::black_box`]. The optimizer can neither
//! hoist the square out of the loop nor turn the branch into a conditional
//! move over a constant, so the branch stays in the measured code.

mod runner;
mod timer;
mod workload;

pub use runner::{run_timed, ConditionSource, LoopTiming, PatternSource};
pub use timer::measure_micros;
pub use workload::workload;
