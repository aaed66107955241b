//! Wall-clock timing for the measured loops.

use std::time::Instant;

/// Run `f` once and return its result with the elapsed whole microseconds.
///
/// Only the closure body is timed; any setup belongs outside it. Saturates
/// at `u64::MAX`.
#[inline]
pub fn measure_micros<F, T>(f: F) -> (u64, T)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    let micros = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
    (micros, value)
}
