//! Filler work executed inside each branch arm.

use std::hint::black_box;

/// Square `x` in a way the optimizer must actually perform.
///
/// Both the input and the result go through [`black_box`], so the
/// multiplication cannot be constant-folded, hoisted, or dropped even when
/// the caller discards the value.
#[inline(always)]
pub fn workload(x: u64) -> i64 {
    let x = black_box(x);
    black_box(x.wrapping_mul(x) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_small_values() {
        assert_eq!(workload(0), 0);
        assert_eq!(workload(1), 1);
        assert_eq!(workload(7), 49);
        assert_eq!(workload(1_000_000), 1_000_000_000_000);
    }

    #[test]
    fn is_pure() {
        for x in [3u64, 99, 123_456] {
            assert_eq!(workload(x), workload(x));
        }
    }

    #[test]
    fn large_inputs_wrap_instead_of_panicking() {
        let x = u64::MAX;
        assert_eq!(workload(x), x.wrapping_mul(x) as i64);
    }
}
