//! Deterministic branch conditions.

use crate::types::Pattern;

/// Condition for index `i` under `pattern` in a loop of `iterations` indices.
///
/// `iterations` only matters for [`Pattern::StrongBias`], which is false for
/// the final [`Pattern::STRONG_BIAS_TAIL`] indices. Loops of 100 indices or
/// fewer are therefore entirely false under that pattern.
#[inline(always)]
pub fn pattern_condition(pattern: Pattern, i: u64, iterations: u64) -> bool {
    match pattern {
        Pattern::Alternating => i % 2 == 0,
        Pattern::ThreeInTen => i % 10 < 3,
        Pattern::StrongBias => i.saturating_add(Pattern::STRONG_BIAS_TAIL) < iterations,
        Pattern::Arithmetic => {
            // (i * i) mod 5 from the residue, so large indices never overflow.
            let r = i % 5;
            r * r % 5 == 0
        }
        Pattern::Constant => true,
    }
}

/// Enumerate the conditions of `pattern` for a loop of `iterations` indices.
pub fn pattern_conditions(pattern: Pattern, iterations: u64) -> impl Iterator<Item = bool> {
    (0..iterations).map(move |i| pattern_condition(pattern, i, iterations))
}
