//! Common types shared across modules.

/// Deterministic branch pattern used by the predictable loops.
///
/// Each pattern is a pure rule over the loop index, chosen so a hardware
/// branch predictor can learn it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// True on even indices.
    Alternating,
    /// True for the first three of every ten indices.
    ThreeInTen,
    /// True everywhere except the final 100 indices of the loop.
    StrongBias,
    /// True when `i * i` is divisible by five.
    Arithmetic,
    /// Always true.
    Constant,
}

impl Pattern {
    /// All patterns in report order.
    pub const ALL: [Pattern; 5] = [
        Pattern::Alternating,
        Pattern::ThreeInTen,
        Pattern::StrongBias,
        Pattern::Arithmetic,
        Pattern::Constant,
    ];

    /// Number of trailing indices that are false under [`Pattern::StrongBias`].
    pub const STRONG_BIAS_TAIL: u64 = 100;

    /// Map a numeric selector (1-5) to a pattern.
    ///
    /// Unrecognized selectors fall back to [`Pattern::Constant`].
    pub fn from_selector(selector: u8) -> Self {
        match selector {
            1 => Pattern::Alternating,
            2 => Pattern::ThreeInTen,
            3 => Pattern::StrongBias,
            4 => Pattern::Arithmetic,
            _ => Pattern::Constant,
        }
    }

    /// Numeric selector of this pattern (inverse of [`Pattern::from_selector`]).
    pub fn selector(self) -> u8 {
        match self {
            Pattern::Alternating => 1,
            Pattern::ThreeInTen => 2,
            Pattern::StrongBias => 3,
            Pattern::Arithmetic => 4,
            Pattern::Constant => 5,
        }
    }

    /// Label used in the terminal report.
    pub fn label(self) -> &'static str {
        match self {
            Pattern::Alternating => "Alternating",
            Pattern::ThreeInTen => "3/10 Pattern",
            Pattern::StrongBias => "Strong Bias",
            Pattern::Arithmetic => "Arithmetic",
            Pattern::Constant => "Constant",
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
