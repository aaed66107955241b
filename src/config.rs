//! Run configuration and command-line defaults.

/// Default loop length per test.
pub const DEFAULT_ITERATIONS: usize = 1_000_000;

/// Default number of trials.
pub const DEFAULT_TRIALS: usize = 3;

/// Configuration options for [`BranchOracle`](crate::BranchOracle).
///
/// Fixed for the lifetime of a run once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Iterations of every timed loop.
    ///
    /// Zero is accepted and yields empty loops with a 0.0% distribution.
    /// Default: 1,000,000.
    pub iterations: usize,

    /// Number of trials to run. Default: 3.
    pub trials: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            trials: DEFAULT_TRIALS,
        }
    }
}

impl Config {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the loop length.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the number of trials.
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Build a config from optional `--iter` / `--trial` values.
    ///
    /// Missing values take their defaults, and the returned notice says which
    /// defaults were applied. Each flag only ever sets its own field.
    pub fn from_flags(iter: Option<usize>, trial: Option<usize>) -> (Self, Option<DefaultsNotice>) {
        let config = Self {
            iterations: iter.unwrap_or(DEFAULT_ITERATIONS),
            trials: trial.unwrap_or(DEFAULT_TRIALS),
        };

        let notice = match (iter, trial) {
            (None, None) => Some(DefaultsNotice::Both {
                iterations: DEFAULT_ITERATIONS,
                trials: DEFAULT_TRIALS,
            }),
            (None, Some(_)) => Some(DefaultsNotice::Iterations(DEFAULT_ITERATIONS)),
            (Some(_), None) => Some(DefaultsNotice::Trials(DEFAULT_TRIALS)),
            (Some(_), Some(_)) => None,
        };

        (config, notice)
    }
}

/// Which command-line defaults were applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultsNotice {
    /// Neither `--iter` nor `--trial` was given.
    Both {
        /// Default iteration count in use.
        iterations: usize,
        /// Default trial count in use.
        trials: usize,
    },
    /// `--iter` was missing.
    Iterations(usize),
    /// `--trial` was missing.
    Trials(usize),
}

impl std::fmt::Display for DefaultsNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Both { iterations, trials } => write!(
                f,
                "--iter and --trial options are not provided. Using the default values: {} and {}",
                iterations, trials
            ),
            Self::Iterations(iterations) => write!(
                f,
                "--iter option is not provided, using the default value: {}",
                iterations
            ),
            Self::Trials(trials) => write!(
                f,
                "--trial option is not provided, using the default value: {}",
                trials
            ),
        }
    }
}
