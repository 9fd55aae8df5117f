/// Monte Carlo iterations when the caller does not choose.
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Limits under which Exact Mode is allowed to enumerate.
///
/// All three must hold; anything larger is sampled instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct SizingPolicy {
    pub max_opponents: usize,
    pub max_unknown_cards: usize,
    pub max_scenarios: u128,
}

impl SizingPolicy {
    pub const fn new(max_opponents: usize, max_unknown_cards: usize, max_scenarios: u128) -> Self {
        Self { max_opponents, max_unknown_cards, max_scenarios }
    }

    /// A policy that never enumerates.
    pub const fn never() -> Self {
        Self::new(0, 0, 0)
    }
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self::new(2, 10, 1_000_000)
    }
}

/// Knobs for a probability calculation.
///
/// ```
/// use poker_odds::odds::OddsConfig;
///
/// let config = OddsConfig::default().with_iterations(2_000).with_seed(7);
/// assert_eq!(config.iterations, 2_000);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct OddsConfig {
    /// Monte Carlo iteration count.
    pub iterations: usize,
    /// Fixed seed for reproducible sampling; `None` draws fresh entropy per call.
    pub seed: Option<u64>,
    pub policy: SizingPolicy,
    /// Spread work over the rayon pool when the `parallel` feature is enabled.
    pub parallel: bool,
}

impl OddsConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set a deterministic RNG seed for reproducible sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_policy(mut self, policy: SizingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run everything on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for OddsConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            policy: SizingPolicy::default(),
            parallel: cfg!(feature = "parallel"),
        }
    }
}
