//! Construction parameters.

use crate::error::Error;
use crate::error::Result;

/// Hard ceiling on `max_level`. Node indices are 32-bit, so more levels than
/// this never pay for themselves.
pub const MAX_LEVEL_LIMIT: usize = 32;

/// Default maximum level index. 16 levels covers tens of thousands of
/// elements at full speed and degrades gracefully beyond.
pub const DEFAULT_MAX_LEVEL: usize = 16;

/// Default probability that a node reaches the next level.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Tunables for a [`SkipList`](crate::SkipList).
///
/// ```
/// use skipseq::Config;
///
/// let config = Config::default().with_max_level(8).with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Highest level index a node may reach. Sentinels span `0..=max_level`.
    pub max_level: usize,
    /// Chance that a coin toss promotes a node one more level.
    pub probability: f64,
    /// Seed for the default level generator. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Raise `max_level` to `ceil(log2(len))` as the list grows.
    pub adaptive: bool,
}

impl Default for Config {
    fn default() -> Self {
        return Config {
            max_level: DEFAULT_MAX_LEVEL,
            probability: DEFAULT_PROBABILITY,
            seed: None,
            adaptive: false,
        };
    }
}

impl Config {
    /// A config whose level cap suits roughly `capacity` elements.
    pub fn for_capacity(capacity: usize) -> Self {
        return Config {
            max_level: ceil_log2(capacity).clamp(1, MAX_LEVEL_LIMIT),
            ..Config::default()
        };
    }

    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        return self;
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        return self;
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        return self;
    }

    pub fn with_adaptive(mut self, adaptive: bool) -> Self {
        self.adaptive = adaptive;
        return self;
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_level == 0 {
            return Err(Error::InvalidConfig("max_level must be at least 1"));
        }
        if self.max_level > MAX_LEVEL_LIMIT {
            return Err(Error::InvalidConfig("max_level exceeds MAX_LEVEL_LIMIT"));
        }
        // Also rejects NaN.
        if !(self.probability > 0.0 && self.probability < 1.0) {
            return Err(Error::InvalidConfig("probability must be in (0, 1)"));
        }
        return Ok(());
    }
}

/// Smallest `k` with `2^k >= n`; 0 for `n <= 1`.
pub(crate) fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    return (usize::BITS - (n - 1).leading_zeros()) as usize;
}
