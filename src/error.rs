//! Errors reported by fallible skip list operations.
//!
//! Structural misuse (stale handles, removing a sentinel, walking a cursor
//! off either end) is not represented here: those panic, since there is no
//! meaningful way to continue with a list whose links may be wrong.

use std::collections::TryReserveError;

/// Error returned by the `try_*` family of operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The node arena could not grow.
    #[error("allocation failed: {0}")]
    Exhausted(#[from] TryReserveError),

    /// Every 32-bit node index is in use.
    #[error("node index space exhausted")]
    CapacityOverflow,

    /// A [`Config`](crate::Config) field is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// The operating system random source could not seed the level generator.
    #[error("failed to seed level generator: {0}")]
    Entropy(#[from] rand_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_from_try_reserve() {
        let mut v: Vec<u64> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        let err = Error::from(err);
        assert!(matches!(err, Error::Exhausted(_)));
        assert!(err.to_string().starts_with("allocation failed"));
    }

    #[test]
    fn invalid_config_message() {
        let err = Error::InvalidConfig("max_level must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: max_level must be at least 1"
        );
    }
}
