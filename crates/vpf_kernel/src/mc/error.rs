//! Error types for the Monte Carlo estimator.

use thiserror::Error;

/// Configuration error for the void probability estimator.
///
/// Raised when the estimator is built with invalid parameters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Trial count outside valid range [1, 100_000_000].
    #[error("Invalid trial count {0}: must be in range [1, 100_000_000]")]
    InvalidTrialCount(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidTrialCount(0);
        assert!(err.to_string().contains("Invalid trial count 0"));

        let err = ConfigError::InvalidTrialCount(200_000_000);
        assert!(err.to_string().contains("200000000"));
    }
}
