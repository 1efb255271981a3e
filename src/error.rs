//! Error type shared by the pricing core.

use thiserror::Error;

/// The single failure mode of the pricing core: an input violated one of the
/// model's constraints. The message names the constraint that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricerError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl PricerError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        PricerError::InvalidParameter(msg.into())
    }
}

/// Result alias used throughout the pricing core.
pub type Result<T> = std::result::Result<T, PricerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = PricerError::invalid("volatility must be positive");
        assert_eq!(
            err.to_string(),
            "invalid parameter: volatility must be positive"
        );
    }
}
