//! Error types for the spendcast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while building or forecasting spending series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient observed months for the operation.
    #[error("insufficient data: need at least {needed} observed months, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Forecast horizon is not a positive number of months.
    #[error("invalid forecast horizon: {got} (must be at least one month)")]
    InvalidHorizon { got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Computation error (e.g., numerical issues during fitting).
    #[error("computation error: {0}")]
    ComputationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = ForecastError::EmptyData;
        assert_eq!(err.to_string(), "empty input data");

        let err = ForecastError::InsufficientData { needed: 3, got: 2 };
        assert_eq!(
            err.to_string(),
            "insufficient data: need at least 3 observed months, got 2"
        );

        let err = ForecastError::InvalidHorizon { got: 0 };
        assert_eq!(
            err.to_string(),
            "invalid forecast horizon: 0 (must be at least one month)"
        );

        let err = ForecastError::FitRequired;
        assert_eq!(err.to_string(), "model must be fitted before prediction");
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = ForecastError::InvalidHorizon { got: 0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
