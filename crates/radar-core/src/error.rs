//! Error types for the radar-core crate.
//!
//! This module defines error types for numeric operations: shape mismatches
//! between inputs and fitted parameters, and invalid fitted parameters.

use thiserror::Error;

/// Result type alias for core numeric operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Error type for scaler and model operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input feature count does not match the fitted parameters.
    #[error("Feature count mismatch: the fitted parameters expect {expected} features, got {actual}")]
    ShapeMismatch {
        /// The feature count the fitted parameters expect
        expected: usize,
        /// The feature count that was provided
        actual: usize,
    },

    /// Fitted parameters are unusable (wrong lengths, zero or non-finite scale).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the offending parameter
        message: String,
    },
}

impl CoreError {
    /// Convenience constructor for [`CoreError::InvalidParameter`].
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        CoreError::InvalidParameter {
            message: message.into(),
        }
    }
}
