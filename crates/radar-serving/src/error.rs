//! Error types for the radar-serving crate.
//!
//! Serving errors are tagged by cause so an operator can tell a typo'd
//! input from a broken artifact pair. [`ServingError::retryable`] encodes
//! the recovery policy: artifact problems end the session, everything else
//! invites the operator to adjust inputs and trigger again.

use thiserror::Error;

use radar_artifacts::ArtifactError;
use radar_core::CoreError;

/// Result type alias for serving operations.
pub type ServingResult<T> = Result<T, ServingError>;

/// Errors that can occur while building a predictor or serving a prediction.
#[derive(Debug, Error)]
pub enum ServingError {
    /// Artifact loading or validation failed. Fatal to the session.
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// The operator's input failed validation (non-finite or negative).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The input's feature count does not match the loaded artifacts.
    #[error("Input shape mismatch: the loaded artifacts expect {expected} features, got {actual}")]
    Shape {
        /// Feature count the loaded artifacts expect
        expected: usize,
        /// Feature count of the rejected input
        actual: usize,
    },

    /// Transform or predict produced a non-finite value.
    #[error("Prediction produced a non-finite value ({value}); the inputs may be out of the model's numeric range")]
    NonFinite {
        /// The offending value
        value: f64,
    },
}

impl ServingError {
    /// Whether the operator may retry with different inputs.
    ///
    /// Artifact errors are the only fatal class; they cannot be fixed from
    /// the input form.
    pub fn retryable(&self) -> bool {
        !matches!(self, ServingError::Artifact(_))
    }
}

impl From<CoreError> for ServingError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ShapeMismatch { expected, actual } => {
                ServingError::Shape { expected, actual }
            }
            CoreError::InvalidParameter { message } => ServingError::InvalidInput(message),
        }
    }
}
