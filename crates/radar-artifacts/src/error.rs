//! Error types for the radar-artifacts crate.
//!
//! Artifact errors are deliberately fine-grained: a missing file, a file
//! that fails to parse, and a pair of artifacts that disagree about the
//! feature space are different operator problems and get different messages.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for artifact operations.
pub type ArtifactResult<T> = Result<T, ArtifactError>;

/// Errors that can occur while loading or validating artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// An expected artifact file does not exist.
    #[error("Artifact not found: {path}. Run the offline export step and place its output in the models directory.")]
    Missing {
        /// Path that was probed
        path: PathBuf,
    },

    /// An artifact file exists but could not be read.
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An artifact file was read but does not match the documented schema.
    #[error("Artifact {path} is corrupt or not a Revenue Radar artifact: {source}")]
    Parse {
        /// Path that was being parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// An artifact declares a format version newer than this build understands.
    #[error("Artifact {path} has format_version {found}, but this build supports up to {supported}")]
    UnsupportedVersion {
        /// Path of the offending artifact
        path: PathBuf,
        /// Version declared by the artifact
        found: u32,
        /// Newest version this crate can read
        supported: u32,
    },

    /// The scaler and model were fitted on different feature counts.
    #[error("Scaler was fitted on {scaler} features but the model expects {model}; the artifacts are from different exports")]
    FeatureCountMismatch {
        /// Feature count declared by the scaler
        scaler: usize,
        /// Feature count declared by the model
        model: usize,
    },

    /// The scaler and model declare different feature names or orderings.
    #[error("Scaler and model disagree on feature ordering: scaler has {scaler:?}, model has {model:?}")]
    FeatureNameMismatch {
        /// Names declared by the scaler
        scaler: Vec<String>,
        /// Names declared by the model
        model: Vec<String>,
    },

    /// Artifact parameters fail the numeric constraints of the core types.
    #[error("Artifact {path} holds invalid fitted parameters: {source}")]
    InvalidParameters {
        /// Path of the offending artifact
        path: PathBuf,
        /// Underlying core error
        #[source]
        source: radar_core::CoreError,
    },
}
