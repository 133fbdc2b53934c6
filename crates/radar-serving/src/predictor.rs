//! The prediction pipeline.
//!
//! [`Predictor`] owns the loaded scaler and model and exposes the one
//! operation the application exists for: turn one [`FeatureVector`] into one
//! dollar amount. The pipeline is synchronous, single-shot, and deterministic;
//! the predictor is immutable after construction, so concurrent readers would
//! need no locking (not that the single-operator surface ever has any).

use std::path::Path;

use tracing::{debug, info};

use radar_artifacts::ArtifactBundle;
use radar_core::{FeatureScaler, FeatureVector, LinearRegression, RegressionModel, StandardScaler};

use crate::error::{ServingError, ServingResult};

/// A single predicted yearly spend, in dollars.
///
/// Unbounded in both directions: a negative amount is a legitimate model
/// response and is rendered, not rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted yearly amount spent, in dollars.
    pub amount: f64,
}

/// Pipeline holding a fitted scaler and model, built once from a loaded
/// artifact bundle.
#[derive(Debug, Clone)]
pub struct Predictor {
    scaler: StandardScaler,
    model: LinearRegression,
}

impl Predictor {
    /// Build a predictor by loading and validating artifacts from `dir`.
    ///
    /// The one startup path; any failure here must keep the interactive
    /// surface from opening.
    pub fn load(dir: impl AsRef<Path>) -> ServingResult<Self> {
        let bundle = ArtifactBundle::load(dir)?;
        Self::from_bundle(&bundle)
    }

    /// Build a predictor from an already-loaded bundle.
    pub fn from_bundle(bundle: &ArtifactBundle) -> ServingResult<Self> {
        bundle.validate_consistency()?;
        let scaler = bundle
            .scaler
            .to_scaler()
            .map_err(|source| radar_artifacts::ArtifactError::InvalidParameters {
                path: bundle.dir.join(radar_artifacts::SCALER_FILENAME),
                source,
            })?;
        let model = bundle
            .model
            .to_model()
            .map_err(|source| radar_artifacts::ArtifactError::InvalidParameters {
                path: bundle.dir.join(radar_artifacts::MODEL_FILENAME),
                source,
            })?;
        info!(n_features = scaler.n_features(), "Predictor ready");
        Ok(Self::from_parts(scaler, model))
    }

    /// Build a predictor directly from fitted parts (tests, embedding).
    pub fn from_parts(scaler: StandardScaler, model: LinearRegression) -> Self {
        Self { scaler, model }
    }

    /// Number of features the pipeline expects.
    pub fn n_features(&self) -> usize {
        self.model.n_features()
    }

    /// Run one prediction cycle: validate, scale, predict.
    ///
    /// Errors out of this method are all retryable; the operator adjusts the
    /// inputs and triggers again.
    pub fn predict(&self, input: &FeatureVector) -> ServingResult<Prediction> {
        input
            .validate()
            .map_err(|e| ServingError::InvalidInput(e.to_string()))?;

        let row = input.to_row();
        let scaled = self.scaler.transform(&row)?;
        let outputs = self.model.predict(&scaled)?;
        // One input row always yields exactly one output.
        let amount = outputs[0];

        if !amount.is_finite() {
            return Err(ServingError::NonFinite { value: amount });
        }

        debug!(
            avg_session_length = input.avg_session_length,
            time_on_app = input.time_on_app,
            length_of_membership = input.length_of_membership,
            amount,
            "Prediction served"
        );
        Ok(Prediction { amount })
    }
}
