//! On-disk artifact schemas.
//!
//! An artifact is a small, kind-tagged JSON document holding the fitted
//! parameters of one pipeline stage. The format is deliberately
//! language-neutral: a companion offline export step writes these files,
//! and serving only ever reads them.
//!
//! ```json
//! {
//!   "kind": "standard_scaler",
//!   "format_version": 1,
//!   "mean": [33.05, 12.05, 3.53],
//!   "scale": [0.99, 0.99, 1.0],
//!   "feature_names": ["avg_session_length", "time_on_app", "length_of_membership"]
//! }
//! ```
//!
//! `feature_names` is optional metadata; when present on both artifacts of a
//! bundle, the orderings must agree (see [`crate::store`]).

use serde::{Deserialize, Serialize};

use radar_core::{LinearRegression, StandardScaler};

/// Newest artifact format version this build can read.
pub const FORMAT_VERSION: u32 = 1;

fn default_format_version() -> u32 {
    1
}

/// Serialized form of a fitted scaler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerArtifact {
    /// Zero-mean/unit-variance standardization.
    StandardScaler {
        /// Artifact format version; readers reject versions they don't know.
        #[serde(default = "default_format_version")]
        format_version: u32,
        /// Per-feature fitted means.
        mean: Vec<f64>,
        /// Per-feature fitted scales (standard deviations).
        scale: Vec<f64>,
        /// Optional feature names in fitted order.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        feature_names: Option<Vec<String>>,
    },
}

impl ScalerArtifact {
    /// Build an artifact from a fitted scaler (the writer side of the contract).
    pub fn from_scaler(scaler: &StandardScaler, feature_names: Option<Vec<String>>) -> Self {
        ScalerArtifact::StandardScaler {
            format_version: FORMAT_VERSION,
            mean: scaler.mean().to_vec(),
            scale: scaler.scale().to_vec(),
            feature_names,
        }
    }

    /// Declared format version.
    pub fn format_version(&self) -> u32 {
        match self {
            ScalerArtifact::StandardScaler { format_version, .. } => *format_version,
        }
    }

    /// Number of features the scaler was fitted on.
    pub fn n_features(&self) -> usize {
        match self {
            ScalerArtifact::StandardScaler { mean, .. } => mean.len(),
        }
    }

    /// Feature names, if the export recorded them.
    pub fn feature_names(&self) -> Option<&[String]> {
        match self {
            ScalerArtifact::StandardScaler { feature_names, .. } => feature_names.as_deref(),
        }
    }

    /// Human-readable kind tag, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ScalerArtifact::StandardScaler { .. } => "standard_scaler",
        }
    }

    /// Reconstruct the fitted scaler, enforcing the core numeric constraints.
    pub fn to_scaler(&self) -> radar_core::CoreResult<StandardScaler> {
        match self {
            ScalerArtifact::StandardScaler { mean, scale, .. } => {
                StandardScaler::new(mean.clone(), scale.clone())
            }
        }
    }
}

/// Serialized form of a fitted regression model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    /// Ordinary linear regression.
    LinearRegression {
        /// Artifact format version; readers reject versions they don't know.
        #[serde(default = "default_format_version")]
        format_version: u32,
        /// Per-feature fitted coefficients, in scaled feature space.
        coefficients: Vec<f64>,
        /// Fitted intercept.
        intercept: f64,
        /// Optional feature names in fitted order.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        feature_names: Option<Vec<String>>,
    },
}

impl ModelArtifact {
    /// Build an artifact from a fitted model (the writer side of the contract).
    pub fn from_model(model: &LinearRegression, feature_names: Option<Vec<String>>) -> Self {
        ModelArtifact::LinearRegression {
            format_version: FORMAT_VERSION,
            coefficients: model.coefficients().to_vec(),
            intercept: model.intercept(),
            feature_names,
        }
    }

    /// Declared format version.
    pub fn format_version(&self) -> u32 {
        match self {
            ModelArtifact::LinearRegression { format_version, .. } => *format_version,
        }
    }

    /// Number of features the model was fitted on.
    pub fn n_features(&self) -> usize {
        match self {
            ModelArtifact::LinearRegression { coefficients, .. } => coefficients.len(),
        }
    }

    /// Feature names, if the export recorded them.
    pub fn feature_names(&self) -> Option<&[String]> {
        match self {
            ModelArtifact::LinearRegression { feature_names, .. } => feature_names.as_deref(),
        }
    }

    /// Human-readable kind tag, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::LinearRegression { .. } => "linear_regression",
        }
    }

    /// Reconstruct the fitted model, enforcing the core numeric constraints.
    pub fn to_model(&self) -> radar_core::CoreResult<LinearRegression> {
        match self {
            ModelArtifact::LinearRegression {
                coefficients,
                intercept,
                ..
            } => LinearRegression::new(coefficients.clone(), *intercept),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaler_round_trip() {
        let scaler = StandardScaler::new(vec![1.0, 2.0, 3.0], vec![0.5, 0.5, 0.5]).unwrap();
        let artifact = ScalerArtifact::from_scaler(&scaler, None);
        let json = serde_json::to_string(&artifact).unwrap();
        assert!(json.contains("\"kind\":\"standard_scaler\""));
        let parsed: ScalerArtifact = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.to_scaler().unwrap(), scaler);
    }

    #[test]
    fn test_model_round_trip() {
        let model = LinearRegression::new(vec![25.7, 38.6, 61.7], 499.3).unwrap();
        let artifact = ModelArtifact::from_model(&model, None);
        let json = serde_json::to_string(&artifact).unwrap();
        assert!(json.contains("\"kind\":\"linear_regression\""));
        let parsed: ModelArtifact = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.to_model().unwrap(), model);
    }

    #[test]
    fn test_format_version_defaults_to_one() {
        // Early exports omitted format_version; readers treat them as v1.
        let json = r#"{"kind":"standard_scaler","mean":[0.0],"scale":[1.0]}"#;
        let parsed: ScalerArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.format_version(), 1);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{"kind":"random_forest","coefficients":[1.0],"intercept":0.0}"#;
        assert!(serde_json::from_str::<ModelArtifact>(json).is_err());
    }

    #[test]
    fn test_invalid_parameters_surface_as_core_error() {
        let json = r#"{"kind":"standard_scaler","mean":[0.0],"scale":[0.0]}"#;
        let parsed: ScalerArtifact = serde_json::from_str(json).unwrap();
        assert!(parsed.to_scaler().is_err());
    }
}
