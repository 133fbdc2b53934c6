//! The customer-usage feature vector.
//!
//! Revenue Radar predicts yearly spend from exactly three usage metrics,
//! collected in a fixed canonical order. This module defines that vector,
//! its validation rules, and the conversion into the row-matrix form the
//! scaler and model operate on.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Number of features the pipeline operates on.
pub const FEATURE_COUNT: usize = 3;

/// Canonical feature names, in pipeline order.
///
/// Artifacts that carry feature names are validated against this ordering.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "avg_session_length",
    "time_on_app",
    "length_of_membership",
];

/// One customer's usage metrics, as entered by the operator.
///
/// All values are free-form non-negative reals; units are minutes for the
/// session/app metrics and years for membership. No upper bound is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Average session length in minutes.
    pub avg_session_length: f64,
    /// Total time spent on the app in minutes.
    pub time_on_app: f64,
    /// Length of membership in years.
    pub length_of_membership: f64,
}

impl FeatureVector {
    /// Create a feature vector, rejecting non-finite or negative entries.
    pub fn new(
        avg_session_length: f64,
        time_on_app: f64,
        length_of_membership: f64,
    ) -> CoreResult<Self> {
        let v = Self {
            avg_session_length,
            time_on_app,
            length_of_membership,
        };
        v.validate()?;
        Ok(v)
    }

    /// Check that every entry is finite and non-negative.
    ///
    /// This is the only input validation the pipeline performs; zero is a
    /// valid value for every field and there is no upper bound.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in FEATURE_NAMES.iter().zip(self.as_array()) {
            if !value.is_finite() {
                return Err(CoreError::invalid_parameter(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
            if value < 0.0 {
                return Err(CoreError::invalid_parameter(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// The entries in canonical order.
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.avg_session_length,
            self.time_on_app,
            self.length_of_membership,
        ]
    }

    /// Reshape into the single-row matrix form the scaler expects.
    pub fn to_row(&self) -> Array2<f64> {
        ndarray::arr2(&[self.as_array()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_vector() {
        let v = FeatureVector::new(34.5, 12.8, 4.2).unwrap();
        assert_eq!(v.as_array(), [34.5, 12.8, 4.2]);
    }

    #[test]
    fn test_zero_vector_is_valid() {
        assert!(FeatureVector::new(0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_negative_entry_rejected() {
        let err = FeatureVector::new(34.5, -0.1, 4.2).unwrap_err();
        assert!(err.to_string().contains("time_on_app"));
    }

    #[test]
    fn test_non_finite_entry_rejected() {
        assert!(FeatureVector::new(f64::NAN, 12.8, 4.2).is_err());
        assert!(FeatureVector::new(34.5, f64::INFINITY, 4.2).is_err());
    }

    #[test]
    fn test_to_row_shape() {
        let row = FeatureVector::new(1.0, 2.0, 3.0).unwrap().to_row();
        assert_eq!(row.shape(), &[1, FEATURE_COUNT]);
        assert_eq!(row[[0, 2]], 3.0);
    }
}
