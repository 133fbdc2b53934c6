//! Feature scaling.
//!
//! Raw usage metrics live on very different ranges (minutes vs. years), so
//! the model is trained on standardized features. This module provides the
//! [`FeatureScaler`] trait and the [`StandardScaler`] implementation that
//! mirrors the offline training step's zero-mean/unit-variance transform.

use ndarray::{Array1, Array2};

use crate::error::{CoreError, CoreResult};

/// A fitted, stateless transform applied to raw features before prediction.
///
/// Implementations are deterministic given their fitted parameters: the same
/// input always produces the same output.
pub trait FeatureScaler: Send + Sync {
    /// Number of features the scaler was fitted on.
    fn n_features(&self) -> usize;

    /// Transform a batch of raw feature rows into scaled rows.
    ///
    /// The output has the same shape as the input. A column-count mismatch
    /// against the fitted parameters is a [`CoreError::ShapeMismatch`].
    fn transform(&self, x: &Array2<f64>) -> CoreResult<Array2<f64>>;
}

/// Zero-mean/unit-variance scaler with per-feature fitted parameters.
///
/// `transform(x) = (x - mean) / scale`, applied element-wise per column.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl StandardScaler {
    /// Build a scaler from fitted mean and scale vectors.
    ///
    /// Rejects mismatched lengths and zero or non-finite scale entries; a
    /// zero scale would make the transform divide by zero.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> CoreResult<Self> {
        if mean.len() != scale.len() {
            return Err(CoreError::invalid_parameter(format!(
                "mean has {} entries but scale has {}",
                mean.len(),
                scale.len()
            )));
        }
        if mean.is_empty() {
            return Err(CoreError::invalid_parameter("scaler has no features"));
        }
        for (i, &m) in mean.iter().enumerate() {
            if !m.is_finite() {
                return Err(CoreError::invalid_parameter(format!(
                    "mean[{i}] is not finite: {m}"
                )));
            }
        }
        for (i, &s) in scale.iter().enumerate() {
            if !s.is_finite() || s == 0.0 {
                return Err(CoreError::invalid_parameter(format!(
                    "scale[{i}] must be finite and non-zero, got {s}"
                )));
            }
        }
        Ok(Self {
            mean: Array1::from(mean),
            scale: Array1::from(scale),
        })
    }

    /// The identity scaler over `n` features (mean 0, scale 1).
    pub fn identity(n: usize) -> Self {
        Self {
            mean: Array1::zeros(n),
            scale: Array1::ones(n),
        }
    }

    /// Fitted per-feature means.
    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    /// Fitted per-feature scales (standard deviations).
    pub fn scale(&self) -> &Array1<f64> {
        &self.scale
    }

    /// Map scaled rows back to the raw feature space.
    pub fn inverse_transform(&self, x: &Array2<f64>) -> CoreResult<Array2<f64>> {
        self.check_shape(x)?;
        Ok(x * &self.scale + &self.mean)
    }

    fn check_shape(&self, x: &Array2<f64>) -> CoreResult<()> {
        if x.ncols() != self.mean.len() {
            return Err(CoreError::ShapeMismatch {
                expected: self.mean.len(),
                actual: x.ncols(),
            });
        }
        Ok(())
    }
}

impl FeatureScaler for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, x: &Array2<f64>) -> CoreResult<Array2<f64>> {
        self.check_shape(x)?;
        Ok((x - &self.mean) / &self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_identity_is_noop() {
        let scaler = StandardScaler::identity(3);
        let x = arr2(&[[34.5, 12.8, 4.2]]);
        let y = scaler.transform(&x).unwrap();
        assert_eq!(y, x);
    }

    #[test]
    fn test_standardize() {
        let scaler = StandardScaler::new(vec![1.0, 2.0], vec![2.0, 4.0]).unwrap();
        let y = scaler.transform(&arr2(&[[3.0, 10.0]])).unwrap();
        assert_eq!(y, arr2(&[[1.0, 2.0]]));
    }

    #[test]
    fn test_inverse_round_trip() {
        let scaler = StandardScaler::new(vec![33.0, 12.0, 3.5], vec![0.9, 1.1, 1.0]).unwrap();
        let x = arr2(&[[34.5, 12.8, 4.2]]);
        let back = scaler.inverse_transform(&scaler.transform(&x).unwrap()).unwrap();
        for (a, b) in back.iter().zip(x.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_shape_mismatch() {
        // A scaler fitted on four features must reject a three-column input.
        let scaler = StandardScaler::identity(4);
        let err = scaler.transform(&arr2(&[[1.0, 2.0, 3.0]])).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ShapeMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_zero_scale_rejected() {
        assert!(StandardScaler::new(vec![0.0], vec![0.0]).is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(StandardScaler::new(vec![0.0, 0.0], vec![1.0]).is_err());
    }
}
