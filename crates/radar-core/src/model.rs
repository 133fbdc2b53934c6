//! Regression models.
//!
//! This module provides the [`RegressionModel`] trait and the fitted
//! [`LinearRegression`] implementation used for serving. Training happens
//! offline; only the fitted coefficients and intercept are represented here.

use ndarray::{Array1, Array2};

use crate::error::{CoreError, CoreResult};

/// A fitted function mapping feature rows to one continuous prediction each.
pub trait RegressionModel: Send + Sync {
    /// Number of features the model was fitted on.
    fn n_features(&self) -> usize;

    /// Predict one value per input row.
    ///
    /// A column-count mismatch against the fitted coefficients is a
    /// [`CoreError::ShapeMismatch`].
    fn predict(&self, x: &Array2<f64>) -> CoreResult<Array1<f64>>;
}

/// Ordinary linear regression: `y = x · coefficients + intercept`.
///
/// Predictions are unbounded in both directions; a negative output is a
/// legitimate model response, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearRegression {
    /// Build a model from fitted coefficients and intercept.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> CoreResult<Self> {
        if coefficients.is_empty() {
            return Err(CoreError::invalid_parameter("model has no coefficients"));
        }
        for (i, &c) in coefficients.iter().enumerate() {
            if !c.is_finite() {
                return Err(CoreError::invalid_parameter(format!(
                    "coefficients[{i}] is not finite: {c}"
                )));
            }
        }
        if !intercept.is_finite() {
            return Err(CoreError::invalid_parameter(format!(
                "intercept is not finite: {intercept}"
            )));
        }
        Ok(Self {
            coefficients: Array1::from(coefficients),
            intercept,
        })
    }

    /// Fitted per-feature coefficients.
    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    /// Fitted intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl RegressionModel for LinearRegression {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, x: &Array2<f64>) -> CoreResult<Array1<f64>> {
        if x.ncols() != self.coefficients.len() {
            return Err(CoreError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: x.ncols(),
            });
        }
        Ok(x.dot(&self.coefficients) + self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_weighted_sum() {
        let model = LinearRegression::new(vec![10.0, 5.0, 20.0], 0.0).unwrap();
        let y = model.predict(&arr2(&[[34.5, 12.8, 4.2]])).unwrap();
        assert_eq!(y.len(), 1);
        assert_eq!(y[0], 493.0);
    }

    #[test]
    fn test_zero_input_yields_intercept() {
        let model = LinearRegression::new(vec![1.0, 2.0, 3.0], 42.5).unwrap();
        let y = model.predict(&arr2(&[[0.0, 0.0, 0.0]])).unwrap();
        assert_eq!(y[0], 42.5);
    }

    #[test]
    fn test_negative_prediction_is_valid() {
        let model = LinearRegression::new(vec![-100.0, 0.0, 0.0], 0.0).unwrap();
        let y = model.predict(&arr2(&[[12.0, 0.0, 0.0]])).unwrap();
        assert_eq!(y[0], -1200.0);
    }

    #[test]
    fn test_shape_mismatch() {
        let model = LinearRegression::new(vec![1.0, 2.0], 0.0).unwrap();
        let err = model.predict(&arr2(&[[1.0, 2.0, 3.0]])).unwrap_err();
        assert!(matches!(err, CoreError::ShapeMismatch { expected: 2, actual: 3 }));
    }

    #[test]
    fn test_non_finite_coefficients_rejected() {
        assert!(LinearRegression::new(vec![f64::NAN], 0.0).is_err());
        assert!(LinearRegression::new(vec![1.0], f64::INFINITY).is_err());
    }

    #[test]
    fn test_batch_prediction() {
        let model = LinearRegression::new(vec![2.0, 3.0], 1.0).unwrap();
        let y = model.predict(&arr2(&[[1.0, 1.0], [2.0, 0.0]])).unwrap();
        assert_eq!(y.len(), 2);
        assert_eq!(y[0], 6.0);
        assert_eq!(y[1], 5.0);
    }
}
