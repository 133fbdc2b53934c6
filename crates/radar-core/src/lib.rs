//! Numeric primitives for Revenue Radar.
//!
//! Revenue Radar predicts a customer's yearly spend from three usage metrics.
//! This crate holds the math that serving is built on:
//!
//! - **Feature vectors**: the three-metric input and its validation rules
//! - **Scalers**: the fitted standardization transform applied before the model
//! - **Models**: fitted linear regression producing one dollar amount per row
//!
//! Fitting happens offline and is out of scope; everything here operates on
//! already-fitted parameters and is deterministic.
//!
//! # Quick Start
//!
//! ```
//! use radar_core::{FeatureScaler, FeatureVector, LinearRegression, RegressionModel, StandardScaler};
//!
//! let scaler = StandardScaler::identity(3);
//! let model = LinearRegression::new(vec![10.0, 5.0, 20.0], 0.0).unwrap();
//!
//! let input = FeatureVector::new(34.5, 12.8, 4.2).unwrap();
//! let scaled = scaler.transform(&input.to_row()).unwrap();
//! let prediction = model.predict(&scaled).unwrap();
//! assert_eq!(prediction[0], 493.0);
//! ```

pub mod error;
pub mod feature;
pub mod model;
pub mod scaler;

pub use error::{CoreError, CoreResult};
pub use feature::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use model::{LinearRegression, RegressionModel};
pub use scaler::{FeatureScaler, StandardScaler};
