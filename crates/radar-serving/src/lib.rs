//! Prediction serving for Revenue Radar.
//!
//! This crate is the seam between the artifact store and the interactive
//! surface. It provides:
//!
//! - **[`Predictor`]**: loads the scaler/model artifact pair once at startup
//!   and serves one-shot, synchronous predictions from it
//! - **[`Prediction`]**: the single dollar amount a cycle produces
//! - **Rendering**: [`render::format_usd`] for the currency string shown to
//!   the operator
//! - **[`ServingError`]**: a tagged taxonomy separating fatal artifact
//!   problems from retryable input and numeric errors
//!
//! # Quick Start
//!
//! ```no_run
//! use radar_core::FeatureVector;
//! use radar_serving::Predictor;
//!
//! fn main() -> Result<(), radar_serving::ServingError> {
//!     let predictor = Predictor::load("models")?;
//!     let input = FeatureVector::new(34.5, 12.8, 4.2)?;
//!     let prediction = predictor.predict(&input)?;
//!     println!("Predicted yearly spend: {prediction}");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod predictor;
pub mod render;

pub use error::{ServingError, ServingResult};
pub use predictor::{Prediction, Predictor};
pub use render::format_usd;
