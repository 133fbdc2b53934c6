//! Serialized artifact contract for Revenue Radar.
//!
//! Serving never trains anything: a companion offline step fits the scaler
//! and the regression model and exports each as a small, kind-tagged JSON
//! file. This crate defines that contract and everything around it:
//!
//! - **Schemas**: [`ScalerArtifact`] and [`ModelArtifact`], versioned and
//!   kind-tagged so a foreign or stale file fails loudly instead of
//!   mispredicting
//! - **Bundles**: [`ArtifactBundle`] loads the `scaler.json`/`model.json`
//!   pair from one directory and cross-validates that both artifacts came
//!   from the same export (matching feature counts and orderings)
//! - **Errors**: [`ArtifactError`] distinguishes a missing file from a
//!   corrupt one from a mismatched pair
//!
//! Artifacts are immutable for the process lifetime. There is no hot reload
//! and no fallback: a load failure means serving must not start.

pub mod error;
pub mod schema;
pub mod store;

pub use error::{ArtifactError, ArtifactResult};
pub use schema::{ModelArtifact, ScalerArtifact, FORMAT_VERSION};
pub use store::{ArtifactBundle, MODEL_FILENAME, SCALER_FILENAME};
