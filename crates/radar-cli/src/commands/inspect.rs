//! Inspect Command Implementation
//!
//! Read-only diagnostics: show what the artifact files in a models
//! directory declare, and whether the pair is consistent. Useful when a
//! predict session refuses to start or artifacts came from an unknown
//! export.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use radar_artifacts::{ArtifactBundle, MODEL_FILENAME, SCALER_FILENAME};

/// Inspect the artifacts in a models directory
///
/// # Example
///
/// ```bash
/// radar inspect --models-dir ./models
/// ```
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// Directory containing scaler.json and model.json
    #[arg(long, short = 'd', default_value = "models", env = "REVENUE_RADAR_MODELS_DIR")]
    pub models_dir: PathBuf,
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn run(&self) -> Result<()> {
        let bundle = ArtifactBundle::load(&self.models_dir).with_context(|| {
            format!("Failed to load artifacts from {:?}", self.models_dir)
        })?;

        println!("Models directory: {}", bundle.dir.display());
        println!();
        println!("{SCALER_FILENAME}:");
        println!("  kind:            {}", bundle.scaler.kind());
        println!("  format version:  {}", bundle.scaler.format_version());
        println!("  features:        {}", bundle.scaler.n_features());
        if let Some(names) = bundle.scaler.feature_names() {
            println!("  feature names:   {}", names.join(", "));
        }
        println!();
        println!("{MODEL_FILENAME}:");
        println!("  kind:            {}", bundle.model.kind());
        println!("  format version:  {}", bundle.model.format_version());
        println!("  features:        {}", bundle.model.n_features());
        if let Some(names) = bundle.model.feature_names() {
            println!("  feature names:   {}", names.join(", "));
        }
        println!();
        println!("Consistency:       ok ({} features)", bundle.n_features());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar_artifacts::{ModelArtifact, ScalerArtifact};
    use radar_core::{LinearRegression, StandardScaler};

    #[test]
    fn test_inspect_loaded_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = ArtifactBundle {
            dir: dir.path().to_path_buf(),
            scaler: ScalerArtifact::from_scaler(&StandardScaler::identity(3), None),
            model: ModelArtifact::from_model(
                &LinearRegression::new(vec![1.0, 2.0, 3.0], 0.5).unwrap(),
                None,
            ),
        };
        bundle.save(dir.path()).unwrap();

        let cmd = InspectCommand {
            models_dir: dir.path().to_path_buf(),
        };
        assert!(cmd.run().is_ok());
    }

    #[test]
    fn test_inspect_missing_directory_fails() {
        let cmd = InspectCommand {
            models_dir: PathBuf::from("/nonexistent/models"),
        };
        assert!(cmd.run().is_err());
    }
}
