//! Loading and saving artifact bundles.
//!
//! A bundle is the pair of files serving needs: `scaler.json` and
//! `model.json`, side by side in one directory. [`ArtifactBundle::load`] is
//! the single entry point serving uses at startup; it reads both files,
//! checks the format version, and cross-validates that the two artifacts
//! came from the same export before any prediction can happen.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ArtifactError, ArtifactResult};
use crate::schema::{ModelArtifact, ScalerArtifact, FORMAT_VERSION};

/// File name of the scaler artifact inside a models directory.
pub const SCALER_FILENAME: &str = "scaler.json";

/// File name of the model artifact inside a models directory.
pub const MODEL_FILENAME: &str = "model.json";

/// A validated pair of artifacts loaded from one models directory.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    /// Directory the bundle was loaded from.
    pub dir: PathBuf,
    /// The scaler artifact.
    pub scaler: ScalerArtifact,
    /// The model artifact.
    pub model: ModelArtifact,
}

impl ArtifactBundle {
    /// Load and validate both artifacts from `dir`.
    ///
    /// Performed once per process lifetime; the returned bundle is immutable.
    /// Any error here is fatal to interactive use: serving must not start
    /// with partial state.
    pub fn load(dir: impl AsRef<Path>) -> ArtifactResult<Self> {
        let dir = dir.as_ref();
        let scaler_path = dir.join(SCALER_FILENAME);
        let model_path = dir.join(MODEL_FILENAME);

        debug!(dir = %dir.display(), "Loading artifact bundle");
        let scaler: ScalerArtifact = read_artifact(&scaler_path)?;
        check_version(&scaler_path, scaler.format_version())?;
        let model: ModelArtifact = read_artifact(&model_path)?;
        check_version(&model_path, model.format_version())?;

        let bundle = Self {
            dir: dir.to_path_buf(),
            scaler,
            model,
        };
        bundle.validate_consistency()?;

        info!(
            dir = %dir.display(),
            scaler = bundle.scaler.kind(),
            model = bundle.model.kind(),
            n_features = bundle.scaler.n_features(),
            "Loaded artifact bundle"
        );
        Ok(bundle)
    }

    /// Write both artifacts to `dir`, creating it if needed.
    ///
    /// This is the writer side used by the offline export step and by tests.
    pub fn save(&self, dir: impl AsRef<Path>) -> ArtifactResult<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| ArtifactError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        write_artifact(&dir.join(SCALER_FILENAME), &self.scaler)?;
        write_artifact(&dir.join(MODEL_FILENAME), &self.model)?;
        info!(dir = %dir.display(), "Saved artifact bundle");
        Ok(())
    }

    /// Number of features both artifacts agree on.
    pub fn n_features(&self) -> usize {
        self.scaler.n_features()
    }

    /// Check that scaler and model describe the same feature space.
    ///
    /// A pair from two different exports would transform and predict without
    /// complaint while producing garbage; a mismatch is refused up front.
    pub fn validate_consistency(&self) -> ArtifactResult<()> {
        if self.scaler.n_features() != self.model.n_features() {
            return Err(ArtifactError::FeatureCountMismatch {
                scaler: self.scaler.n_features(),
                model: self.model.n_features(),
            });
        }
        if let (Some(s), Some(m)) = (self.scaler.feature_names(), self.model.feature_names()) {
            if s != m {
                return Err(ArtifactError::FeatureNameMismatch {
                    scaler: s.to_vec(),
                    model: m.to_vec(),
                });
            }
        }
        Ok(())
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> ArtifactResult<T> {
    if !path.exists() {
        return Err(ArtifactError::Missing {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_artifact<T: serde::Serialize>(path: &Path, artifact: &T) -> ArtifactResult<()> {
    let json = serde_json::to_vec_pretty(artifact).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn check_version(path: &Path, found: u32) -> ArtifactResult<()> {
    if found > FORMAT_VERSION {
        return Err(ArtifactError::UnsupportedVersion {
            path: path.to_path_buf(),
            found,
            supported: FORMAT_VERSION,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar_core::{LinearRegression, StandardScaler, FEATURE_NAMES};

    fn demo_bundle() -> ArtifactBundle {
        let names: Vec<String> = FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
        let scaler = StandardScaler::new(vec![33.0, 12.0, 3.5], vec![1.0, 1.0, 1.0]).unwrap();
        let model = LinearRegression::new(vec![25.7, 38.6, 61.7], 499.3).unwrap();
        ArtifactBundle {
            dir: PathBuf::new(),
            scaler: ScalerArtifact::from_scaler(&scaler, Some(names.clone())),
            model: ModelArtifact::from_model(&model, Some(names)),
        }
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        demo_bundle().save(dir.path()).unwrap();

        let loaded = ArtifactBundle::load(dir.path()).unwrap();
        assert_eq!(loaded.n_features(), 3);
        assert_eq!(loaded.scaler.kind(), "standard_scaler");
        assert_eq!(loaded.model.kind(), "linear_regression");
    }

    #[test]
    fn test_missing_model_file() {
        let dir = tempfile::tempdir().unwrap();
        demo_bundle().save(dir.path()).unwrap();
        fs::remove_file(dir.path().join(MODEL_FILENAME)).unwrap();

        let err = ArtifactBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Missing { ref path } if path.ends_with(MODEL_FILENAME)));
    }

    #[test]
    fn test_missing_directory() {
        let err = ArtifactBundle::load("/nonexistent/models").unwrap_err();
        assert!(matches!(err, ArtifactError::Missing { .. }));
    }

    #[test]
    fn test_corrupt_scaler_file() {
        let dir = tempfile::tempdir().unwrap();
        demo_bundle().save(dir.path()).unwrap();
        fs::write(dir.path().join(SCALER_FILENAME), b"not json at all").unwrap();

        let err = ArtifactBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { .. }));
    }

    #[test]
    fn test_feature_count_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let mut bundle = demo_bundle();
        // Re-export the scaler as if it were fitted on four features.
        let wide = StandardScaler::identity(4);
        bundle.scaler = ScalerArtifact::from_scaler(&wide, None);
        bundle.save(dir.path()).unwrap();

        let err = ArtifactBundle::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::FeatureCountMismatch { scaler: 4, model: 3 }
        ));
    }

    #[test]
    fn test_feature_name_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let mut bundle = demo_bundle();
        let scrambled = vec![
            "time_on_app".to_string(),
            "avg_session_length".to_string(),
            "length_of_membership".to_string(),
        ];
        let scaler = StandardScaler::identity(3);
        bundle.scaler = ScalerArtifact::from_scaler(&scaler, Some(scrambled));
        bundle.save(dir.path()).unwrap();

        let err = ArtifactBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::FeatureNameMismatch { .. }));
    }

    #[test]
    fn test_future_format_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        demo_bundle().save(dir.path()).unwrap();
        let json = r#"{"kind":"standard_scaler","format_version":99,"mean":[0.0,0.0,0.0],"scale":[1.0,1.0,1.0]}"#;
        fs::write(dir.path().join(SCALER_FILENAME), json).unwrap();

        let err = ArtifactBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::UnsupportedVersion { found: 99, .. }));
    }
}
