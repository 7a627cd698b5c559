//! Artifact loading from disk.
//!
//! This module reads the two serialized artifacts the service depends on,
//! the TF-IDF vectorizer and the linear classifier, and turns them into
//! device-resident model types. Loading happens exactly once per process,
//! during startup, before the first request is served.
//!
//! ## Main Types
//!
//! - [`VectorizerLoader`] - Loads the TF-IDF vectorizer artifact
//! - [`ClassifierLoader`] - Loads the linear classifier artifact
//!
//! Both artifacts are JSON files. The on-disk schema is validated on load;
//! an inconsistent artifact aborts startup with an [`ArtifactError`] rather
//! than failing later mid-request.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use candle_core::Device;
use serde::Deserialize;

use crate::core::ArtifactError;
use crate::models::{LinearClassifier, TfidfVectorizer};

#[derive(Debug, Deserialize)]
struct VectorizerArtifact {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct ClassifierArtifact {
    classes: Vec<String>,
    coefficients: Vec<Vec<f32>>,
    intercepts: Vec<f32>,
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the TF-IDF vectorizer artifact from disk.
#[derive(Debug, Clone)]
pub struct VectorizerLoader {
    path: PathBuf,
}

impl VectorizerLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self, device: &Device) -> Result<TfidfVectorizer, ArtifactError> {
        let artifact: VectorizerArtifact = read_artifact(&self.path)?;
        let vectorizer =
            TfidfVectorizer::new(artifact.vocabulary, artifact.idf, device.clone())?;
        tracing::debug!(
            path = %self.path.display(),
            n_features = vectorizer.n_features(),
            "loaded vectorizer artifact"
        );
        Ok(vectorizer)
    }
}

/// Loads the linear classifier artifact from disk.
#[derive(Debug, Clone)]
pub struct ClassifierLoader {
    path: PathBuf,
}

impl ClassifierLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self, device: &Device) -> Result<LinearClassifier, ArtifactError> {
        let artifact: ClassifierArtifact = read_artifact(&self.path)?;
        let classifier = LinearClassifier::new(
            artifact.classes,
            artifact.coefficients,
            artifact.intercepts,
            device,
        )?;
        tracing::debug!(
            path = %self.path.display(),
            classes = ?classifier.classes(),
            "loaded classifier artifact"
        );
        Ok(classifier)
    }
}
