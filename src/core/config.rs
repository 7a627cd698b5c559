//! Service configuration loaded from a YAML file.
//!
//! The config file lives under `configs/` in the deployment root and names
//! the two artifact files the service loads at startup:
//!
//! ```yaml
//! inference:
//!   vectorizer_path: models/tfidf_vectorizer.json
//!   classifier_path: models/sentiment_classifier.json
//! server:
//!   host: 0.0.0.0
//!   port: 8000
//! ```
//!
//! Relative artifact paths resolve against the parent of the directory
//! containing the config file, so `models/...` next to `configs/...` works
//! without any absolute paths in the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub inference: InferenceConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Paths to the two serialized artifacts the pipeline is built from.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    pub vectorizer_path: PathBuf,
    pub classifier_path: PathBuf,
}

/// Listener settings for the HTTP server. Optional in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ServiceConfig {
    /// Read and parse the config file at `path`, resolving relative artifact
    /// paths against the parent of the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let base = path
            .parent()
            .and_then(|dir| dir.parent())
            .unwrap_or_else(|| Path::new("."));
        Self::from_yaml(&contents, base)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parse a YAML config string, resolving relative artifact paths
    /// against `base`.
    pub fn from_yaml(contents: &str, base: &Path) -> Result<Self> {
        let mut config: ServiceConfig = serde_yaml::from_str(contents)?;
        config.inference.vectorizer_path = resolve(base, &config.inference.vectorizer_path);
        config.inference.classifier_path = resolve(base, &config.inference.classifier_path);
        Ok(config)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
