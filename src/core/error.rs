use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the serialized model artifacts.
///
/// All of these are startup-class failures: the process refuses to serve
/// rather than run against an incomplete or incompatible artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The artifact file could not be read from disk.
    #[error("failed to read artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact file could not be deserialized.
    #[error("failed to parse artifact {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The artifact deserialized but its contents are inconsistent
    /// (mismatched dimensions, out-of-range indices, etc.).
    #[error("invalid artifact: {0}")]
    Invalid(String),

    /// The classifier artifact does not report a class label this service
    /// requires. The loaded model is incompatible with the service.
    #[error("classifier does not report class {0:?}")]
    MissingClass(String),
}
