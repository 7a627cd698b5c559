pub mod config;
pub mod error;

pub use config::{InferenceConfig, ServerConfig, ServiceConfig};
pub use error::ArtifactError;
