pub mod core;
pub mod loaders;
pub mod models;
pub mod pipelines;
pub mod server;

// Re-export the types a typical embedder needs without digging through the
// module tree.
pub use crate::core::config::{InferenceConfig, ServerConfig, ServiceConfig};
pub use crate::pipelines::sentiment_analysis::{
    SentimentAnalysisPipeline, SentimentAnalysisPipelineBuilder, SentimentResult,
};
