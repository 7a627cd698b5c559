//! Sentiment analysis pipeline for classifying movie reviews.
//!
//! This module maps a raw review string to a sentiment verdict (`positive`
//! or `negative`) with per-class probabilities, using a TF-IDF vectorizer
//! and a linear classifier loaded from disk at startup.
//!
//! ## Main Types
//!
//! - [`SentimentAnalysisPipeline`] - High-level interface for sentiment classification
//! - [`SentimentAnalysisPipelineBuilder`] - Builder pattern for pipeline construction
//! - [`Vectorizer`] / [`Classifier`] - Traits for the two loaded artifacts
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use imdb_sentiment::core::config::ServiceConfig;
//! use imdb_sentiment::pipelines::sentiment_analysis::*;
//!
//! let config = ServiceConfig::from_file("configs/config.yaml")?;
//! let pipeline = SentimentAnalysisPipelineBuilder::new(config.inference)
//!     .cpu()
//!     .build()?;
//!
//! let result = pipeline.predict("I loved this movie!")?;
//! println!("{} ({:.4})", result.sentiment, result.positive_proba);
//! # anyhow::Ok(())
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::SentimentAnalysisPipelineBuilder;
pub use model::{Classifier, Vectorizer};
pub use pipeline::{SentimentAnalysisPipeline, SentimentResult};

pub use anyhow::Result;
