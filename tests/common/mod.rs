// Shared fixtures: writes a small pair of artifact files to a temp dir and
// builds a pipeline from them through the same loaders the binary uses.

use std::path::PathBuf;

use imdb_sentiment::server::ServicePipeline;
use imdb_sentiment::{InferenceConfig, SentimentAnalysisPipelineBuilder};
use tempfile::TempDir;

const VECTORIZER: &str = r#"{
  "vocabulary": {
    "wonderful": 0,
    "loved": 1,
    "terrible": 2,
    "waste": 3,
    "movie": 4,
    "film": 5
  },
  "idf": [2.5, 2.5, 2.5, 2.5, 1.2, 1.2]
}"#;

const CLASSIFIER: &str = r#"{
  "classes": ["negative", "positive"],
  "coefficients": [
    [-2.0, -2.0, 2.0, 2.0, 0.0, 0.0],
    [2.0, 2.0, -2.0, -2.0, 0.0, 0.0]
  ],
  "intercepts": [0.0, 0.0]
}"#;

pub struct Fixture {
    // Held so the artifact files outlive the pipeline built from them.
    #[allow(dead_code)]
    pub dir: TempDir,
    pub config: InferenceConfig,
}

pub fn write_artifacts() -> Fixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    let vectorizer_path = dir.path().join("tfidf_vectorizer.json");
    let classifier_path = dir.path().join("sentiment_classifier.json");
    std::fs::write(&vectorizer_path, VECTORIZER).expect("write vectorizer artifact");
    std::fs::write(&classifier_path, CLASSIFIER).expect("write classifier artifact");

    Fixture {
        dir,
        config: InferenceConfig {
            vectorizer_path,
            classifier_path,
        },
    }
}

pub fn build_pipeline(fixture: &Fixture) -> ServicePipeline {
    SentimentAnalysisPipelineBuilder::new(fixture.config.clone())
        .cpu()
        .build()
        .expect("build pipeline from fixture artifacts")
}

#[allow(dead_code)]
pub fn classifier_with_classes(classes: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let vectorizer_path = dir.path().join("tfidf_vectorizer.json");
    let classifier_path = dir.path().join("sentiment_classifier.json");
    std::fs::write(&vectorizer_path, VECTORIZER).expect("write vectorizer artifact");
    let classifier = format!(
        r#"{{
  "classes": {classes},
  "coefficients": [
    [-2.0, -2.0, 2.0, 2.0, 0.0, 0.0],
    [2.0, 2.0, -2.0, -2.0, 0.0, 0.0]
  ],
  "intercepts": [0.0, 0.0]
}}"#
    );
    std::fs::write(&classifier_path, classifier).expect("write classifier artifact");
    (dir, vectorizer_path, classifier_path)
}
