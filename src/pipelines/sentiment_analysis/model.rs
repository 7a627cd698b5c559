use candle_core::Tensor;

use crate::models::{LinearClassifier, TfidfVectorizer};

/// Trait for the loaded vectorizer artifact.
///
/// A deterministic pure function from a batch of raw strings to a
/// `[batch, n_features]` feature tensor.
pub trait Vectorizer {
    fn transform(&self, texts: &[&str]) -> anyhow::Result<Tensor>;
}

/// Trait for the loaded classifier artifact.
///
/// `predict` is the classifier's own label selection; the pipeline trusts it
/// and never re-derives an argmax. `predict_proba` rows are ordered by
/// `classes()`, whatever order the artifact reports.
pub trait Classifier {
    fn predict(&self, features: &Tensor) -> anyhow::Result<Vec<String>>;

    fn predict_proba(&self, features: &Tensor) -> anyhow::Result<Vec<Vec<f32>>>;

    fn classes(&self) -> &[String];
}

impl Vectorizer for TfidfVectorizer {
    fn transform(&self, texts: &[&str]) -> anyhow::Result<Tensor> {
        TfidfVectorizer::transform(self, texts)
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, features: &Tensor) -> anyhow::Result<Vec<String>> {
        LinearClassifier::predict(self, features)
    }

    fn predict_proba(&self, features: &Tensor) -> anyhow::Result<Vec<Vec<f32>>> {
        LinearClassifier::predict_proba(self, features)
    }

    fn classes(&self) -> &[String] {
        LinearClassifier::classes(self)
    }
}
