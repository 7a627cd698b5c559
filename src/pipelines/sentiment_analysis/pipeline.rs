use anyhow::{Error as E, Result};
use serde::Serialize;

use super::model::{Classifier, Vectorizer};
use crate::core::ArtifactError;

pub const POSITIVE_LABEL: &str = "positive";
pub const NEGATIVE_LABEL: &str = "negative";

/// Sentiment verdict for a single review.
///
/// `positive_proba` and `negative_proba` are each rounded to four decimal
/// places, half away from zero, independently of one another. The pair is
/// not renormalized after rounding, so the two fields may not sum to
/// exactly 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    pub sentiment: String,
    pub positive_proba: f32,
    pub negative_proba: f32,
}

/// Pipeline mapping one review string to one [`SentimentResult`].
///
/// Holds the two artifacts loaded at startup, read-only for the process
/// lifetime, plus the positions of the `positive` and `negative` labels in
/// the classifier's reported class order. Safe to call concurrently: every
/// invocation is a pure single pass with no shared-state mutation.
#[derive(Debug)]
pub struct SentimentAnalysisPipeline<V: Vectorizer, C: Classifier> {
    pub(crate) vectorizer: V,
    pub(crate) classifier: C,
    pub(crate) positive_index: usize,
    pub(crate) negative_index: usize,
}

impl<V: Vectorizer, C: Classifier> SentimentAnalysisPipeline<V, C> {
    /// Pair a vectorizer with a classifier, resolving the positions of the
    /// `positive` and `negative` labels in the classifier's class order.
    ///
    /// The labels are located by value, not by position: the artifact may
    /// report its classes in any order. A classifier that does not report
    /// both labels is incompatible with this service and is rejected here,
    /// before any request is served.
    pub fn new(vectorizer: V, classifier: C) -> Result<Self> {
        let positive_index = class_index(&classifier, POSITIVE_LABEL)?;
        let negative_index = class_index(&classifier, NEGATIVE_LABEL)?;
        Ok(Self {
            vectorizer,
            classifier,
            positive_index,
            negative_index,
        })
    }

    /// Predict the sentiment of a single review.
    ///
    /// Any string is valid input, including the empty string. Errors from
    /// the vectorizer or classifier propagate to the caller untouched.
    pub fn predict(&self, review: &str) -> Result<SentimentResult> {
        // The vectorizer keeps its batch interface; a request is a batch of one.
        let texts = [review];
        let features = self.vectorizer.transform(&texts)?;

        let labels = self.classifier.predict(&features)?;
        let sentiment = labels
            .into_iter()
            .next()
            .ok_or_else(|| E::msg("classifier returned no label for a one-row batch"))?;

        let distributions = self.classifier.predict_proba(&features)?;
        let row = distributions
            .into_iter()
            .next()
            .ok_or_else(|| E::msg("classifier returned no probabilities for a one-row batch"))?;
        let positive_proba = *row.get(self.positive_index).ok_or_else(|| {
            E::msg("probability row is shorter than the classifier's class order")
        })?;
        let negative_proba = *row.get(self.negative_index).ok_or_else(|| {
            E::msg("probability row is shorter than the classifier's class order")
        })?;

        Ok(SentimentResult {
            sentiment,
            positive_proba: round_proba(positive_proba),
            negative_proba: round_proba(negative_proba),
        })
    }
}

fn class_index<C: Classifier>(classifier: &C, label: &str) -> Result<usize> {
    classifier
        .classes()
        .iter()
        .position(|class| class == label)
        .ok_or_else(|| ArtifactError::MissingClass(label.to_string()).into())
}

/// Round to four decimal places, half away from zero.
fn round_proba(probability: f32) -> f32 {
    ((probability as f64 * 10_000.0).round() / 10_000.0) as f32
}
