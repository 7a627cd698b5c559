use anyhow::{Error as E, Result};
use candle_core::{Device, Tensor, D};
use candle_nn::ops::softmax;

use crate::core::ArtifactError;

/// Multinomial linear classifier over TF-IDF features.
///
/// Holds the fitted weight matrix `[n_classes, n_features]`, the bias vector
/// `[n_classes]`, and the ordered class labels reported by the artifact. The
/// label order is the artifact's own; callers that need a specific class must
/// locate it by value in [`LinearClassifier::classes`], never by position.
#[derive(Debug)]
pub struct LinearClassifier {
    weight: Tensor,
    bias: Tensor,
    classes: Vec<String>,
    n_features: usize,
}

impl LinearClassifier {
    pub fn new(
        classes: Vec<String>,
        coefficients: Vec<Vec<f32>>,
        intercepts: Vec<f32>,
        device: &Device,
    ) -> Result<Self, ArtifactError> {
        if classes.is_empty() {
            return Err(ArtifactError::Invalid(
                "classifier reports no classes".to_string(),
            ));
        }
        if coefficients.len() != classes.len() {
            return Err(ArtifactError::Invalid(format!(
                "{} coefficient rows for {} classes",
                coefficients.len(),
                classes.len()
            )));
        }
        if intercepts.len() != classes.len() {
            return Err(ArtifactError::Invalid(format!(
                "{} intercepts for {} classes",
                intercepts.len(),
                classes.len()
            )));
        }
        let n_features = coefficients[0].len();
        if coefficients.iter().any(|row| row.len() != n_features) {
            return Err(ArtifactError::Invalid(
                "coefficient rows have inconsistent lengths".to_string(),
            ));
        }

        let flat: Vec<f32> = coefficients.into_iter().flatten().collect();
        let weight = Tensor::from_vec(flat, (classes.len(), n_features), device)
            .map_err(|e| ArtifactError::Invalid(format!("failed to build weight tensor: {e}")))?;
        let bias = Tensor::from_vec(intercepts, classes.len(), device)
            .map_err(|e| ArtifactError::Invalid(format!("failed to build bias tensor: {e}")))?;

        Ok(Self {
            weight,
            bias,
            classes,
            n_features,
        })
    }

    /// Ordered class labels, matching the column order of [`predict_proba`].
    ///
    /// [`predict_proba`]: LinearClassifier::predict_proba
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of feature columns the classifier expects.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Predicted label for each row of `features`.
    pub fn predict(&self, features: &Tensor) -> Result<Vec<String>> {
        let logits = self.logits(features)?;
        let indices = logits.argmax(D::Minus1)?.to_vec1::<u32>()?;
        indices
            .into_iter()
            .map(|index| {
                self.classes
                    .get(index as usize)
                    .cloned()
                    .ok_or_else(|| E::msg(format!("argmax index {index} out of class range")))
            })
            .collect()
    }

    /// Probability distribution over [`classes`] for each row of `features`.
    ///
    /// [`classes`]: LinearClassifier::classes
    pub fn predict_proba(&self, features: &Tensor) -> Result<Vec<Vec<f32>>> {
        let logits = self.logits(features)?;
        let probabilities = softmax(&logits, D::Minus1)?;
        Ok(probabilities.to_vec2::<f32>()?)
    }

    fn logits(&self, features: &Tensor) -> Result<Tensor> {
        Ok(features
            .matmul(&self.weight.t()?)?
            .broadcast_add(&self.bias)?)
    }
}
