use std::collections::HashMap;

use anyhow::Result;
use candle_core::{Device, Tensor};

use crate::core::ArtifactError;

/// Term-frequency / inverse-document-frequency vectorizer.
///
/// Maps a batch of raw strings to a dense `[batch, n_features]` F32 tensor.
/// The vocabulary and per-term idf weights come from the serialized artifact;
/// this type only replays the fitted transform, it never refits.
///
/// Tokenization matches the artifact's training-time convention: lowercase,
/// word tokens are maximal alphanumeric runs of length >= 2, everything else
/// is a separator. Terms outside the vocabulary are ignored. Each row is
/// L2-normalized; an all-zero row (no known terms) stays zero.
#[derive(Debug)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    device: Device,
}

impl TfidfVectorizer {
    pub fn new(
        vocabulary: HashMap<String, usize>,
        idf: Vec<f32>,
        device: Device,
    ) -> Result<Self, ArtifactError> {
        if vocabulary.len() != idf.len() {
            return Err(ArtifactError::Invalid(format!(
                "vocabulary has {} terms but idf has {} weights",
                vocabulary.len(),
                idf.len()
            )));
        }
        for (term, &index) in &vocabulary {
            if index >= idf.len() {
                return Err(ArtifactError::Invalid(format!(
                    "term {term:?} maps to column {index}, out of range for {} features",
                    idf.len()
                )));
            }
        }
        Ok(Self {
            vocabulary,
            idf,
            device,
        })
    }

    /// Number of feature columns produced per input text.
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Transform a batch of texts into a `[batch, n_features]` tensor.
    pub fn transform(&self, texts: &[&str]) -> Result<Tensor> {
        let n_features = self.n_features();
        let mut dense = vec![0f32; texts.len() * n_features];

        for (row, text) in texts.iter().enumerate() {
            let offset = row * n_features;
            for token in self.tokenize(text) {
                if let Some(&index) = self.vocabulary.get(token.as_str()) {
                    dense[offset + index] += self.idf[index];
                }
            }

            let row_slice = &mut dense[offset..offset + n_features];
            let norm = row_slice.iter().map(|v| v * v).sum::<f32>().sqrt();
            if norm > 0.0 {
                for value in row_slice.iter_mut() {
                    *value /= norm;
                }
            }
        }

        Ok(Tensor::from_vec(
            dense,
            (texts.len(), n_features),
            &self.device,
        )?)
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| token.chars().count() >= 2)
            .map(str::to_string)
            .collect()
    }
}
