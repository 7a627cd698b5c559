use anyhow::Result;

use super::pipeline::SentimentAnalysisPipeline;
use crate::core::config::InferenceConfig;
use crate::core::ArtifactError;
use crate::loaders::{ClassifierLoader, VectorizerLoader};
use crate::models::{LinearClassifier, TfidfVectorizer};
use crate::pipelines::utils::DeviceRequest;

/// Builder for [`SentimentAnalysisPipeline`].
///
/// Loads both artifacts from the paths in the inference config, cross-checks
/// their feature dimensions, and resolves the label contract. Building is
/// the one-time startup step; the resulting pipeline is immutable.
pub struct SentimentAnalysisPipelineBuilder {
    config: InferenceConfig,
    device_request: DeviceRequest,
}

impl SentimentAnalysisPipelineBuilder {
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            config,
            device_request: DeviceRequest::Default,
        }
    }

    pub fn cpu(mut self) -> Self {
        self.device_request = DeviceRequest::Cpu;
        self
    }

    pub fn cuda_device(mut self, index: usize) -> Self {
        self.device_request = DeviceRequest::Cuda(index);
        self
    }

    pub fn device(mut self, device: candle_core::Device) -> Self {
        self.device_request = DeviceRequest::Explicit(device);
        self
    }

    pub fn build(self) -> Result<SentimentAnalysisPipeline<TfidfVectorizer, LinearClassifier>> {
        let device = self.device_request.resolve()?;

        let vectorizer = VectorizerLoader::new(&self.config.vectorizer_path).load(&device)?;
        let classifier = ClassifierLoader::new(&self.config.classifier_path).load(&device)?;

        if vectorizer.n_features() != classifier.n_features() {
            return Err(ArtifactError::Invalid(format!(
                "vectorizer produces {} features but classifier expects {}",
                vectorizer.n_features(),
                classifier.n_features()
            ))
            .into());
        }

        SentimentAnalysisPipeline::new(vectorizer, classifier)
    }
}
