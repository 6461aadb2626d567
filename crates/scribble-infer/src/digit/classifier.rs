use super::DigitNetConfig;
use super::model::DigitNet;
use crate::{Classifier, InferError, ModelSource, ProbabilityDistribution};
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use scribble_base::log;
use scribble_image::{FEATURE_LEN, FeatureVector};
use std::sync::Arc;

/// Candle-backed digit classifier loaded from safetensors weights.
#[derive(Debug, Clone)]
pub struct DigitClassifier {
    model: Arc<DigitNet>,
    device: Device,
}

impl DigitClassifier {
    pub fn from_var_builder(
        vb: VarBuilder,
        config: &DigitNetConfig,
        device: Device,
    ) -> Result<Self, InferError> {
        let model = DigitNet::load(vb, config)
            .map_err(|e| InferError::ModelLoad(format!("digit network: {e}")))?;
        Ok(Self {
            model: Arc::new(model),
            device,
        })
    }

    pub fn from_source(
        source: ModelSource,
        config: &DigitNetConfig,
        device: Device,
    ) -> Result<Self, InferError> {
        let described = source.describe();
        let vb = match source {
            ModelSource::File(path) => unsafe {
                VarBuilder::from_mmaped_safetensors(&[path], DType::F32, &device)
            },
            ModelSource::Memory(bytes) => {
                VarBuilder::from_buffered_safetensors(bytes, DType::F32, &device)
            }
        }
        .map_err(|e| InferError::ModelLoad(format!("{described}: {e}")))?;

        let classifier = Self::from_var_builder(vb, config, device)?;
        log::info!(
            "digit classifier loaded from {described} (hidden layers {:?})",
            config.hidden
        );
        Ok(classifier)
    }

    /// Load weights on tokio's blocking thread pool.
    pub async fn load(
        source: ModelSource,
        config: DigitNetConfig,
        device: Device,
    ) -> Result<Self, InferError> {
        tokio::task::spawn_blocking(move || Self::from_source(source, &config, device))
            .await
            .map_err(|e| InferError::Runtime(format!("model load task failed: {e}")))?
    }
}

impl Classifier for DigitClassifier {
    async fn classify(
        &self,
        features: &FeatureVector,
    ) -> Result<ProbabilityDistribution, InferError> {
        if features.len() != FEATURE_LEN {
            return Err(InferError::Model(format!(
                "expected {FEATURE_LEN} features, got {}",
                features.len()
            )));
        }

        let input = Tensor::from_vec(features.to_f32(), (1, FEATURE_LEN), &self.device)?;
        let model = Arc::clone(&self.model);

        let probs = tokio::task::spawn_blocking(move || {
            use candle_core::Module;
            model.forward(&input)?.squeeze(0)?.to_vec1::<f32>()
        })
        .await
        .map_err(|e| InferError::Runtime(format!("inference task failed: {e}")))??;

        ProbabilityDistribution::new(&probs)
    }
}
