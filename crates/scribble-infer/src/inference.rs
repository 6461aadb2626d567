use crate::{DigitClassifier, DigitNetConfig, InferError, ModelSource};
use candle_core::Device;
use scribble_base::log;

/// Entry point that owns the compute device models are loaded onto.
#[derive(Debug, Clone)]
pub struct Inference {
    device: Device,
}

impl Inference {
    pub fn cpu() -> Self {
        log::info!("Inference device: CPU");
        Self {
            device: Device::Cpu,
        }
    }

    #[cfg(feature = "cuda")]
    pub fn cuda(ordinal: usize) -> Result<Self, InferError> {
        let device = Device::new_cuda(ordinal)?;
        if device.is_cuda() {
            log::info!("Inference device: CUDA (ordinal {})", ordinal);
        } else {
            log::warn!(
                "Inference device: requested CUDA ordinal {} but device reports non-CUDA",
                ordinal
            );
        }
        Ok(Self { device })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Load a digit classifier on this device. Weight loading runs on the
    /// blocking pool.
    pub async fn use_digit_classifier(
        &self,
        weights: ModelSource,
        config: DigitNetConfig,
    ) -> Result<DigitClassifier, InferError> {
        DigitClassifier::load(weights, config, self.device.clone()).await
    }
}
