use crate::{DIGIT_CLASSES, InferError};
use scribble_image::FEATURE_LEN;
use serde::Deserialize;
use std::path::Path;

/// Shape of the dense digit network.
///
/// Weights are named `layers.{i}.weight` (`[out, in]`) and `layers.{i}.bias`
/// (`[out]`), input width 784, output width 10.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DigitNetConfig {
    #[serde(default = "default_hidden")]
    pub hidden: Vec<usize>,
}

fn default_hidden() -> Vec<usize> {
    vec![128]
}

impl Default for DigitNetConfig {
    fn default() -> Self {
        Self {
            hidden: default_hidden(),
        }
    }
}

impl DigitNetConfig {
    pub fn with_hidden(mut self, hidden: Vec<usize>) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn from_json(text: &str) -> Result<Self, InferError> {
        serde_json::from_str(text)
            .map_err(|e| InferError::ModelLoad(format!("invalid model config: {e}")))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InferError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// `(in, out)` width of every layer, input to output.
    pub fn layer_dims(&self) -> Vec<(usize, usize)> {
        let widths: Vec<usize> = std::iter::once(FEATURE_LEN)
            .chain(self.hidden.iter().copied())
            .chain(std::iter::once(DIGIT_CLASSES))
            .collect();
        widths.windows(2).map(|w| (w[0], w[1])).collect()
    }
}
