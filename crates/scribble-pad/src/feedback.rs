use crate::{Label, SessionError};
use scribble_base::log;
use scribble_image::FeatureVector;

/// A captured canvas with the digit the user says it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSample {
    pub x: FeatureVector,
    pub y: Label,
}

/// Staging buffer for corrections. Samples live as long as the session; no
/// dedup, no cap, nothing is written anywhere.
#[derive(Debug, Default)]
pub struct FeedbackCollector {
    samples: Vec<LabeledSample>,
}

impl FeedbackCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample. An out-of-range label leaves the buffer untouched.
    pub fn add_sample(
        &mut self,
        features: FeatureVector,
        label: i64,
    ) -> Result<&LabeledSample, SessionError> {
        let label = Label::new(label)?;
        Ok(self.push(features, label))
    }

    pub fn push(&mut self, features: FeatureVector, label: Label) -> &LabeledSample {
        self.samples.push(LabeledSample {
            x: features,
            y: label,
        });
        log::info!("Added feedback sample: {}", self.samples.len());
        &self.samples[self.samples.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[LabeledSample] {
        &self.samples
    }

    /// Hand every staged sample to the caller, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<LabeledSample> {
        std::mem::take(&mut self.samples)
    }
}
