use crate::{InferError, ProbabilityDistribution};
use scribble_image::FeatureVector;
use std::future::Future;

/// A provider mapping a feature vector to digit probabilities.
///
/// Implementations are treated as black boxes: the session only guarantees
/// that it never calls `classify` before the provider is ready.
pub trait Classifier: Send + Sync + 'static {
    fn classify(
        &self,
        features: &FeatureVector,
    ) -> impl Future<Output = Result<ProbabilityDistribution, InferError>> + Send;
}
