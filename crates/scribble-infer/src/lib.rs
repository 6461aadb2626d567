pub mod classifier;
pub mod digit;
pub mod distribution;
pub mod error;
pub mod inference;
pub mod modelsource;
pub mod slot;

pub use classifier::Classifier;
pub use digit::{DigitClassifier, DigitNetConfig};
pub use distribution::{DIGIT_CLASSES, ProbabilityDistribution};
pub use error::InferError;
pub use inference::Inference;
pub use modelsource::ModelSource;
pub use slot::ModelSlot;
