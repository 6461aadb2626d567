mod classifier;
mod config;
mod model;

pub use classifier::DigitClassifier;
pub use config::DigitNetConfig;
