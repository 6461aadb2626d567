//! Digit pad session: canvas, model slot, feedback staging and the
//! presentation model for predictions.

pub mod config;
pub mod error;
pub mod feedback;
pub mod label;
pub mod prediction;
pub mod session;

pub use config::SessionConfig;
pub use error::SessionError;
pub use feedback::{FeedbackCollector, LabeledSample};
pub use label::Label;
pub use prediction::{Bar, Column, Prediction};
pub use session::{PendingClassification, Session};
