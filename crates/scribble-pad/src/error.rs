use scribble_image::ImageError;
use scribble_infer::InferError;
use std::fmt;

pub const INVALID_LABEL_NOTICE: &str = "Please enter a digit between 0 and 9.";
pub const MODEL_LOADING_NOTICE: &str = "Model is still loading, please wait a moment.";

#[derive(Debug)]
pub enum SessionError {
    InvalidLabel(String),
    Image(ImageError),
    Infer(InferError),
}

impl SessionError {
    /// Blocking message for the user, if this error is one the user can act on.
    ///
    /// Anything else only aborts the current operation.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SessionError::InvalidLabel(_) => Some(INVALID_LABEL_NOTICE),
            SessionError::Infer(InferError::ModelUnavailable(_)) => Some(MODEL_LOADING_NOTICE),
            _ => None,
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidLabel(msg) => write!(f, "invalid label: {msg}"),
            SessionError::Image(err) => write!(f, "image error: {err}"),
            SessionError::Infer(err) => write!(f, "inference error: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::InvalidLabel(_) => None,
            SessionError::Image(err) => Some(err),
            SessionError::Infer(err) => Some(err),
        }
    }
}

impl From<ImageError> for SessionError {
    fn from(err: ImageError) -> Self {
        SessionError::Image(err)
    }
}

impl From<InferError> for SessionError {
    fn from(err: InferError) -> Self {
        SessionError::Infer(err)
    }
}
