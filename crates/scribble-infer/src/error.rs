use std::fmt;

#[derive(Debug)]
pub enum InferError {
    /// The provider has not finished loading, or its load failed.
    ModelUnavailable(String),
    /// The provider rejected its input or produced malformed output.
    Model(String),
    ModelLoad(String),
    Candle(String),
    Io(String),
    Runtime(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::ModelUnavailable(msg) => write!(f, "model unavailable: {msg}"),
            InferError::Model(msg) => write!(f, "model error: {msg}"),
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::Candle(msg) => write!(f, "candle error: {msg}"),
            InferError::Io(msg) => write!(f, "io error: {msg}"),
            InferError::Runtime(msg) => write!(f, "runtime error: {msg}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<candle_core::Error> for InferError {
    fn from(err: candle_core::Error) -> Self {
        InferError::Candle(err.to_string())
    }
}

impl From<std::io::Error> for InferError {
    fn from(err: std::io::Error) -> Self {
        InferError::Io(err.to_string())
    }
}

impl From<scribble_image::ImageError> for InferError {
    fn from(err: scribble_image::ImageError) -> Self {
        InferError::Model(err.to_string())
    }
}
