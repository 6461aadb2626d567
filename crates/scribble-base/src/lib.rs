pub mod epoch;
pub mod logging;
pub mod tensor;

pub use epoch::{Epoch, Stamped};
pub use logging::{init_stdout_logger, MemoryLogger, StdoutLogger};
pub use tensor::{Tensor, TensorError};

// Re-export log crate so downstream crates can use scribble_base::log::*
pub use log;
