use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Monotonic request counter shared between a session and its in-flight work.
///
/// Every new request calls `advance()` and carries the returned value. When
/// the work finishes, `is_current()` tells whether a newer request was issued
/// in the meantime, in which case the result is stale and must be dropped.
#[derive(Clone, Debug)]
pub struct Epoch {
    value: Arc<AtomicU64>,
}

impl Epoch {
    pub fn new() -> Self {
        Self {
            value: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }

    /// Start a new epoch and return its value.
    pub fn advance(&self) -> u64 {
        self.value.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        epoch == self.current()
    }
}

impl Default for Epoch {
    fn default() -> Self {
        Self::new()
    }
}

/// A value stamped with the epoch of the request that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamped<T> {
    pub epoch: u64,
    pub inner: T,
}

impl<T> Stamped<T> {
    pub fn new(epoch: u64, inner: T) -> Self {
        Self { epoch, inner }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Stamped<U> {
        Stamped {
            epoch: self.epoch,
            inner: f(self.inner),
        }
    }
}
