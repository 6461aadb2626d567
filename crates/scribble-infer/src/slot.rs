use crate::InferError;
use scribble_base::log;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

enum SlotState<C> {
    Loading,
    Ready(Arc<C>),
    Failed(String),
}

/// Holds a provider that becomes available asynchronously.
///
/// The slot starts out loading. `spawn_load` drives a one-shot load future on
/// the runtime and returns its handle as the completion and failure channel.
/// There is no retry: a failed load leaves the slot permanently unavailable.
pub struct ModelSlot<C> {
    state: Arc<Mutex<SlotState<C>>>,
}

impl<C> Clone for ModelSlot<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<C: Send + Sync + 'static> ModelSlot<C> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SlotState::Loading)),
        }
    }

    pub fn ready(provider: C) -> Self {
        let slot = Self::new();
        slot.install(provider);
        slot
    }

    pub fn install(&self, provider: C) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) =
            SlotState::Ready(Arc::new(provider));
    }

    /// Run `load` on the tokio runtime and store its result in the slot.
    pub fn spawn_load<F>(&self, load: F) -> JoinHandle<Result<(), InferError>>
    where
        F: Future<Output = Result<C, InferError>> + Send + 'static,
    {
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let result = load.await;
            let mut state = state.lock().unwrap_or_else(|e| e.into_inner());
            match result {
                Ok(provider) => {
                    log::info!("model loaded");
                    *state = SlotState::Ready(Arc::new(provider));
                    Ok(())
                }
                Err(err) => {
                    log::error!("model load failed: {err}");
                    *state = SlotState::Failed(err.to_string());
                    Err(err)
                }
            }
        })
    }

    pub fn is_ready(&self) -> bool {
        matches!(
            *self.state.lock().unwrap_or_else(|e| e.into_inner()),
            SlotState::Ready(_)
        )
    }

    /// The loaded provider, or `ModelUnavailable` while loading or after a
    /// failed load.
    pub fn get(&self) -> Result<Arc<C>, InferError> {
        match &*self.state.lock().unwrap_or_else(|e| e.into_inner()) {
            SlotState::Ready(provider) => Ok(Arc::clone(provider)),
            SlotState::Loading => Err(InferError::ModelUnavailable(
                "model is still loading".to_string(),
            )),
            SlotState::Failed(reason) => Err(InferError::ModelUnavailable(format!(
                "model failed to load: {reason}"
            ))),
        }
    }
}

impl<C: Send + Sync + 'static> Default for ModelSlot<C> {
    fn default() -> Self {
        Self::new()
    }
}
