use std::future::Future;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Allows at most one in-flight submission per user action.
///
/// Hold the [`SubmitPermit`] for the duration of the call; while it is alive
/// further submissions are refused. Dropping it, on success or failure,
/// re-opens the gate.
#[derive(Clone)]
pub struct SubmitGate {
    permits: Arc<Semaphore>,
}

/// Proof that the holder owns the gate's single slot.
#[derive(Debug)]
pub struct SubmitPermit {
    _permit: OwnedSemaphorePermit,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self {
            permits: Arc::new(Semaphore::new(1)),
        }
    }

    /// `None` while another submission is in flight.
    pub fn try_submit(&self) -> Option<SubmitPermit> {
        self.permits
            .clone()
            .try_acquire_owned()
            .ok()
            .map(|permit| SubmitPermit { _permit: permit })
    }

    pub fn is_busy(&self) -> bool {
        self.permits.available_permits() == 0
    }

    /// Run `fut` if the gate is open, holding the permit until it resolves.
    pub async fn run<F, T>(&self, fut: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        let _permit = self.try_submit()?;
        Some(fut.await)
    }
}

impl Default for SubmitGate {
    fn default() -> Self {
        Self::new()
    }
}
