//! Write Gateway
//!
//! The asynchronous write step of a submission. There is no real backend:
//! [`SimulatedGateway`] sleeps for a fixed latency and then succeeds or fails.
//!
//! ```text
//! SubmitController::submit
//!       │  flag set
//!       ▼
//! WriteGateway::write(op).await   ← the only suspension point
//!       │
//!       ▼
//! apply mutation, flag cleared
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::domain::RecordId;
use crate::error::{Error, Result};

/// The write a submission performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    /// Append a new record
    Create,
    /// Replace the fields of an existing record
    Update(RecordId),
}

/// Backend seam for the submission write step
pub trait WriteGateway: Send + Sync + 'static {
    /// Perform the write. Resolves once the backend acknowledges it.
    fn write(&self, op: WriteOp) -> BoxFuture<'static, Result<()>>;
}

/// Gateway with a fixed delay and a switchable failure mode
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    latency: Duration,
    failing: Arc<AtomicBool>,
}

impl SimulatedGateway {
    /// Create a gateway that always succeeds after `latency`
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start in failure mode
    pub fn failing(mut self, failing: bool) -> Self {
        self.failing = Arc::new(AtomicBool::new(failing));
        self
    }

    /// Toggle failure mode; clones share the switch
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl WriteGateway for SimulatedGateway {
    fn write(&self, op: WriteOp) -> BoxFuture<'static, Result<()>> {
        let latency = self.latency;
        let failing = self.failing.load(Ordering::SeqCst);

        async move {
            tracing::debug!(?op, latency_ms = latency.as_millis() as u64, "Simulated write started");
            tokio::time::sleep(latency).await;

            if failing {
                tracing::warn!(?op, "Simulated write failed");
                return Err(Error::WriteFailed {
                    message: "simulated network failure".to_string(),
                });
            }
            Ok(())
        }
        .boxed()
    }
}
