//! Execution Strategy Implementations
//!
//! Exactly one strategy is active per attachment, chosen from the host's
//! capabilities: hosts that already invoke handlers on a background task
//! queue resolve inline, all others offload to the dedicated worker and
//! rejoin the caller's executor.

use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::{BridgeError, ExecutionStrategy, PathValue, ResolveJob};
use tokio::sync::oneshot;

use crate::worker::ResolverWorker;

/// Name of the dedicated worker thread, for diagnostics.
pub const WORKER_THREAD_NAME: &str = "path-provider-background";

/// Inline-on-worker strategy.
///
/// The handler is already being driven from a worker context, so the job
/// runs synchronously right here.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStrategy;

#[async_trait]
impl ExecutionStrategy for InlineStrategy {
    async fn run(&self, job: ResolveJob) -> Result<PathValue> {
        job()
    }
}

/// Offload-and-rejoin strategy.
///
/// Jobs execute on the single named worker thread in strict submission
/// order; the result rejoins through a oneshot, so the future resumes on the
/// caller's executor — the callback-affinity context.
pub struct OffloadStrategy {
    worker: ResolverWorker,
}

impl OffloadStrategy {
    pub fn new() -> Result<Self> {
        Self::with_thread_name(WORKER_THREAD_NAME)
    }

    /// Spawn the worker under a custom thread name.
    pub fn with_thread_name(name: &str) -> Result<Self> {
        Ok(Self {
            worker: ResolverWorker::spawn(name)?,
        })
    }
}

#[async_trait]
impl ExecutionStrategy for OffloadStrategy {
    async fn run(&self, job: ResolveJob) -> Result<PathValue> {
        let (reply, completion) = oneshot::channel();
        let submitted = self.worker.submit(Box::new(move || {
            // A dropped receiver means the caller went away; nothing to do.
            let _ = reply.send(job());
        }));
        if !submitted {
            return Err(BridgeError::WorkerUnavailable);
        }
        completion.await.map_err(|_| BridgeError::WorkerUnavailable)?
    }
}
