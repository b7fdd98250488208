//! Execution Strategy Contract
//!
//! Decides where resolver work runs so that slow OS queries (notably
//! multi-volume enumeration) never block a latency-sensitive host context.
//! A strategy is selected exactly once at attach time and never re-selected.

use async_trait::async_trait;

use crate::error::Result;
use crate::method::PathValue;

/// One unit of resolver work: a blocking closure producing a typed result.
/// Jobs are self-contained and `Send` so a strategy may move them to another
/// thread.
pub type ResolveJob = Box<dyn FnOnce() -> Result<PathValue> + Send + 'static>;

/// Execution context chooser for resolver jobs.
///
/// Per request the lifecycle is submitted → executing → completed (success or
/// error); there is no cancellation, timeout, or retry, and the terminal
/// result is delivered exactly once by resolving the returned future.
#[async_trait]
pub trait ExecutionStrategy: Send + Sync {
    async fn run(&self, job: ResolveJob) -> Result<PathValue>;
}
