//! Method-Channel Boundary
//!
//! The cross-engine message channel is an external collaborator: it owns
//! serialization, transport, and handler invocation. The core only installs
//! and removes a handler on it.

use async_trait::async_trait;
use std::sync::Arc;

use crate::method::{MethodCall, MethodReply};

/// Receiver for named method invocations.
///
/// This is the single entry point into the core. The reply is delivered by
/// resolving the returned future; completion resumes on whichever executor
/// the channel drives the call from, which is therefore the callback-affinity
/// context.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    async fn on_method_call(&self, call: MethodCall) -> MethodReply;
}

/// Host-owned messaging endpoint the core attaches to.
///
/// Implementations are provided by the hosting integration layer. The core
/// holds at most one endpoint at a time; `set_handler(None)` releases it.
pub trait MethodChannel: Send + Sync {
    fn set_handler(&self, handler: Option<Arc<dyn MethodHandler>>);
}

/// Capabilities of the hosting bridge, probed once by the host and passed in
/// at attach time.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostCapabilities {
    /// The host invokes method handlers from a background task queue of its
    /// own, so resolution may run inline. Without it, the handler is driven
    /// from a latency-sensitive context and resolution is offloaded to the
    /// dedicated worker.
    pub background_task_queue: bool,
}
