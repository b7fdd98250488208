//! Attach/Detach Lifecycle
//!
//! The hosting integration layer calls [`PathProviderBridge::attach`] when
//! the engine connects and drops the returned handle when it detaches. The
//! execution strategy is selected here, once, from the host's capabilities;
//! there is no re-selection at runtime.

use bridge_traits::error::Result;
use bridge_traits::{ExecutionStrategy, HostCapabilities, MethodChannel, PathResolver};
use std::sync::Arc;
use tracing::debug;

use crate::dispatcher::PathProviderDispatcher;
use crate::strategy::{InlineStrategy, OffloadStrategy};

/// Live attachment of the provider core to one messaging endpoint.
///
/// Attaching installs the method handler; dropping the handle (or calling
/// [`detach`](Self::detach)) removes it and releases the endpoint reference,
/// tearing down the background worker with it.
pub struct PathProviderBridge {
    channel: Arc<dyn MethodChannel>,
}

impl PathProviderBridge {
    pub fn attach(
        channel: Arc<dyn MethodChannel>,
        resolver: Arc<dyn PathResolver>,
        capabilities: HostCapabilities,
    ) -> Result<Self> {
        let strategy: Arc<dyn ExecutionStrategy> = if capabilities.background_task_queue {
            debug!("host provides a background task queue; resolving inline");
            Arc::new(InlineStrategy)
        } else {
            debug!("no host task queue; offloading resolution to the dedicated worker");
            Arc::new(OffloadStrategy::new()?)
        };

        let dispatcher = Arc::new(PathProviderDispatcher::new(resolver, strategy));
        channel.set_handler(Some(dispatcher));
        Ok(Self { channel })
    }

    /// Remove the handler and release the endpoint.
    pub fn detach(self) {
        // Teardown lives in Drop so an un-detached handle cleans up too.
    }
}

impl Drop for PathProviderBridge {
    fn drop(&mut self) {
        self.channel.set_handler(None);
    }
}
