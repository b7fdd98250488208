//! # Path Provider Core
//!
//! The platform-neutral half of the path-provider bridge: a request
//! dispatcher, the two execution strategies, the dedicated background
//! worker, and the attach/detach lifecycle.
//!
//! ## Data Flow
//!
//! ```text
//! channel → PathProviderDispatcher → ExecutionStrategy → PathResolver → reply
//! ```
//!
//! The hosting integration layer attaches the core to its messaging endpoint
//! once, passing in a platform [`PathResolver`](bridge_traits::PathResolver)
//! (desktop hosts use `bridge-desktop`) and its
//! [`HostCapabilities`](bridge_traits::HostCapabilities):
//!
//! ```ignore
//! use core_provider::PathProviderBridge;
//! use bridge_desktop::DesktopPathResolver;
//! use bridge_traits::HostCapabilities;
//! use std::sync::Arc;
//!
//! let bridge = PathProviderBridge::attach(
//!     channel,
//!     Arc::new(DesktopPathResolver::new("my-app")),
//!     HostCapabilities::default(),
//! )?;
//! // ... engine runs ...
//! bridge.detach();
//! ```
//!
//! ## Concurrency
//!
//! At most one background worker thread exists per attachment, and only when
//! the offload strategy is selected. Offloaded requests execute in strict
//! submission order; completion resumes on the caller's executor. There is
//! no cancellation, timeout, or retry.

mod bridge;
mod dispatcher;
mod strategy;
mod worker;

pub use bridge::PathProviderBridge;
pub use dispatcher::PathProviderDispatcher;
pub use strategy::{InlineStrategy, OffloadStrategy, WORKER_THREAD_NAME};
