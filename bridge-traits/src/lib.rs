//! # Host Bridge Traits
//!
//! Contracts between the path-provider core and its collaborators.
//!
//! ## Overview
//!
//! This crate defines the seams the rest of the workspace is built around.
//! Each trait represents a capability that is implemented differently per
//! platform or per host environment:
//!
//! - [`PathResolver`](resolver::PathResolver) — maps a logical location kind
//!   to concrete OS paths (per-platform; desktop lives in `bridge-desktop`).
//! - [`ExecutionStrategy`](strategy::ExecutionStrategy) — decides whether a
//!   resolver job runs inline or on the dedicated background worker
//!   (implementations live in `core-provider`).
//! - [`MethodChannel`](channel::MethodChannel) /
//!   [`MethodHandler`](channel::MethodHandler) — the named-operation
//!   request/response boundary. The channel is host-owned; the core only
//!   installs a handler on it.
//!
//! ## Error Handling
//!
//! All operations use [`BridgeError`](error::BridgeError). Errors crossing
//! the channel boundary are reduced to `{code, message}` with the code taken
//! from [`BridgeError::code`](error::BridgeError::code) and the message from
//! `Display`, content unmodified. Absence of a location is never an error;
//! it is modeled as `Option`/omission and marshals to `null`.
//!
//! ## Thread Safety
//!
//! Resolver and strategy implementations require `Send + Sync`; resolver
//! operations themselves are blocking calls executed wholly on one thread,
//! chosen by the active strategy.

pub mod channel;
pub mod error;
pub mod method;
pub mod resolver;
pub mod strategy;

pub use error::BridgeError;

// Re-export commonly used types
pub use channel::{HostCapabilities, MethodChannel, MethodHandler};
pub use method::{Method, MethodCall, MethodReply, PathValue};
pub use resolver::{PathResolver, StorageKind};
pub use strategy::{ExecutionStrategy, ResolveJob};
