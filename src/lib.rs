//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the
//! individual workspace crates (`bridge-traits`, `core-provider`,
//! `bridge-desktop`). Host applications can depend on `ppc-workspace` with
//! the `desktop-shims` feature and get the full desktop bridge without
//! wiring each crate individually.

#[cfg(feature = "desktop-shims")]
pub use bridge_desktop::DesktopPathResolver;
#[cfg(feature = "desktop-shims")]
pub use bridge_traits::{HostCapabilities, MethodCall, MethodChannel, MethodHandler, MethodReply};
#[cfg(feature = "desktop-shims")]
pub use core_provider::PathProviderBridge;
