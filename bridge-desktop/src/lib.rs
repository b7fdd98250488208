//! # Desktop Bridge Implementation
//!
//! Desktop (macOS, Windows, Linux) implementation of the path-provider
//! resolver contract from `bridge-traits`.
//!
//! ## Overview
//!
//! [`DesktopPathResolver`] maps the logical location kinds onto
//! desktop-appropriate places:
//!
//! - per-user cache/data/config directories via the `dirs` crate, scoped
//!   under an application identifier and created on demand;
//! - removable media discovered under the platform's mount roots for the
//!   external-storage operations, with unavailable volumes silently omitted.
//!
//! Hosts hand an instance to `core_provider::PathProviderBridge::attach`.

mod resolver;

pub use resolver::DesktopPathResolver;
