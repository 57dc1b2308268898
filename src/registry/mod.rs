// src/registry/mod.rs

//! Component registry access
//!
//! This module provides:
//! - Registry document types (index and per-component documents)
//! - The [`RegistrySource`] trait with filesystem and HTTP backends
//! - [`RegistryClient`], a cloneable handle built from a [`RegistryLocation`]

mod http;
mod local;
mod source;
mod types;

pub use http::HttpRegistry;
pub use local::LocalRegistry;
pub use source::{RegistryClient, RegistryLocation, RegistrySource, DEFAULT_REGISTRY_URL};
pub use types::{ComponentKind, IndexEntry, RegistryComponent, RegistryFile, RegistryIndex};
