// src/lib.rs

//! Bearnie component installer
//!
//! Fetches UI components for Astro from a JSON registry and copies their
//! source files into a project.
//!
//! # Architecture
//!
//! - Registry: index and per-component documents from a directory or HTTP endpoint
//! - Resolver: expands requested names into a dependency-ordered install list
//! - Installer: writes component files under the project's configured directories,
//!   preserving existing files unless forced, and collects npm package requirements
//! - Project: `bearnie.json` settings and the project's `package.json`

mod error;
pub mod installer;
pub mod packages;
pub mod progress;
pub mod project;
pub mod registry;
pub mod resolver;

pub use error::{Error, Result};
pub use installer::{InstallReport, Installer, OverwritePolicy};
pub use progress::{LogProgress, ProgressTracker, SilentProgress};
pub use project::{PackageManifest, ProjectConfig};
pub use registry::{
    RegistryClient, RegistryComponent, RegistryIndex, RegistryLocation, RegistrySource,
};
pub use resolver::{validate_requested, Resolution, Resolver};
