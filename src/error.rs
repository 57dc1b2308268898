// src/error.rs
//! Error types for registry access, resolution and installation

use thiserror::Error;

/// Result type used throughout the bearnie library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the registry client, resolver and installer
#[derive(Error, Debug)]
pub enum Error {
    /// Index or component endpoint unreachable, or returned a non-success status
    #[error("registry unavailable: {0}")]
    RegistryUnavailable(String),

    /// A requested or transitively referenced component does not exist
    #[error("component \"{0}\" not found in registry")]
    ComponentNotFound(String),

    /// Requested names that are not listed in the registry index
    #[error("unknown components: {}", .0.join(", "))]
    UnknownComponents(Vec<String>),

    /// A registry document was found but could not be decoded
    #[error("invalid registry document for \"{name}\": {reason}")]
    InvalidDocument { name: String, reason: String },

    /// Fetching or writing one resolved component failed
    #[error("failed to add \"{name}\": {reason}")]
    ComponentInstallFailure { name: String, reason: String },

    /// Invalid or unreadable configuration
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// HTTP client construction failed
    #[error("initialization error: {0}")]
    InitError(String),

    /// npm (or another package manager) could not be run or exited non-zero
    #[error("package manager error: {0}")]
    PackageManagerError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap any error as an install failure for the named component
    pub fn install_failure(name: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::ComponentInstallFailure {
            name: name.into(),
            reason: cause.to_string(),
        }
    }

    /// Whether the error means a component is missing rather than the registry being down
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ComponentNotFound(_) | Self::UnknownComponents(_))
    }
}
