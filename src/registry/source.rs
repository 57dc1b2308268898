// src/registry/source.rs
//! Registry source trait and backend selection
//!
//! A registry is either a directory on disk (`index.json` plus one
//! `<name>.json` per component) or an HTTP endpoint serving the same
//! documents. Both are reached through [`RegistrySource`], and the backend is
//! picked once from a [`RegistryLocation`] when the client is built.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

use super::http::HttpRegistry;
use super::local::LocalRegistry;
use super::types::{RegistryComponent, RegistryIndex};

/// Default hosted registry
pub const DEFAULT_REGISTRY_URL: &str = "https://bearnie.dev/registry";

/// Trait for reading registry documents from a backend
///
/// Every call is a fresh read: implementations do not retry or cache.
#[async_trait]
pub trait RegistrySource: Send + Sync {
    /// Fetch the registry index
    ///
    /// Fails with [`Error::RegistryUnavailable`] when the index cannot be obtained.
    async fn fetch_index(&self) -> Result<RegistryIndex>;

    /// Fetch a single component document
    ///
    /// Fails with [`Error::ComponentNotFound`] when the backend has no such document.
    async fn fetch_component(&self, name: &str) -> Result<RegistryComponent>;

    /// Human-readable backend name (for logging)
    fn name(&self) -> &str;
}

/// Where registry documents are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryLocation {
    Local(PathBuf),
    Remote(Url),
}

impl RegistryLocation {
    /// Pick the backend from an optional directory and an optional URL
    ///
    /// A directory always wins over a URL. Without either, the hosted
    /// registry is used.
    pub fn select(path: Option<PathBuf>, url: Option<&str>) -> Result<Self> {
        if let Some(path) = path {
            return Ok(Self::Local(path));
        }

        let raw = url.unwrap_or(DEFAULT_REGISTRY_URL);
        let parsed = Url::parse(raw)
            .map_err(|e| Error::ConfigError(format!("Invalid registry URL '{raw}': {e}")))?;

        match parsed.scheme() {
            "http" | "https" => Ok(Self::Remote(parsed)),
            other => Err(Error::ConfigError(format!(
                "Unsupported registry URL scheme '{other}' in {raw}"
            ))),
        }
    }
}

impl fmt::Display for RegistryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{url}"),
        }
    }
}

/// Cloneable handle over the configured registry backend
#[derive(Clone)]
pub struct RegistryClient {
    source: Arc<dyn RegistrySource>,
}

impl RegistryClient {
    /// Build a client for the given location
    pub fn new(location: &RegistryLocation) -> Result<Self> {
        let source: Arc<dyn RegistrySource> = match location {
            RegistryLocation::Local(path) => Arc::new(LocalRegistry::new(path)),
            RegistryLocation::Remote(url) => Arc::new(HttpRegistry::new(url.as_str())?),
        };
        Ok(Self { source })
    }

    /// Wrap an existing source (custom backends, tests)
    pub fn from_source(source: Arc<dyn RegistrySource>) -> Self {
        Self { source }
    }

    pub async fn fetch_index(&self) -> Result<RegistryIndex> {
        self.source.fetch_index().await
    }

    pub async fn fetch_component(&self, name: &str) -> Result<RegistryComponent> {
        self.source.fetch_component(name).await
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }
}

/// Reject names that would escape the registry root once turned into a path or URL
pub(crate) fn check_component_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(Error::ComponentNotFound(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_takes_precedence_over_url() {
        let location = RegistryLocation::select(
            Some(PathBuf::from("/tmp/registry")),
            Some("http://localhost:4321/registry"),
        )
        .unwrap();
        assert_eq!(location, RegistryLocation::Local(PathBuf::from("/tmp/registry")));
    }

    #[test]
    fn test_default_url_when_nothing_configured() {
        let location = RegistryLocation::select(None, None).unwrap();
        assert_eq!(
            location,
            RegistryLocation::Remote(Url::parse(DEFAULT_REGISTRY_URL).unwrap())
        );
        assert_eq!(location.to_string(), "https://bearnie.dev/registry");
    }

    #[test]
    fn test_invalid_url_is_config_error() {
        assert!(matches!(
            RegistryLocation::select(None, Some("not a url")),
            Err(Error::ConfigError(_))
        ));
        assert!(matches!(
            RegistryLocation::select(None, Some("ftp://example.com/registry")),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_component_name_check() {
        assert!(check_component_name("button").is_ok());
        assert!(check_component_name("focus-trap").is_ok());
        assert!(check_component_name("").is_err());
        assert!(check_component_name("../secrets").is_err());
        assert!(check_component_name("nested/name").is_err());
    }
}
