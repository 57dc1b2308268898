// src/registry/local.rs
//! Filesystem-backed registry
//!
//! Reads `index.json` and `<name>.json` from a directory, typically the
//! `public/registry` output of the registry generator during development.

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::source::{check_component_name, RegistrySource};
use super::types::{RegistryComponent, RegistryIndex};

/// Registry served from a local directory
pub struct LocalRegistry {
    root: PathBuf,
}

impl LocalRegistry {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the document for a component
    fn component_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    fn index_path(&self) -> PathBuf {
        self.root.join("index.json")
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> std::io::Result<std::result::Result<T, serde_json::Error>> {
    let raw = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&raw))
}

#[async_trait]
impl RegistrySource for LocalRegistry {
    async fn fetch_index(&self) -> Result<RegistryIndex> {
        let path = self.index_path();
        debug!("Reading registry index from {}", path.display());

        match read_json(&path).await {
            Ok(Ok(index)) => Ok(index),
            Ok(Err(e)) => Err(Error::RegistryUnavailable(format!(
                "Registry index at {} is not valid: {e}",
                path.display()
            ))),
            Err(e) => Err(Error::RegistryUnavailable(format!(
                "Registry index not found at {}: {e}",
                path.display()
            ))),
        }
    }

    async fn fetch_component(&self, name: &str) -> Result<RegistryComponent> {
        check_component_name(name)?;
        let path = self.component_path(name);
        debug!("Reading component {} from {}", name, path.display());

        match read_json(&path).await {
            Ok(Ok(component)) => Ok(component),
            Ok(Err(e)) => Err(Error::InvalidDocument {
                name: name.to_string(),
                reason: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::ComponentNotFound(name.to_string()))
            }
            Err(e) => Err(Error::RegistryUnavailable(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn name(&self) -> &str {
        "local"
    }
}
