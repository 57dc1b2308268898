// src/registry/types.rs

//! Registry document types
//!
//! These mirror the JSON served at `{base}/index.json` and `{base}/{name}.json`.
//! Optional fields default so that documents produced for utilities (which
//! carry no category or dependency arrays) decode cleanly.

use serde::{Deserialize, Serialize};

/// The catalog of all installable components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryIndex {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub components: Vec<IndexEntry>,
}

impl RegistryIndex {
    /// Look up an index entry by component name
    pub fn get(&self, name: &str) -> Option<&IndexEntry> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Whether the index lists a component with this name
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All component names in index order
    pub fn names(&self) -> Vec<String> {
        self.components.iter().map(|c| c.name.clone()).collect()
    }
}

/// Lightweight summary of one component, used for listing and selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

/// Where a component's files are routed on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    #[default]
    Component,
    Utility,
}

/// Full definition of one installable component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryComponent {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ComponentKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Third-party runtime packages
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Third-party dev-time packages
    #[serde(default)]
    pub dev_dependencies: Vec<String>,
    /// Other registry components that must be installed alongside this one
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
    #[serde(default)]
    pub files: Vec<RegistryFile>,
}

impl RegistryComponent {
    pub fn is_utility(&self) -> bool {
        self.kind == ComponentKind::Utility
    }
}

/// A single file payload; `content` is written verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryFile {
    pub name: String,
    pub path: String,
    pub content: String,
}
