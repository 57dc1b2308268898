// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use bearnie::registry::{IndexEntry, RegistryFile};
use bearnie::{Error, RegistryClient, RegistryComponent, RegistryIndex, RegistrySource, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Registry held in memory, with per-component failure injection
#[derive(Default)]
pub struct MemoryRegistry {
    components: HashMap<String, RegistryComponent>,
    unavailable: HashSet<String>,
    fetches: AtomicUsize,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, component: RegistryComponent) -> Self {
        self.components.insert(component.name.clone(), component);
        self
    }

    /// Make fetches of `name` fail as if the registry were down
    pub fn failing(mut self, name: &str) -> Self {
        self.unavailable.insert(name.to_string());
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn into_client(self) -> (Arc<Self>, RegistryClient) {
        let registry = Arc::new(self);
        let client = RegistryClient::from_source(registry.clone());
        (registry, client)
    }
}

#[async_trait]
impl RegistrySource for MemoryRegistry {
    async fn fetch_index(&self) -> Result<RegistryIndex> {
        let mut components: Vec<IndexEntry> = self
            .components
            .values()
            .map(|c| IndexEntry {
                name: c.name.clone(),
                description: c.description.clone(),
                category: c.category.clone(),
            })
            .collect();
        components.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(RegistryIndex {
            name: "bearnie".to_string(),
            version: "1.0.0".to_string(),
            components,
        })
    }

    async fn fetch_component(&self, name: &str) -> Result<RegistryComponent> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.contains(name) {
            return Err(Error::RegistryUnavailable(format!("{name}: connection reset")));
        }
        self.components
            .get(name)
            .cloned()
            .ok_or_else(|| Error::ComponentNotFound(name.to_string()))
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// A component with one `.astro` file named after it
pub fn component(name: &str, registry_deps: &[&str]) -> RegistryComponent {
    RegistryComponent {
        name: name.to_string(),
        kind: Default::default(),
        description: format!("{name} component"),
        category: "form".to_string(),
        dependencies: Vec::new(),
        dev_dependencies: Vec::new(),
        registry_dependencies: registry_deps.iter().map(|d| d.to_string()).collect(),
        files: vec![file(
            &format!("{name}.astro"),
            &format!("{name}/{name}.astro"),
            &format!("<div class=\"{name}\"></div>\n"),
        )],
    }
}

pub fn file(name: &str, path: &str, content: &str) -> RegistryFile {
    RegistryFile {
        name: name.to_string(),
        path: path.to_string(),
        content: content.to_string(),
    }
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Write `index.json` and one document per component under `root`
pub fn write_registry_dir(root: &Path, components: &[RegistryComponent]) {
    let index = serde_json::json!({
        "name": "bearnie",
        "version": "1.0.0",
        "components": components
            .iter()
            .map(|c| serde_json::json!({
                "name": c.name,
                "description": c.description,
                "category": c.category,
            }))
            .collect::<Vec<_>>(),
    });
    std::fs::create_dir_all(root).unwrap();
    std::fs::write(root.join("index.json"), index.to_string()).unwrap();

    for component in components {
        std::fs::write(
            root.join(format!("{}.json", component.name)),
            serde_json::to_string_pretty(component).unwrap(),
        )
        .unwrap();
    }
}
