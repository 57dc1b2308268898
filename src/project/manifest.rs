// src/project/manifest.rs

//! Read-only view of a project's `package.json`

use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The dependency tables of `package.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Read `package.json` from the project root
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(cwd: &Path) -> Result<Option<Self>> {
        let path = cwd.join("package.json");
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether a package is declared as a dependency or dev-dependency
    pub fn declares(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }

    pub fn is_astro_project(&self) -> bool {
        self.declares("astro")
    }

    pub fn has_tailwind(&self) -> bool {
        self.declares("tailwindcss")
    }

    /// Packages from `wanted` that are not declared yet, in input order
    pub fn missing<'a, I>(&self, wanted: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        wanted
            .into_iter()
            .filter(|p| !self.declares(p))
            .cloned()
            .collect()
    }
}
