// src/project/config.rs

//! Project configuration (`bearnie.json`)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the project configuration file
pub const CONFIG_FILE: &str = "bearnie.json";

pub const DEFAULT_COMPONENTS_DIR: &str = "src/components/bearnie";
pub const DEFAULT_UTILS_DIR: &str = "src/utils";
pub const DEFAULT_TAILWIND_CONFIG: &str = "tailwind.config.mjs";

/// Where components and utilities are written inside a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub components_dir: String,
    pub utils_dir: String,
    #[serde(default = "default_tailwind_config")]
    pub tailwind_config: String,
    #[serde(default = "default_typescript")]
    pub typescript: bool,
}

fn default_tailwind_config() -> String {
    DEFAULT_TAILWIND_CONFIG.to_string()
}

fn default_typescript() -> bool {
    true
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            components_dir: DEFAULT_COMPONENTS_DIR.to_string(),
            utils_dir: DEFAULT_UTILS_DIR.to_string(),
            tailwind_config: default_tailwind_config(),
            typescript: default_typescript(),
        }
    }
}

impl ProjectConfig {
    /// Path of the config file inside a project
    pub fn path(cwd: &Path) -> PathBuf {
        cwd.join(CONFIG_FILE)
    }

    /// Whether the project has been initialized
    pub fn exists(cwd: &Path) -> bool {
        Self::path(cwd).exists()
    }

    /// Load `bearnie.json` from the project root
    ///
    /// Returns `Ok(None)` when the project has not been initialized.
    pub fn load(cwd: &Path) -> Result<Option<Self>> {
        let path = Self::path(cwd);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| Error::ConfigError(format!("Invalid {}: {e}", path.display())))?;
        config.validate()?;

        debug!("Loaded project config from {}", path.display());
        Ok(Some(config))
    }

    /// Load the config, falling back to defaults when absent
    pub fn load_or_default(cwd: &Path) -> Result<Self> {
        Ok(Self::load(cwd)?.unwrap_or_default())
    }

    /// Write `bearnie.json` (pretty-printed) to the project root
    pub fn save(&self, cwd: &Path) -> Result<()> {
        self.validate()?;
        let mut raw = serde_json::to_string_pretty(self)?;
        raw.push('\n');
        std::fs::write(Self::path(cwd), raw)?;
        Ok(())
    }

    /// Both output directories must be non-empty, relative paths
    pub fn validate(&self) -> Result<()> {
        for (key, dir) in [("componentsDir", &self.components_dir), ("utilsDir", &self.utils_dir)] {
            if dir.trim().is_empty() {
                return Err(Error::ConfigError(format!("{key} must not be empty")));
            }
            if Path::new(dir).is_absolute() {
                return Err(Error::ConfigError(format!(
                    "{key} must be relative to the project root, got {dir}"
                )));
            }
        }
        Ok(())
    }

    /// Absolute components directory for a project
    pub fn components_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.components_dir)
    }

    /// Absolute utilities directory for a project
    pub fn utils_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.utils_dir)
    }
}
