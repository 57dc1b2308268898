// src/project/mod.rs

//! Local project state: `bearnie.json` and `package.json`

mod config;
mod manifest;

pub use config::{
    ProjectConfig, CONFIG_FILE, DEFAULT_COMPONENTS_DIR, DEFAULT_TAILWIND_CONFIG, DEFAULT_UTILS_DIR,
};
pub use manifest::PackageManifest;
