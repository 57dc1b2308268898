// src/installer/placement.rs

//! Destination paths for registry files
//!
//! A file is a utility file when its component is a utility or its registry
//! path starts with `utils/`. Utility files land under `utilsDir` with that
//! prefix stripped; everything else lands under `componentsDir` unchanged.

use crate::error::{Error, Result};
use crate::project::ProjectConfig;
use crate::registry::{RegistryComponent, RegistryFile};
use std::path::{Component, Path, PathBuf};

/// Registry path prefix that routes a file to the utilities directory
pub const UTILS_PREFIX: &str = "utils/";

/// Which configured directory a file is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    Component,
    Utility,
}

/// Where one registry file goes, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub class: FileClass,
    pub relative: PathBuf,
}

impl Placement {
    /// Absolute destination inside the project
    pub fn absolute(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.relative)
    }
}

/// Classify a file of a component
pub fn classify(component: &RegistryComponent, file: &RegistryFile) -> FileClass {
    if component.is_utility() || file.path.starts_with(UTILS_PREFIX) {
        FileClass::Utility
    } else {
        FileClass::Component
    }
}

/// Compute the project-relative destination of a registry file
pub fn place_file(
    component: &RegistryComponent,
    file: &RegistryFile,
    config: &ProjectConfig,
) -> Result<Placement> {
    let class = classify(component, file);

    let (base, path) = match class {
        FileClass::Utility => (
            &config.utils_dir,
            file.path.strip_prefix(UTILS_PREFIX).unwrap_or(&file.path),
        ),
        FileClass::Component => (&config.components_dir, file.path.as_str()),
    };

    let relative = Path::new(base).join(sanitize_relative(path)?);
    Ok(Placement { class, relative })
}

/// Normalize an untrusted registry path to a relative one
///
/// Rejects absolute paths, `..` components and empty paths so nothing is
/// written outside the configured directories.
pub fn sanitize_relative(path: &str) -> Result<PathBuf> {
    let mut normalized = PathBuf::new();

    for component in Path::new(path).components() {
        match component {
            Component::Normal(c) => normalized.push(c),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(Error::ConfigError(format!(
                    "Refusing to write outside the project: {path}"
                )));
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        return Err(Error::ConfigError("Empty file path in registry".to_string()));
    }

    Ok(normalized)
}
