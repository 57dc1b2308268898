// src/packages/mod.rs

//! Third-party npm packages required by installed components
//!
//! The installer only collects package names. This module narrows them down
//! to what the project does not declare yet and hands them to npm.

mod npm;

pub use npm::Npm;

use crate::installer::InstallReport;
use crate::project::PackageManifest;

/// Packages that still need to be added to `package.json`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingPackages {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

impl PendingPackages {
    /// Everything the report asks for, minus what the manifest already declares
    ///
    /// Without a `package.json`, every package is pending.
    pub fn from_report(report: &InstallReport, manifest: Option<&PackageManifest>) -> Self {
        match manifest {
            Some(manifest) => Self {
                dependencies: manifest.missing(&report.dependencies),
                dev_dependencies: manifest.missing(&report.dev_dependencies),
            },
            None => Self {
                dependencies: report.dependencies.iter().cloned().collect(),
                dev_dependencies: report.dev_dependencies.iter().cloned().collect(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }

    /// Install runtime packages, then dev packages
    pub async fn install(&self, npm: &Npm) -> crate::Result<()> {
        npm.install(&self.dependencies, false).await?;
        npm.install(&self.dev_dependencies, true).await
    }
}
