// src/installer/mod.rs

//! Component installation
//!
//! Writes the files of resolved components into a project, one component at
//! a time and in resolution order. Existing files are preserved unless the
//! overwrite policy is [`OverwritePolicy::Force`]. A component that fails to
//! fetch or write is recorded in the report and the run moves on to the next
//! one; there is no rollback.

mod placement;
mod report;

pub use placement::{classify, place_file, sanitize_relative, FileClass, Placement, UTILS_PREFIX};
pub use report::{ComponentFailure, InstallReport};

use crate::error::{Error, Result};
use crate::progress::ProgressTracker;
use crate::project::ProjectConfig;
use crate::registry::RegistryClient;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What to do when a destination file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Leave existing files untouched and report them as skipped
    #[default]
    PreserveExisting,
    /// Replace existing files with the registry content
    Force,
}

impl OverwritePolicy {
    pub fn from_force(force: bool) -> Self {
        if force { Self::Force } else { Self::PreserveExisting }
    }
}

/// Outcome of writing a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileOutcome {
    Written,
    Skipped,
}

/// Installs resolved components into a project directory
pub struct Installer {
    client: RegistryClient,
    project_root: PathBuf,
    config: ProjectConfig,
    policy: OverwritePolicy,
}

impl Installer {
    pub fn new(client: RegistryClient, project_root: impl AsRef<Path>, config: ProjectConfig) -> Self {
        Self {
            client,
            project_root: project_root.as_ref().to_path_buf(),
            config,
            policy: OverwritePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: OverwritePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> OverwritePolicy {
        self.policy
    }

    /// Install every component in `names`, in order
    ///
    /// Never fails as a whole: per-component errors end up in
    /// [`InstallReport::failed`].
    pub async fn install_all(&self, names: &[String], progress: &dyn ProgressTracker) -> InstallReport {
        let mut report = InstallReport::default();
        progress.set_length(names.len() as u64);

        for name in names {
            progress.set_message(&format!("Adding {name}..."));

            match self.install_component(name, &mut report).await {
                Ok(()) => {
                    report.installed.push(name.clone());
                    progress.step_done(&format!("{name} is ready"));
                }
                Err(e) => {
                    warn!("Failed to add {}: {}", name, e);
                    progress.step_failed(&format!("Couldn't add {name}: {e}"));
                    report.record_failure(name, e);
                }
            }

            progress.increment(1);
        }

        info!(
            "Installed {}/{} components ({} written, {} skipped)",
            report.installed.len(),
            names.len(),
            report.written.len(),
            report.skipped.len()
        );

        report
    }

    async fn install_component(&self, name: &str, report: &mut InstallReport) -> Result<()> {
        let component = self
            .client
            .fetch_component(name)
            .await
            .map_err(|e| Error::install_failure(name, e))?;

        report.merge_packages(&component.dependencies, &component.dev_dependencies);

        if component.files.is_empty() {
            debug!("{} has no files", name);
        }

        for file in &component.files {
            let placement =
                place_file(&component, file, &self.config).map_err(|e| Error::install_failure(name, e))?;

            let outcome = self
                .write_file(&placement, &file.content)
                .await
                .map_err(|e| Error::install_failure(name, e))?;

            match outcome {
                FileOutcome::Written => report.written.push(placement.relative),
                FileOutcome::Skipped => report.skipped.push(placement.relative),
            }
        }

        Ok(())
    }

    async fn write_file(&self, placement: &Placement, content: &str) -> Result<FileOutcome> {
        let target = placement.absolute(&self.project_root);

        if self.policy == OverwritePolicy::PreserveExisting
            && tokio::fs::try_exists(&target).await?
        {
            debug!("Skipping existing file {}", placement.relative.display());
            return Ok(FileOutcome::Skipped);
        }

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, content.as_bytes()).await?;

        debug!("Wrote {}", placement.relative.display());
        Ok(FileOutcome::Written)
    }
}
