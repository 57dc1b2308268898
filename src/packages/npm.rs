// src/packages/npm.rs

//! Running npm in the project root

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

/// Installs npm packages into a project
#[derive(Debug, Clone)]
pub struct Npm {
    program: String,
    cwd: PathBuf,
}

impl Npm {
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        Self {
            program: "npm".to_string(),
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    /// Use a different executable (e.g. a wrapper script)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments for an install invocation
    pub fn install_args(packages: &[String], dev: bool) -> Vec<String> {
        let mut args = vec!["install".to_string()];
        if dev {
            args.push("-D".to_string());
        }
        args.extend(packages.iter().cloned());
        args
    }

    /// `npm install [-D] <packages…>`; no-op for an empty list
    pub async fn install(&self, packages: &[String], dev: bool) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        let args = Self::install_args(packages, dev);
        info!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.cwd)
            .output()
            .await
            .map_err(|e| {
                Error::PackageManagerError(format!(
                    "Failed to run {}: {e}. Is it installed?",
                    self.program
                ))
            })?;

        if !output.status.success() {
            return Err(Error::PackageManagerError(format!(
                "{} {} failed: {}",
                self.program,
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        debug!("{} finished: {}", self.program, String::from_utf8_lossy(&output.stdout).trim());
        Ok(())
    }
}
