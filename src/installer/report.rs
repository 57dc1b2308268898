// src/installer/report.rs

//! Outcome of an installation run

use crate::error::Error;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// A component that could not be installed
#[derive(Debug)]
pub struct ComponentFailure {
    pub name: String,
    pub error: Error,
}

impl ComponentFailure {
    /// The error without the component name it is already reported under
    pub fn cause(&self) -> String {
        match &self.error {
            Error::ComponentInstallFailure { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}

/// What an installation run did, in resolution order
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Components whose files were all written or skipped
    pub installed: Vec<String>,
    /// Files written, relative to the project root
    pub written: Vec<PathBuf>,
    /// Existing files left untouched, relative to the project root
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<ComponentFailure>,
    /// Union of runtime packages across fetched components
    pub dependencies: BTreeSet<String>,
    /// Union of dev-time packages across fetched components
    pub dev_dependencies: BTreeSet<String>,
}

impl InstallReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn has_packages(&self) -> bool {
        !self.dependencies.is_empty() || !self.dev_dependencies.is_empty()
    }

    pub(crate) fn record_failure(&mut self, name: &str, error: Error) {
        self.failed.push(ComponentFailure {
            name: name.to_string(),
            error,
        });
    }

    pub(crate) fn merge_packages(&mut self, dependencies: &[String], dev_dependencies: &[String]) {
        self.dependencies.extend(dependencies.iter().cloned());
        self.dev_dependencies.extend(dev_dependencies.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_packages_deduplicates() {
        let mut report = InstallReport::default();
        report.merge_packages(&["clsx".to_string()], &[]);
        report.merge_packages(&["clsx".to_string(), "keen-slider".to_string()], &["@types/node".to_string()]);

        assert_eq!(report.dependencies.len(), 2);
        assert!(report.dev_dependencies.contains("@types/node"));
        assert!(report.has_packages());
    }

    #[test]
    fn test_failure_marks_incomplete() {
        let mut report = InstallReport::default();
        assert!(report.is_complete());
        report.record_failure("card", Error::ComponentNotFound("card".to_string()));
        assert!(!report.is_complete());
        assert_eq!(report.failed[0].name, "card");
        assert_eq!(report.failed[0].cause(), "component \"card\" not found in registry");
    }

    #[test]
    fn test_cause_strips_component_name() {
        let failure = ComponentFailure {
            name: "card".to_string(),
            error: Error::install_failure("card", "I/O error: Not a directory"),
        };
        assert_eq!(failure.cause(), "I/O error: Not a directory");
    }
}
