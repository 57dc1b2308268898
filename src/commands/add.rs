// src/commands/add.rs
//! `bearnie add`: resolve and install components

use super::progress::{self, InstallProgress};
use super::{prompt, ui};
use anyhow::{bail, Context, Result};
use bearnie::packages::{Npm, PendingPackages};
use bearnie::{
    validate_requested, Installer, OverwritePolicy, PackageManifest, ProgressTracker,
    ProjectConfig, RegistryClient, RegistryLocation, Resolver,
};
use std::path::Path;
use tracing::{info, warn};

/// Options for `bearnie add`
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    /// Skip prompts and overwrite existing files
    pub yes: bool,
    /// Add every component in the index
    pub all: bool,
}

/// Add components to the project at `cwd`
///
/// Fails (non-zero exit) only when the registry index cannot be fetched,
/// requested names are unknown, or resolution fails. Per-component install
/// failures are reported in the summary.
pub async fn cmd_add(
    cwd: &Path,
    registry: &RegistryLocation,
    components: Vec<String>,
    options: AddOptions,
) -> Result<()> {
    ui::header("Let's add some components.");

    let config = match ProjectConfig::load(cwd)? {
        Some(config) => config,
        None => {
            ui::warning("Project not initialized. Run `bearnie init` first.");
            ui::newline();
            let proceed = options.yes
                || (prompt::is_interactive()
                    && prompt::confirm("Want to use default settings for now?", true)?);
            if !proceed {
                return Ok(());
            }
            ProjectConfig::default()
        }
    };

    let client = RegistryClient::new(registry)?;
    info!("Using {} registry at {}", client.source_name(), registry);

    let spinner = progress::spinner("Fetching the good stuff...");
    let index = match client.fetch_index().await {
        Ok(index) => {
            progress::succeed(
                &spinner,
                format!("Found {} ready to use", ui::plural(index.components.len(), "component")),
            );
            index
        }
        Err(e) => {
            progress::fail(&spinner, "Couldn't reach the component registry.");
            ui::hint("Check your internet connection and try again.");
            return Err(e).context("Failed to fetch registry index");
        }
    };

    let selected = if options.all {
        index.names()
    } else if components.is_empty() {
        if !prompt::is_interactive() {
            bail!("No components given. Pass component names or --all.");
        }
        ui::newline();
        prompt::select_components(&index)?
    } else {
        if let Err(e) = validate_requested(&index, &components) {
            ui::error(&e.to_string());
            ui::hint("Run `bearnie list` to see what's available.");
            return Err(e.into());
        }
        components
    };

    if selected.is_empty() {
        ui::hint("No components selected.");
        return Ok(());
    }

    let spinner = progress::spinner("Gathering what you need...");
    let resolution = match Resolver::new(client.clone()).plan(&selected).await {
        Ok(resolution) => resolution,
        Err(e) => {
            progress::fail(&spinner, "Couldn't resolve dependencies");
            if e.is_not_found() {
                ui::hint("A component refers to something the registry doesn't have.");
            } else {
                ui::hint("Check your internet connection and try again.");
            }
            return Err(e).context("Dependency resolution failed");
        }
    };

    let adding = ui::plural(resolution.requested, "component");
    match resolution.extra_dependencies() {
        0 => progress::succeed(&spinner, format!("Adding {adding}")),
        extra => progress::succeed(&spinner, format!("Adding {adding} (+{extra} dependencies)")),
    }
    ui::newline();

    let installer = Installer::new(client, cwd, config)
        .with_policy(OverwritePolicy::from_force(options.yes));
    let tracker = InstallProgress::new(resolution.order.len() as u64);
    let report = installer.install_all(&resolution.order, &tracker).await;
    tracker.finish_with_message("");

    if report.has_packages() {
        install_packages(cwd, &report).await;
    }

    ui::newline();
    ui::print_summary(&report, installer.policy());
    ui::newline();

    if report.is_complete() {
        println!("  Done! Time to make something awesome.");
    } else {
        println!("  Finished with errors.");
    }
    ui::newline();

    Ok(())
}

/// npm step; failures only produce a hint
async fn install_packages(cwd: &Path, report: &bearnie::InstallReport) {
    let manifest = match PackageManifest::load(cwd) {
        Ok(manifest) => manifest,
        Err(e) => {
            warn!("Could not read package.json: {}", e);
            None
        }
    };

    let pending = PendingPackages::from_report(report, manifest.as_ref());
    if pending.is_empty() {
        return;
    }

    let spinner = progress::spinner("Installing dependencies...");
    match pending.install(&Npm::new(cwd)).await {
        Ok(()) => progress::succeed(&spinner, "Dependencies installed"),
        Err(e) => {
            warn!("{}", e);
            progress::fail(&spinner, "Some dependencies couldn't be installed");
            let mut all = pending.dependencies.clone();
            all.extend(pending.dev_dependencies.iter().cloned());
            ui::hint(&format!(
                "You might need to install them manually: npm install {}",
                all.join(" ")
            ));
        }
    }
}
