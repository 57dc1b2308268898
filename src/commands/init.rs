// src/commands/init.rs
//! `bearnie init`: set up a project

use super::{progress, prompt, ui};
use anyhow::{bail, Context, Result};
use bearnie::packages::Npm;
use bearnie::{PackageManifest, ProjectConfig};
use std::path::Path;
use tracing::warn;

/// Class-name helper written to `{utilsDir}/cn.ts`
pub const CN_UTIL: &str = r#"import { type ClassValue, clsx } from "clsx";
import { twMerge } from "tailwind-merge";

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs));
}
"#;

const TAILWIND_PACKAGES: [&str; 2] = ["tailwindcss", "@tailwindcss/vite"];
const CN_PACKAGES: [&str; 2] = ["clsx", "tailwind-merge"];

/// Options for `bearnie init`
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Skip prompts and use defaults
    pub yes: bool,
    pub components_dir: Option<String>,
    pub utils_dir: Option<String>,
}

pub async fn cmd_init(cwd: &Path, options: InitOptions) -> Result<()> {
    ui::header("Let's set up your project.");
    let interactive = !options.yes && prompt::is_interactive();

    let manifest = PackageManifest::load(cwd).context("Failed to read package.json")?;
    let Some(manifest) = manifest.filter(PackageManifest::is_astro_project) else {
        ui::error("Hmm, this doesn't look like an Astro project.");
        ui::hint("Make sure you're in the root of an Astro project with a package.json.");
        bail!("{} is not an Astro project", cwd.display());
    };

    if ProjectConfig::exists(cwd) {
        ui::warning("Looks like Bearnie is already set up here.");
        let overwrite = options.yes || (interactive && prompt::confirm("Want to start fresh?", false)?);
        if !overwrite {
            ui::hint("No changes made. Your config is safe!");
            return Ok(());
        }
    }

    let npm = Npm::new(cwd);

    if !manifest.has_tailwind() {
        ui::warning("Tailwind CSS isn't installed yet.");
        let install = options.yes || (interactive && prompt::confirm("Want me to install it for you?", true)?);
        if install {
            let spinner = progress::spinner("Installing Tailwind CSS...");
            let packages: Vec<String> = TAILWIND_PACKAGES.iter().map(|p| p.to_string()).collect();
            match npm.install(&packages, true).await {
                Ok(()) => progress::succeed(&spinner, "Tailwind CSS is ready"),
                Err(e) => {
                    warn!("{}", e);
                    progress::fail(&spinner, "Couldn't install Tailwind CSS");
                    ui::hint("Try manually: npm install -D tailwindcss @tailwindcss/vite");
                }
            }
        }
    }

    let defaults = ProjectConfig::default();
    let mut config = ProjectConfig {
        components_dir: options.components_dir.unwrap_or(defaults.components_dir),
        utils_dir: options.utils_dir.unwrap_or(defaults.utils_dir),
        ..ProjectConfig::default()
    };

    if interactive {
        ui::newline();
        println!("  Where should things go?");
        ui::newline();
        config.components_dir = prompt::input("Components directory", &config.components_dir)?;
        config.utils_dir = prompt::input("Utilities directory", &config.utils_dir)?;
    }
    config.validate()?;

    let spinner = progress::spinner("Setting things up...");
    if let Err(e) = create_layout(cwd, &config).await {
        progress::fail(&spinner, "Couldn't create directories");
        return Err(e);
    }

    match write_cn_util(cwd, &config).await {
        Ok(true) => {
            let missing = manifest.missing(&CN_PACKAGES.map(String::from));
            if !missing.is_empty() {
                spinner.set_message("Installing utilities...");
                if let Err(e) = npm.install(&missing, false).await {
                    warn!("{}", e);
                    ui::hint(&format!("Install manually: npm install {}", missing.join(" ")));
                }
            }
        }
        Ok(false) => {}
        Err(e) => {
            warn!("Couldn't create utility files: {:#}", e);
        }
    }

    if let Err(e) = config.save(cwd) {
        progress::fail(&spinner, "Couldn't save configuration");
        return Err(e.into());
    }
    progress::succeed(&spinner, "Everything is set up");

    ui::newline();
    println!("  ✓ You're all set! Time to add some components.");
    ui::newline();
    println!("   → Add your first component: bearnie add button");
    println!("   → Browse all components:    bearnie list");
    println!("   → Add CSS variables:        bearnie add styles");
    ui::newline();

    Ok(())
}

/// Create the components and utilities directories
async fn create_layout(cwd: &Path, config: &ProjectConfig) -> Result<()> {
    for dir in [config.components_path(cwd), config.utils_path(cwd)] {
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    Ok(())
}

/// Write `cn.ts` unless it already exists; returns whether it was written
async fn write_cn_util(cwd: &Path, config: &ProjectConfig) -> Result<bool> {
    let path = config.utils_path(cwd).join("cn.ts");
    if tokio::fs::try_exists(&path).await? {
        return Ok(false);
    }
    tokio::fs::write(&path, CN_UTIL)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}
