// src/cli/mod.rs
//! CLI definitions for bearnie
//!
//! Command implementations live in the `commands` module.
//!
//! - `init` - Set up a project (`bearnie.json`, directories, `cn.ts`)
//! - `add` - Add components and their dependencies
//! - `list` - Show available components by category
//! - `completions` - Print shell completions

use anyhow::Result;
use bearnie::RegistryLocation;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bearnie")]
#[command(author = "Bearnie Contributors")]
#[command(version)]
#[command(about = "Add beautiful Astro components to your project", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Project root directory
    #[arg(long, global = true, default_value = ".")]
    pub cwd: PathBuf,

    /// Base URL of the component registry
    #[arg(long, global = true, env = "BEARNIE_REGISTRY_URL")]
    pub registry_url: Option<String>,

    /// Read the registry from a local directory instead of HTTP
    #[arg(long, global = true, env = "BEARNIE_REGISTRY_PATH")]
    pub registry_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Registry backend: a local path wins over a URL
    pub fn registry(&self) -> Result<RegistryLocation> {
        Ok(RegistryLocation::select(
            self.registry_path.clone(),
            self.registry_url.as_deref(),
        )?)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up bearnie in an Astro project
    Init {
        /// Skip prompts and use defaults
        #[arg(short, long)]
        yes: bool,

        /// Where component files go
        #[arg(long)]
        components_dir: Option<String>,

        /// Where utility files go
        #[arg(long)]
        utils_dir: Option<String>,
    },

    /// Add components to your project
    Add {
        /// Component names (prompts when omitted)
        components: Vec<String>,

        /// Skip prompts and overwrite existing files
        #[arg(short, long)]
        yes: bool,

        /// Add every available component
        #[arg(short, long, conflicts_with = "components")]
        all: bool,
    },

    /// List available components
    List {
        /// Print the registry index as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
