// src/main.rs

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `list --json` stays machine-readable
    let fallback = if cli.global.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cwd = cli.global.cwd.clone();

    match cli.command {
        Commands::Init {
            yes,
            components_dir,
            utils_dir,
        } => {
            commands::cmd_init(
                &cwd,
                commands::InitOptions {
                    yes,
                    components_dir,
                    utils_dir,
                },
            )
            .await
        }
        Commands::Add {
            components,
            yes,
            all,
        } => {
            let registry = cli.global.registry()?;
            commands::cmd_add(&cwd, &registry, components, commands::AddOptions { yes, all }).await
        }
        Commands::List { json } => {
            let registry = cli.global.registry()?;
            commands::cmd_list(&registry, json).await
        }
        Commands::Completions { shell } => commands::cmd_completions::<Cli>(shell),
    }
}
