// src/commands/mod.rs
//! Command handlers for the bearnie CLI

mod add;
mod init;
mod list;
pub mod progress;
mod prompt;
mod ui;

pub use add::{cmd_add, AddOptions};
pub use init::{cmd_init, InitOptions};
pub use list::cmd_list;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

/// Print shell completions for the CLI to stdout
pub fn cmd_completions<C: CommandFactory>(shell: Shell) -> Result<()> {
    let mut command = C::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
