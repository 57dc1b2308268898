// src/commands/prompt.rs
//! Interactive prompts

use anyhow::Result;
use bearnie::registry::{IndexEntry, RegistryIndex};
use inquire::{Confirm, InquireError, MultiSelect, Text};
use std::fmt;
use std::io::IsTerminal;

/// Whether prompts can be shown at all
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Yes/no question; cancelling counts as "no"
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    match Confirm::new(prompt).with_default(default).prompt() {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Free-text input with a default; cancelling keeps the default
pub fn input(prompt: &str, default: &str) -> Result<String> {
    match Text::new(prompt).with_default(default).prompt() {
        Ok(answer) if answer.trim().is_empty() => Ok(default.to_string()),
        Ok(answer) => Ok(answer.trim().to_string()),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(default.to_string())
        }
        Err(e) => Err(e.into()),
    }
}

struct ComponentChoice<'a>(&'a IndexEntry);

impl fmt::Display for ComponentChoice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.description.is_empty() {
            write!(f, "{}", self.0.name)
        } else {
            write!(f, "{:<18} {}", self.0.name, self.0.description)
        }
    }
}

/// Multi-select over the registry index; cancelling selects nothing
pub fn select_components(index: &RegistryIndex) -> Result<Vec<String>> {
    let choices: Vec<ComponentChoice<'_>> = index.components.iter().map(ComponentChoice).collect();

    match MultiSelect::new("What would you like to add?", choices)
        .with_page_size(12)
        .with_help_message("Space to select, Enter to confirm")
        .prompt()
    {
        Ok(selected) => Ok(selected.into_iter().map(|c| c.0.name.clone()).collect()),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}
