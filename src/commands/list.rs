// src/commands/list.rs
//! `bearnie list`: show the registry index grouped by category

use super::{progress, ui};
use anyhow::{Context, Result};
use bearnie::registry::IndexEntry;
use bearnie::{RegistryClient, RegistryLocation};

/// Display order for known categories; anything else follows alphabetically
pub const CATEGORY_ORDER: [&str; 8] = [
    "foundation",
    "form",
    "layout",
    "navigation",
    "feedback",
    "disclosure",
    "display",
    "other",
];

const UNCATEGORIZED: &str = "other";

pub async fn cmd_list(registry: &RegistryLocation, json: bool) -> Result<()> {
    let client = RegistryClient::new(registry)?;

    if json {
        let index = client
            .fetch_index()
            .await
            .context("Failed to fetch registry index")?;
        println!("{}", serde_json::to_string_pretty(&index.components)?);
        return Ok(());
    }

    ui::header("Here's what's available.");
    let spinner = progress::spinner("Loading components...");
    let index = match client.fetch_index().await {
        Ok(index) => {
            spinner.finish_and_clear();
            index
        }
        Err(e) => {
            progress::fail(&spinner, "Couldn't reach the component registry.");
            ui::hint("Check your internet connection and try again.");
            return Err(e).context("Failed to fetch registry index");
        }
    };

    for (category, entries) in group_by_category(&index.components) {
        println!("  {}", title_case(category));
        for entry in entries {
            if entry.description.is_empty() {
                println!("    {}", entry.name);
            } else {
                println!("    {:<18} {}", entry.name, entry.description);
            }
        }
        ui::newline();
    }

    println!("  {} available", ui::plural(index.components.len(), "component"));
    ui::newline();
    println!("   → Add a component: bearnie add <name>");
    println!("   → Add several:     bearnie add button card badge");
    println!("   → Add everything:  bearnie add --all");
    ui::newline();

    Ok(())
}

/// Group entries by category in display order, keeping index order within a group
pub fn group_by_category(entries: &[IndexEntry]) -> Vec<(&str, Vec<&IndexEntry>)> {
    let mut groups: Vec<(&str, Vec<&IndexEntry>)> = Vec::new();

    for entry in entries {
        let category = if entry.category.is_empty() {
            UNCATEGORIZED
        } else {
            entry.category.as_str()
        };
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, members)) => members.push(entry),
            None => groups.push((category, vec![entry])),
        }
    }

    groups.sort_by(|(a, _), (b, _)| {
        let rank = |c: &str| CATEGORY_ORDER.iter().position(|known| *known == c);
        match (rank(a), rank(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    });

    groups
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
