// src/commands/ui.rs
//! Plain-text output helpers shared by the commands

use bearnie::{InstallReport, OverwritePolicy};

/// How many written files the summary lists before collapsing the rest
pub const SUMMARY_PREVIEW: usize = 5;

pub fn header(message: &str) {
    println!();
    println!("  bearnie");
    println!();
    println!("  {message}");
    println!();
}

pub fn warning(message: &str) {
    println!("  ! {message}");
}

pub fn error(message: &str) {
    println!("  ✗ {message}");
}

pub fn hint(message: &str) {
    println!("    hint: {message}");
}

pub fn newline() {
    println!();
}

pub fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Lines of the end-of-run summary
///
/// The overwrite hint only shows when files were preserved by policy.
pub fn summary_lines(report: &InstallReport, policy: OverwritePolicy) -> Vec<String> {
    let mut lines = Vec::new();

    if !report.written.is_empty() {
        lines.push(format!("✓ Created {}:", plural(report.written.len(), "file")));
        for path in report.written.iter().take(SUMMARY_PREVIEW) {
            lines.push(format!("     {}", path.display()));
        }
        if report.written.len() > SUMMARY_PREVIEW {
            lines.push(format!(
                "     ...and {} more",
                report.written.len() - SUMMARY_PREVIEW
            ));
        }
    }

    if !report.skipped.is_empty() {
        lines.push(format!(
            "! Skipped {} (already exist{})",
            plural(report.skipped.len(), "existing file"),
            if report.skipped.len() == 1 { "s" } else { "" }
        ));
        if policy == OverwritePolicy::PreserveExisting {
            lines.push("    hint: Use --yes to overwrite.".to_string());
        }
    }

    if !report.failed.is_empty() {
        lines.push(format!(
            "✗ Couldn't add {}:",
            plural(report.failed.len(), "component")
        ));
        for failure in &report.failed {
            lines.push(format!("     {}: {}", failure.name, failure.cause()));
        }
    }

    lines
}

pub fn print_summary(report: &InstallReport, policy: OverwritePolicy) {
    for line in summary_lines(report, policy) {
        println!("  {line}");
    }
}
