// src/commands/progress.rs
//! Terminal progress for registry fetches and component installation

use bearnie::ProgressTracker;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for a single indeterminate step (fetching, resolving)
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Finish a spinner with a success line
pub fn succeed(pb: &ProgressBar, message: impl Into<String>) {
    pb.set_style(ProgressStyle::with_template("  ✓ {msg}").expect("Invalid template"));
    pb.finish_with_message(message.into());
}

/// Finish a spinner with a failure line
pub fn fail(pb: &ProgressBar, message: impl Into<String>) {
    pb.set_style(ProgressStyle::with_template("  ✗ {msg}").expect("Invalid template"));
    pb.abandon_with_message(message.into());
}

/// Installation progress: a counter spinner with one printed line per component
pub struct InstallProgress {
    bar: ProgressBar,
}

impl InstallProgress {
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.green} {msg} ({pos}/{len})")
                .expect("Invalid progress template"),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        Self::from_bar(bar)
    }

    fn from_bar(bar: ProgressBar) -> Self {
        Self { bar }
    }

    /// Print a line above the bar (hidden bars drop `println`)
    fn line(&self, message: String) {
        if self.bar.is_hidden() {
            println!("{message}");
        } else {
            self.bar.println(message);
        }
    }
}

impl ProgressTracker for InstallProgress {
    fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    fn increment(&self, amount: u64) {
        self.bar.inc(amount);
    }

    fn set_length(&self, length: u64) {
        self.bar.set_length(length);
    }

    fn position(&self) -> u64 {
        self.bar.position()
    }

    fn length(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    fn step_done(&self, message: &str) {
        self.line(format!("  ✓ {message}"));
    }

    fn step_failed(&self, message: &str) {
        self.line(format!("  ✗ {message}"));
    }

    fn finish_with_message(&self, message: &str) {
        self.bar.finish_and_clear();
        if !message.is_empty() {
            println!("  {message}");
        }
    }

    fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}
