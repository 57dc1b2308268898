// src/progress.rs

//! Shared progress tracking trait and implementations
//!
//! The installer reports one step per component through [`ProgressTracker`].
//! Implementations:
//! - `SilentProgress`: No-op for tests and scripted usage
//! - `LogProgress`: Logs progress to tracing
//! - the CLI's spinner-backed tracker (in the binary)

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::{info, warn};

/// Core trait for progress tracking
///
/// Implementations should be thread-safe (Send + Sync) so a tracker can be
/// shared with the async installer.
pub trait ProgressTracker: Send + Sync {
    /// Set the current status message
    fn set_message(&self, message: &str);

    /// Increment progress by the given amount
    fn increment(&self, amount: u64);

    /// Set the total (length) of the progress
    fn set_length(&self, length: u64);

    /// Get current position
    fn position(&self) -> u64;

    /// Get total length
    fn length(&self) -> u64;

    /// Report a step that succeeded, without finishing the tracker
    fn step_done(&self, message: &str);

    /// Report a step that failed, without finishing the tracker
    fn step_failed(&self, message: &str);

    /// Finish progress successfully with a message
    fn finish_with_message(&self, message: &str);

    /// Check if progress is finished
    fn is_finished(&self) -> bool;
}

/// Silent progress tracker (no-op)
#[derive(Debug, Default)]
pub struct SilentProgress {
    position: AtomicU64,
    length: AtomicU64,
    finished: AtomicBool,
}

impl SilentProgress {
    /// Create a new silent progress tracker
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressTracker for SilentProgress {
    fn set_message(&self, _message: &str) {}

    fn increment(&self, amount: u64) {
        self.position.fetch_add(amount, Ordering::Relaxed);
    }

    fn set_length(&self, length: u64) {
        self.length.store(length, Ordering::Relaxed);
    }

    fn position(&self) -> u64 {
        self.position.load(Ordering::Relaxed)
    }

    fn length(&self) -> u64 {
        self.length.load(Ordering::Relaxed)
    }

    fn step_done(&self, _message: &str) {}

    fn step_failed(&self, _message: &str) {}

    fn finish_with_message(&self, _message: &str) {
        self.finished.store(true, Ordering::Relaxed);
    }

    fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Relaxed)
    }
}

/// Logging progress tracker
///
/// Logs every update to tracing at info level (failures at warn).
/// Useful for non-interactive environments such as CI.
#[derive(Debug)]
pub struct LogProgress {
    name: String,
    position: AtomicU64,
    length: AtomicU64,
    finished: AtomicBool,
}

impl LogProgress {
    /// Create a new logging progress tracker
    pub fn new(name: impl Into<String>, length: u64) -> Self {
        Self {
            name: name.into(),
            position: AtomicU64::new(0),
            length: AtomicU64::new(length),
            finished: AtomicBool::new(false),
        }
    }
}

impl ProgressTracker for LogProgress {
    fn set_message(&self, message: &str) {
        info!("{}: {}", self.name, message);
    }

    fn increment(&self, amount: u64) {
        let new_pos = self.position.fetch_add(amount, Ordering::Relaxed) + amount;
        let length = self.length.load(Ordering::Relaxed);
        if length > 0 {
            info!("{}: {}/{}", self.name, new_pos, length);
        }
    }

    fn set_length(&self, length: u64) {
        self.length.store(length, Ordering::Relaxed);
    }

    fn position(&self) -> u64 {
        self.position.load(Ordering::Relaxed)
    }

    fn length(&self) -> u64 {
        self.length.load(Ordering::Relaxed)
    }

    fn step_done(&self, message: &str) {
        info!("{}: {}", self.name, message);
    }

    fn step_failed(&self, message: &str) {
        warn!("{}: {}", self.name, message);
    }

    fn finish_with_message(&self, message: &str) {
        self.finished.store(true, Ordering::Relaxed);
        info!("{}: {}", self.name, message);
    }

    fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Relaxed)
    }
}
