//! Progress reporting for long-running loads
//!
//! Thin wrappers around indicatif with the crate's standard styles.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Default style for a main progress bar
pub const DEFAULT_MAIN_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

/// Create a main progress bar with the standard style
#[must_use]
pub fn create_main_progress_bar(length: u64, description: Option<&str>) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template(DEFAULT_MAIN_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    let pb = ProgressBar::new(length).with_style(style);

    if let Some(desc) = description {
        pb.set_message(desc.to_string());
    }
    pb
}

/// Create a ticking spinner for operations without a known length
#[must_use]
pub fn create_spinner(message: Option<&str>) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {elapsed_precise} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let pb = ProgressBar::new_spinner().with_style(style);

    if let Some(msg) = message {
        pb.set_message(msg.to_string());
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Finish a progress bar and clear it from display
pub fn finish_and_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}
