//! Logging utilities
//!
//! Consistent log lines for file operations and rejected link changes.

use std::path::Path;
use std::time::Duration;

use crate::error::KinshipError;

/// Log the start of a file operation
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation} {}", path.display());
}

/// Log a completed file operation with its item count
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    items: usize,
    elapsed: Option<Duration>,
) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {operation} {items} individuals from {} in {duration:?}",
            path.display()
        ),
        None => log::info!("Successfully {operation} {items} individuals from {}", path.display()),
    }
}

/// Log a warning, optionally tied to a path
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message}: {}", path.display()),
        None => log::warn!("{message}"),
    }
}

/// Log a link change that failed validation or persistence
///
/// Validation failures are expected input errors and go to `debug`;
/// store failures go to `warn`.
pub fn log_rejection(operation: &str, subject: &str, error: &KinshipError) {
    match error {
        KinshipError::Persistence(_) => log::warn!("{operation} on {subject} failed: {error}"),
        _ => log::debug!("{operation} on {subject} rejected: {error}"),
    }
}
