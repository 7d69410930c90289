//! Utility functions for error handling
//!
//! File-system checks that turn missing inputs into descriptive errors
//! before the Parquet reader sees them.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{KinshipError, Result};

/// Open a population file, reporting what it was needed for on failure
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.is_file() {
        return Err(KinshipError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a file (needed for: {purpose})", path.display()),
        )));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions",
            _ => "Failed to open file",
        };
        KinshipError::Io(io::Error::new(
            e.kind(),
            format!("{context}: {} ({purpose}): {e}", path.display()),
        ))
    })
}

/// Check that a directory exists and is readable
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.is_dir() {
        return Err(KinshipError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory (needed for: {purpose})", path.display()),
        )));
    }

    fs::read_dir(path).map(|_| ()).map_err(|e| {
        KinshipError::Io(io::Error::new(
            e.kind(),
            format!("Failed to access directory {} for {purpose}: {e}", path.display()),
        ))
    })
}
