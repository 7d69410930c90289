//! Async operations for working with Parquet files
//! Provides functions for finding and opening population files asynchronously

use std::path::{Path, PathBuf};
use tokio::fs::{self, File};

use crate::error::{KinshipError, Result};
use crate::utils::logging::{log_operation_start, log_warning};

/// Find all Parquet files in a directory asynchronously, ordered by file name
pub async fn find_parquet_files_async(dir: &Path) -> Result<Vec<PathBuf>> {
    log_operation_start("Searching for parquet files asynchronously in", dir);

    let mut parquet_files = Vec::<PathBuf>::new();
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let metadata = fs::metadata(&path).await?;

        if metadata.is_file() && path.extension().is_some_and(|ext| ext == "parquet") {
            parquet_files.push(path);
        }
    }
    parquet_files.sort();

    if parquet_files.is_empty() {
        log_warning("No Parquet files found in directory", Some(dir));
    } else {
        log::info!("Found {} Parquet files in {}", parquet_files.len(), dir.display());
    }

    Ok(parquet_files)
}

/// Async helper to open a Parquet file for reading
pub async fn open_parquet_file_async(path: &Path) -> Result<File> {
    File::open(path).await.map_err(|e| {
        KinshipError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to open file {}: {e}", path.display()),
        ))
    })
}
