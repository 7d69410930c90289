//! Async population loader
//!
//! Streams record batches with the Parquet async reader and decodes them on
//! the blocking pool with rayon.

use std::path::{Path, PathBuf};
use std::time::Instant;

use arrow::record_batch::RecordBatch;
use futures::TryStreamExt;
use futures::future::try_join_all;
use parquet::arrow::ParquetRecordBatchStreamBuilder;
use rayon::prelude::*;

use crate::async_io::file_ops::{find_parquet_files_async, open_parquet_file_async};
use crate::config::PopulationConfig;
use crate::error::{KinshipError, Result};
use crate::loader::report_dangling;
use crate::models::Individual;
use crate::store::MemoryStore;
use crate::utils::logging::{
    create_spinner, finish_and_clear, log_operation_complete, log_operation_start,
};

/// Read every record batch of a Parquet file asynchronously
pub async fn read_batches_async(path: &Path, batch_size: usize) -> Result<Vec<RecordBatch>> {
    let file = open_parquet_file_async(path).await?;
    let stream = ParquetRecordBatchStreamBuilder::new(file)
        .await?
        .with_batch_size(batch_size)
        .build()?;

    Ok(stream.try_collect::<Vec<_>>().await?)
}

/// Decode batches into individuals on the blocking pool
async fn decode_batches(
    batches: Vec<RecordBatch>,
    config: &PopulationConfig,
) -> Result<Vec<Individual>> {
    let config = config.clone();
    let decoded = tokio::task::spawn_blocking(move || {
        batches
            .par_iter()
            .map(|batch| Individual::from_record_batch_with(batch, &config))
            .collect::<Result<Vec<_>>>()
    })
    .await
    .map_err(|e| KinshipError::Io(std::io::Error::other(e)))??;

    Ok(decoded.into_iter().flatten().collect())
}

/// Read every individual from one Parquet file asynchronously
pub async fn read_population_async(
    path: &Path,
    config: &PopulationConfig,
) -> Result<Vec<Individual>> {
    let start = Instant::now();
    log_operation_start("Reading population asynchronously from", path);

    let batches = read_batches_async(path, config.batch_size).await?;
    let individuals = decode_batches(batches, config).await?;

    log_operation_complete("read", path, individuals.len(), Some(start.elapsed()));
    Ok(individuals)
}

/// Load one Parquet file into a store asynchronously
pub async fn load_population_async(path: &Path, config: &PopulationConfig) -> Result<MemoryStore> {
    let store = MemoryStore::from_individuals(read_population_async(path, config).await?);
    report_dangling(&store, path);
    Ok(store)
}

/// Load every Parquet file in `dir` into one store, reading files concurrently
///
/// As with the synchronous loader, the file sorting last wins on duplicate PNRs.
pub async fn load_population_dir_async(
    dir: &Path,
    config: &PopulationConfig,
) -> Result<MemoryStore> {
    let files: Vec<PathBuf> = find_parquet_files_async(dir).await?;
    let spinner = create_spinner(Some("Loading population"));
    let chunks = try_join_all(
        files
            .iter()
            .map(|path| read_population_async(path, config)),
    )
    .await;
    finish_and_clear(&spinner);
    let chunks = chunks?;

    let store = MemoryStore::from_individuals(chunks.into_iter().flatten());
    report_dangling(&store, dir);
    Ok(store)
}
