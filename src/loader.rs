//! Population register loading
//!
//! Reads individuals from Parquet files into a `MemoryStore` and writes them
//! back. Bulk loading bypasses the store's reference checks because parents
//! and children can arrive in any order; `dangling_references` reports what
//! is left unresolved afterwards.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use itertools::Itertools;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use rayon::prelude::*;

use crate::config::PopulationConfig;
use crate::error::util::{safe_open_file, validate_directory};
use crate::error::Result;
use crate::models::{Individual, ParentRole};
use crate::store::MemoryStore;
use crate::utils::logging::{
    create_main_progress_bar, finish_and_clear, log_operation_complete, log_operation_start,
    log_warning,
};

/// A parent slot pointing at a PNR that is not in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    /// Record holding the reference
    pub pnr: String,
    /// Slot holding the reference
    pub role: ParentRole,
    /// Referenced PNR that could not be resolved
    pub missing: String,
}

/// Read every individual from one Parquet file
pub fn read_population(path: &Path, config: &PopulationConfig) -> Result<Vec<Individual>> {
    let start = Instant::now();
    log_operation_start("Reading population from", path);

    let file = safe_open_file(path, "population register")?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?
        .with_batch_size(config.batch_size)
        .build()?;

    let mut individuals = Vec::new();
    for batch in reader {
        individuals.extend(Individual::from_record_batch_with(&batch?, config)?);
    }

    log_operation_complete("read", path, individuals.len(), Some(start.elapsed()));
    Ok(individuals)
}

/// Load one Parquet file into a store
pub fn load_population(path: &Path, config: &PopulationConfig) -> Result<MemoryStore> {
    let store = MemoryStore::from_individuals(read_population(path, config)?);
    report_dangling(&store, path);
    Ok(store)
}

/// Find all Parquet files in a directory, ordered by file name
pub fn find_parquet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    validate_directory(dir, "population register")?;

    let files = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|entry| entry.path()))
        .filter_ok(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "parquet"))
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .sorted()
        .collect_vec();

    if files.is_empty() {
        log_warning("No Parquet files found in directory", Some(dir));
    }
    Ok(files)
}

/// Load every Parquet file in `dir` into one store
///
/// Files are decoded in parallel. When a PNR occurs in several files the
/// record from the file sorting last wins.
pub fn load_population_dir(dir: &Path, config: &PopulationConfig) -> Result<MemoryStore> {
    let start = Instant::now();
    let files = find_parquet_files(dir)?;

    let progress = create_main_progress_bar(files.len() as u64, Some("Loading population"));
    let chunks = files
        .par_iter()
        .map(|path| {
            let individuals = read_population(path, config);
            progress.inc(1);
            individuals
        })
        .collect::<Result<Vec<_>>>()?;
    finish_and_clear(&progress);

    let total: usize = chunks.iter().map(Vec::len).sum();
    let store = MemoryStore::from_individuals(chunks.into_iter().flatten());
    if store.len() < total {
        log_warning(
            &format!("{} duplicate PNRs replaced while loading", total - store.len()),
            Some(dir),
        );
    }

    report_dangling(&store, dir);
    log_operation_complete("loaded", dir, store.len(), Some(start.elapsed()));
    Ok(store)
}

/// Write individuals to a Parquet file using the configured column names
pub fn write_population(
    path: &Path,
    individuals: &[Individual],
    config: &PopulationConfig,
) -> Result<()> {
    let batch = Individual::to_record_batch_with(individuals, config)?;
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;
    log_operation_complete("wrote", path, individuals.len(), None);
    Ok(())
}

/// Every parent slot in `store` whose PNR is not itself in `store`
#[must_use]
pub fn dangling_references(store: &MemoryStore) -> Vec<DanglingReference> {
    store
        .all()
        .into_iter()
        .flat_map(|individual| {
            ParentRole::ALL.into_iter().filter_map(move |role| {
                individual
                    .parent_pnr(role)
                    .filter(|parent| !store.contains(parent))
                    .map(|parent| DanglingReference {
                        pnr: individual.pnr.clone(),
                        role,
                        missing: parent.to_string(),
                    })
            })
        })
        .collect()
}

/// Warn when `store` holds parent references that do not resolve
pub(crate) fn report_dangling(store: &MemoryStore, source: &Path) {
    let dangling = dangling_references(store);
    if !dangling.is_empty() {
        log_warning(
            &format!("{} parent references point outside the population", dangling.len()),
            Some(source),
        );
    }
}
