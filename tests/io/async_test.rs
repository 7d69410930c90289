use kinship::async_io::find_parquet_files_async;
use kinship::{
    Gender, Individual, KinshipError, LineageTraversal, PopulationConfig, load_population_async,
    load_population_dir_async, read_population_async, write_population,
};
use tempfile::TempDir;

use crate::utils::{fetch, pnrs};

fn three_generations() -> Vec<Individual> {
    vec![
        Individual::new("GF", Gender::Male),
        Individual::new("GM", Gender::Female),
        Individual::new("P", Gender::Male).with_father("GF").with_mother("GM"),
        Individual::new("Q", Gender::Female),
        Individual::new("K1", Gender::Female).with_father("P").with_mother("Q"),
        Individual::new("K2", Gender::Male).with_father("P").with_mother("Q"),
    ]
}

/// Test async reading matches what was written
#[tokio::test]
async fn test_async_read() -> kinship::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("population.parquet");
    let config = PopulationConfig {
        batch_size: 2,
        ..PopulationConfig::default()
    };
    write_population(&path, &three_generations(), &config)?;

    let individuals = read_population_async(&path, &config).await?;
    assert_eq!(individuals, three_generations());

    let store = load_population_async(&path, &config).await?;
    let k1 = fetch(&store, "K1");
    let traversal = LineageTraversal::new(&store);
    assert_eq!(pnrs(&traversal.ancestors(&k1)?), ["P", "Q", "GF", "GM"]);
    assert_eq!(pnrs(&traversal.siblings(&k1)?.unwrap_or_default()), ["K2"]);
    Ok(())
}

/// Test concurrent loading of a directory of population files
#[tokio::test]
async fn test_async_directory_load() -> kinship::Result<()> {
    let dir = TempDir::new()?;
    let config = PopulationConfig::default();
    let population = three_generations();
    for (i, chunk) in population.chunks(2).enumerate() {
        write_population(&dir.path().join(format!("part_{i}.parquet")), chunk, &config)?;
    }

    let files = find_parquet_files_async(dir.path()).await?;
    assert_eq!(files.len(), 3);

    let store = load_population_dir_async(dir.path(), &config).await?;
    assert_eq!(store.len(), population.len());

    let gf = fetch(&store, "GF");
    let traversal = LineageTraversal::new(&store);
    assert_eq!(pnrs(&traversal.descendants(&gf)?), ["P", "K1", "K2"]);
    Ok(())
}

#[tokio::test]
async fn test_async_missing_directory() {
    let config = PopulationConfig::default();
    let result = load_population_dir_async(std::path::Path::new("/nonexistent/dir"), &config).await;
    assert!(matches!(result, Err(KinshipError::Io(_))));
}
