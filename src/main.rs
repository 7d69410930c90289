use std::path::PathBuf;

use anyhow::{Context, bail};
use kinship::{LineageTraversal, PedigreeStore, PopulationConfig};
use kinship::{load_population_async, load_population_dir_async};
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(pnr)) = (args.next(), args.next()) else {
        bail!("usage: kinship <population.parquet|directory> <PNR>");
    };
    let path = PathBuf::from(path);
    let config = PopulationConfig::from_env();

    let store = if path.is_dir() {
        load_population_dir_async(&path, &config).await
    } else {
        load_population_async(&path, &config).await
    }
    .with_context(|| format!("loading population from {}", path.display()))?;
    info!("Population holds {} individuals", store.len());

    let individual = store
        .find(&pnr)?
        .with_context(|| format!("{pnr} is not in the population"))?;
    let summary = LineageTraversal::new(&store).summary(&individual)?;
    info!("{pnr} has {} known relatives", summary.relative_count());

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
