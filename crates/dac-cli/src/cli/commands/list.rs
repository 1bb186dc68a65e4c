//! `dac list` – enumerate the datasets a source publishes.

use anyhow::Result;
use dac_core::config::DacConfig;
use dac_core::report;
use dac_core::sources;
use std::path::Path;

pub async fn run_list(cfg: &DacConfig, source: &str, output: Option<&Path>) -> Result<()> {
    let spec = sources::find_source(source)?;
    let catalog = spec.catalog(cfg)?;
    let datasets = tokio::task::spawn_blocking(move || catalog.list())
        .await
        .map_err(|e| anyhow::anyhow!("catalog task join: {}", e))??;

    match output {
        Some(path) => {
            report::write_datasets(path, &datasets)?;
            println!("{} datasets written to {}", datasets.len(), path.display());
        }
        None => {
            for dataset in &datasets {
                println!("{:<20} {}", dataset.id, dataset.label);
            }
            println!("{} datasets available from {}.", datasets.len(), spec.name);
        }
    }
    Ok(())
}
