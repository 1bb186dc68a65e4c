//! `dac check` – probe every dataset of a source and report availability.

use anyhow::Result;
use dac_core::checker::{check_all, ProgressUpdate};
use dac_core::config::DacConfig;
use dac_core::report;
use dac_core::results_db::{unix_timestamp, ResultsDb};
use dac_core::sources;
use std::path::Path;

pub async fn run_check(
    db: &ResultsDb,
    cfg: &DacConfig,
    source: &str,
    input: Option<&Path>,
    jobs: Option<usize>,
    output: Option<&Path>,
    no_store: bool,
) -> Result<()> {
    let spec = sources::find_source(source)?;

    let datasets = match input {
        Some(path) => report::read_datasets(path)?,
        None => {
            let catalog = spec.catalog(cfg)?;
            tokio::task::spawn_blocking(move || catalog.list())
                .await
                .map_err(|e| anyhow::anyhow!("catalog task join: {}", e))??
        }
    };
    if datasets.is_empty() {
        println!("No datasets to check.");
        return Ok(());
    }

    let max_parallel = jobs.unwrap_or(cfg.max_parallel).max(1);
    println!(
        "Checking {} datasets from {} ({} in parallel)...",
        datasets.len(),
        spec.name,
        max_parallel
    );

    let (progress_tx, mut progress_rx) = tokio::sync::mpsc::channel::<ProgressUpdate>(16);
    let progress_handle = tokio::spawn(async move {
        while let Some(p) = progress_rx.recv().await {
            println!("  checked {}/{}: {}", p.completed, p.total, p.id);
        }
    });

    let probe = spec.probe(cfg)?;
    let started_at = unix_timestamp();
    let outcomes = check_all(&datasets, max_parallel, probe, Some(progress_tx)).await?;
    let _ = progress_handle.await;

    let ok = outcomes.iter().filter(|o| o.is_ok()).count();
    let failed = outcomes.len() - ok;

    if let Some(path) = output {
        report::write_outcomes(path, &outcomes)?;
        println!("Report written to {}", path.display());
    }
    if !no_store {
        let run_id = db.record_run(spec.name, started_at, &outcomes).await?;
        tracing::info!("run {} stored with {} outcomes", run_id, outcomes.len());
        println!("Stored as run {}.", run_id);
    }
    println!("{} ok, {} failed out of {}.", ok, failed, outcomes.len());
    Ok(())
}
