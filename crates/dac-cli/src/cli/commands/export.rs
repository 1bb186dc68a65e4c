//! `dac export` – dump a stored run's outcomes to CSV.

use anyhow::{anyhow, Result};
use dac_core::report;
use dac_core::results_db::{ResultsDb, RunId};
use std::path::{Path, PathBuf};

pub async fn run_export(db: &ResultsDb, run_id: Option<RunId>, output: Option<&Path>) -> Result<()> {
    let run = match run_id {
        Some(id) => db
            .get_run(id)
            .await?
            .ok_or_else(|| anyhow!("no run with id {}", id))?,
        None => db.latest_run().await?.ok_or_else(|| anyhow!("no stored runs"))?,
    };

    let outcomes = db.get_outcomes(run.id).await?;
    let default_path = PathBuf::from(format!("run_{}_outcomes.csv", run.id));
    let path = output.unwrap_or(&default_path);
    report::write_outcomes(path, &outcomes)?;
    println!(
        "Exported {} outcomes of run {} ({}) to {}",
        outcomes.len(),
        run.id,
        run.source,
        path.display()
    );
    Ok(())
}
