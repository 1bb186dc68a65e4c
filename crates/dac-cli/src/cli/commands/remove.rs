//! `dac remove` – delete a stored run and its outcomes.

use anyhow::Result;
use dac_core::results_db::{ResultsDb, RunId};

pub async fn run_remove(db: &ResultsDb, id: RunId) -> Result<()> {
    let Some(run) = db.get_run(id).await? else {
        anyhow::bail!("no run with id {}", id);
    };
    db.remove_run(id).await?;
    println!("Removed run {} ({}, {} outcomes).", id, run.source, run.total);
    Ok(())
}
