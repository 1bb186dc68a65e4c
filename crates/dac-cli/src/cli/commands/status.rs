//! `dac status` – show stored runs.

use anyhow::Result;
use dac_core::results_db::ResultsDb;

pub async fn run_status(db: &ResultsDb) -> Result<()> {
    let runs = db.list_runs().await?;
    if runs.is_empty() {
        println!("No runs in database.");
    } else {
        println!(
            "{:<6} {:<8} {:<8} {:<8} {:<8} {}",
            "ID", "SOURCE", "TOTAL", "OK", "FAILED", "FINISHED"
        );
        for r in runs {
            println!(
                "{:<6} {:<8} {:<8} {:<8} {:<8} {}",
                r.id, r.source, r.total, r.ok_count, r.failed_count, r.finished_at
            );
        }
    }
    Ok(())
}
