//! Run write operations: record, remove.

use anyhow::Result;

use crate::checker::ProbeOutcome;

use super::super::db::{unix_timestamp, ResultsDb};
use super::super::types::RunId;

impl ResultsDb {
    /// Store one completed batch run and all its outcomes in a single
    /// transaction. `started_at` is the Unix time the caller captured before
    /// the batch began; `finished_at` is taken now.
    pub async fn record_run(
        &self,
        source: &str,
        started_at: i64,
        outcomes: &[ProbeOutcome],
    ) -> Result<RunId> {
        let finished_at = unix_timestamp();
        let ok_count = outcomes.iter().filter(|o| o.is_ok()).count() as i64;
        let failed_count = outcomes.len() as i64 - ok_count;

        let mut tx = self.pool.begin().await?;
        let run_id = sqlx::query(
            r#"
            INSERT INTO runs (source, started_at, finished_at, total, ok_count, failed_count)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(source)
        .bind(started_at)
        .bind(finished_at)
        .bind(outcomes.len() as i64)
        .bind(ok_count)
        .bind(failed_count)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        for outcome in outcomes {
            sqlx::query(
                r#"
                INSERT INTO outcomes (run_id, dataset_id, label, status, error)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(run_id)
            .bind(&outcome.id)
            .bind(&outcome.label)
            .bind(outcome.status.as_str())
            .bind(&outcome.error)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(run_id)
    }

    /// Permanently remove a run and its outcomes.
    pub async fn remove_run(&self, id: RunId) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM outcomes WHERE run_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM runs WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }
}
