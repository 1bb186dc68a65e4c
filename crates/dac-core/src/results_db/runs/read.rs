//! Run read operations: list, fetch, outcomes.

use anyhow::Result;
use sqlx::Row;

use crate::checker::{ProbeOutcome, ProbeStatus};

use super::super::db::ResultsDb;
use super::super::types::{RunId, RunSummary};

fn summary_from_row(row: &sqlx::sqlite::SqliteRow) -> RunSummary {
    RunSummary {
        id: row.get("id"),
        source: row.get("source"),
        started_at: row.get("started_at"),
        finished_at: row.get("finished_at"),
        total: row.get("total"),
        ok_count: row.get("ok_count"),
        failed_count: row.get("failed_count"),
    }
}

impl ResultsDb {
    /// All stored runs, newest first.
    pub async fn list_runs(&self) -> Result<Vec<RunSummary>> {
        let rows = sqlx::query(
            r#"
            SELECT id, source, started_at, finished_at, total, ok_count, failed_count
            FROM runs
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(summary_from_row).collect())
    }

    /// One run by id, or None.
    pub async fn get_run(&self, id: RunId) -> Result<Option<RunSummary>> {
        let row = sqlx::query(
            r#"
            SELECT id, source, started_at, finished_at, total, ok_count, failed_count
            FROM runs
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(summary_from_row))
    }

    /// The most recently stored run, or None if the database is empty.
    pub async fn latest_run(&self) -> Result<Option<RunSummary>> {
        let row = sqlx::query(
            r#"
            SELECT id, source, started_at, finished_at, total, ok_count, failed_count
            FROM runs
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(summary_from_row))
    }

    /// All outcomes of one run, in stored (completion) order.
    pub async fn get_outcomes(&self, run_id: RunId) -> Result<Vec<ProbeOutcome>> {
        let rows = sqlx::query(
            r#"
            SELECT dataset_id, label, status, error
            FROM outcomes
            WHERE run_id = ?1
            ORDER BY id ASC
            "#,
        )
        .bind(run_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| {
                let status: String = row.get("status");
                ProbeOutcome {
                    id: row.get("dataset_id"),
                    label: row.get("label"),
                    status: ProbeStatus::from_str(&status),
                    error: row.get("error"),
                }
            })
            .collect())
    }
}
