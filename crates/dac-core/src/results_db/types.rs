//! Types used by the run-history database.

/// Run identifier.
pub type RunId = i64;

/// Summary view of one stored batch run, used by the CLI `status` command.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub id: RunId,
    pub source: String,
    pub started_at: i64,
    pub finished_at: i64,
    pub total: i64,
    pub ok_count: i64,
    pub failed_count: i64,
}
