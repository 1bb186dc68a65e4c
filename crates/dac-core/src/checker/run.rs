//! Run a batch of availability probes with bounded parallelism.
//!
//! Keeps up to `max_parallel` probes in flight at once; when one finishes,
//! the next pending dataset is started until the batch is drained.

use anyhow::Result;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::catalog::DatasetRef;
use crate::probe::Probe;

use super::outcome::ProbeOutcome;
use super::progress::ProgressUpdate;

/// Probes every dataset in `resources`, at most `max_parallel` at a time,
/// and returns one outcome per input dataset in completion order.
///
/// Probe failures are converted into `Failed` outcomes and never abort the
/// batch or affect sibling probes. The returned error covers only the worker
/// machinery itself (a panicked or cancelled worker), in which case no
/// partial result is returned.
///
/// Completion order is not input order; callers that need input order must
/// sort afterwards. Duplicate identifiers are probed independently. Each
/// completion is also reported on `progress_tx` when provided.
pub async fn check_all(
    resources: &[DatasetRef],
    max_parallel: usize,
    probe: Arc<dyn Probe>,
    progress_tx: Option<mpsc::Sender<ProgressUpdate>>,
) -> Result<Vec<ProbeOutcome>> {
    let max_parallel = max_parallel.max(1);
    let total = resources.len();
    let mut pending: VecDeque<DatasetRef> = resources.iter().cloned().collect();
    let mut outcomes: Vec<ProbeOutcome> = Vec::with_capacity(total);
    let mut join_set = tokio::task::JoinSet::new();

    loop {
        while join_set.len() < max_parallel {
            let Some(dataset) = pending.pop_front() else {
                break;
            };
            let probe = Arc::clone(&probe);
            join_set.spawn_blocking(move || match probe.check(&dataset.id) {
                Ok(()) => ProbeOutcome::ok(dataset),
                Err(e) => ProbeOutcome::failed(dataset, e.to_string()),
            });
        }

        if join_set.is_empty() {
            break;
        }

        let Some(res) = join_set.join_next().await else {
            break;
        };
        let outcome = res.map_err(|e| anyhow::anyhow!("probe task join: {}", e))?;
        let completed = outcomes.len() + 1;
        tracing::info!("checked {}/{}: {}", completed, total, outcome.id);
        if let Some(tx) = &progress_tx {
            let _ = tx
                .send(ProgressUpdate {
                    completed,
                    total,
                    id: outcome.id.clone(),
                })
                .await;
        }
        outcomes.push(outcome);
    }

    Ok(outcomes)
}
