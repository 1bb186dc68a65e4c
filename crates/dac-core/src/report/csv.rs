//! CSV reading and writing for dataset lists and outcome reports.

use anyhow::{Context, Result};
use std::path::Path;

use crate::catalog::DatasetRef;
use crate::checker::ProbeOutcome;

/// Write one row per probe outcome (`id,label,status,error`).
pub fn write_outcomes(path: &Path, outcomes: &[ProbeOutcome]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    for outcome in outcomes {
        wtr.serialize(outcome)?;
    }
    wtr.flush()?;
    tracing::info!("{} outcomes written to {}", outcomes.len(), path.display());
    Ok(())
}

/// Write a dataset list (`id,label`), e.g. the result of `dac list`.
pub fn write_datasets(path: &Path, datasets: &[DatasetRef]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    for dataset in datasets {
        wtr.serialize(dataset)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a dataset list previously written by `write_datasets` (or any CSV
/// with `id,label` columns). Used to re-check a saved listing.
pub fn read_datasets(path: &Path) -> Result<Vec<DatasetRef>> {
    let mut rdr =
        csv::Reader::from_path(path).with_context(|| format!("open {}", path.display()))?;
    let mut out = Vec::new();
    for record in rdr.deserialize() {
        let dataset: DatasetRef = record.with_context(|| format!("parse {}", path.display()))?;
        out.push(dataset);
    }
    Ok(out)
}
