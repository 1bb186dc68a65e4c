//! Per-dataset outcome records.

use serde::{Deserialize, Serialize};

use crate::catalog::DatasetRef;

/// Whether a dataset's probe succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Failed,
}

impl ProbeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProbeStatus::Ok => "ok",
            ProbeStatus::Failed => "failed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "ok" => ProbeStatus::Ok,
            _ => ProbeStatus::Failed,
        }
    }
}

/// Result of probing one dataset. Created exactly once per input dataset;
/// `error` is set if and only if the probe failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeOutcome {
    pub id: String,
    pub label: String,
    pub status: ProbeStatus,
    pub error: Option<String>,
}

impl ProbeOutcome {
    pub fn ok(dataset: DatasetRef) -> Self {
        Self {
            id: dataset.id,
            label: dataset.label,
            status: ProbeStatus::Ok,
            error: None,
        }
    }

    pub fn failed(dataset: DatasetRef, error: String) -> Self {
        let error = if error.is_empty() {
            "probe failed".to_string()
        } else {
            error
        };
        Self {
            id: dataset.id,
            label: dataset.label,
            status: ProbeStatus::Failed,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ProbeStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds(id: &str) -> DatasetRef {
        DatasetRef {
            id: id.to_string(),
            label: format!("{} label", id),
        }
    }

    #[test]
    fn ok_outcome_has_no_error() {
        let o = ProbeOutcome::ok(ds("A"));
        assert_eq!(o.status, ProbeStatus::Ok);
        assert!(o.error.is_none());
        assert!(o.is_ok());
    }

    #[test]
    fn failed_outcome_always_carries_a_message() {
        let o = ProbeOutcome::failed(ds("B"), "HTTP 500".to_string());
        assert_eq!(o.status, ProbeStatus::Failed);
        assert_eq!(o.error.as_deref(), Some("HTTP 500"));

        let o = ProbeOutcome::failed(ds("C"), String::new());
        assert!(!o.error.unwrap().is_empty());
    }

    #[test]
    fn status_string_roundtrip() {
        assert_eq!(ProbeStatus::from_str(ProbeStatus::Ok.as_str()), ProbeStatus::Ok);
        assert_eq!(
            ProbeStatus::from_str(ProbeStatus::Failed.as_str()),
            ProbeStatus::Failed
        );
        // Unknown states read back as failed rather than panicking.
        assert_eq!(ProbeStatus::from_str("na"), ProbeStatus::Failed);
    }
}
