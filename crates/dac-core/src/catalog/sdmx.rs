//! SDMX dataflow listing.
//!
//! Queries the `/dataflow/{agency}` endpoint of an SDMX REST web service
//! (ISTAT, ECB, Eurostat, ...) and turns the SDMX-JSON structure response
//! into `DatasetRef`s.

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::config::DacConfig;

use super::{fetch_bytes, Catalog, DatasetRef};

const STRUCTURE_ACCEPT: &str = "application/vnd.sdmx.structure+json;version=1.0";

/// Lists the dataflows an SDMX web service publishes for one agency.
#[derive(Debug, Clone)]
pub struct SdmxCatalog {
    base: Url,
    agency: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl SdmxCatalog {
    pub fn new(base_url: &str, agency: &str, cfg: &DacConfig) -> Result<Self> {
        let base = Url::parse(base_url).with_context(|| format!("invalid base URL {}", base_url))?;
        Ok(Self {
            base,
            agency: agency.to_string(),
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.request_timeout(),
        })
    }

    fn dataflow_url(&self) -> String {
        format!(
            "{}/dataflow/{}",
            self.base.as_str().trim_end_matches('/'),
            self.agency
        )
    }
}

impl Catalog for SdmxCatalog {
    fn list(&self) -> Result<Vec<DatasetRef>> {
        let url = self.dataflow_url();
        tracing::debug!(url = %url, "fetching SDMX dataflow list");
        let body = fetch_bytes(&url, Some(STRUCTURE_ACCEPT), self.connect_timeout, self.timeout)?;
        let flows = parse_dataflows(&body)?;
        tracing::info!("{} dataflows listed from {}", flows.len(), self.base);
        Ok(flows)
    }
}

/// Parse an SDMX-JSON structure response into dataset references.
///
/// Flows without an `id` are skipped; a missing or non-string name falls
/// back to the flow id. SDMX-JSON 2.0 localizes names as `{locale: text}`
/// objects, so both forms are accepted.
pub(crate) fn parse_dataflows(body: &[u8]) -> Result<Vec<DatasetRef>> {
    let v: Value = serde_json::from_slice(body).context("dataflow response is not valid JSON")?;
    let flows = v
        .pointer("/data/dataflows")
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("dataflow response missing data.dataflows"))?;

    let mut out = Vec::with_capacity(flows.len());
    for flow in flows {
        let Some(id) = flow.get("id").and_then(Value::as_str) else {
            continue;
        };
        let label = flow_name(flow).unwrap_or_else(|| id.to_string());
        out.push(DatasetRef {
            id: id.to_string(),
            label,
        });
    }
    Ok(out)
}

fn flow_name(flow: &Value) -> Option<String> {
    match flow.get("name") {
        Some(Value::String(s)) => Some(s.clone()),
        // Localized name object: prefer English, else any locale.
        Some(Value::Object(map)) => map
            .get("en")
            .or_else(|| map.values().next())
            .and_then(Value::as_str)
            .map(String::from),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dataflows_plain_names() {
        let body = br#"{
            "data": {
                "dataflows": [
                    {"id": "EXR", "name": "Exchange Rates"},
                    {"id": "151_914", "name": "Consumer prices"}
                ]
            }
        }"#;
        let flows = parse_dataflows(body).unwrap();
        assert_eq!(flows.len(), 2);
        assert_eq!(flows[0].id, "EXR");
        assert_eq!(flows[0].label, "Exchange Rates");
        assert_eq!(flows[1].id, "151_914");
    }

    #[test]
    fn parse_dataflows_localized_names() {
        let body = br#"{
            "data": {
                "dataflows": [
                    {"id": "A", "name": {"en": "Population", "it": "Popolazione"}},
                    {"id": "B", "name": {"it": "Solo italiano"}}
                ]
            }
        }"#;
        let flows = parse_dataflows(body).unwrap();
        assert_eq!(flows[0].label, "Population");
        assert_eq!(flows[1].label, "Solo italiano");
    }

    #[test]
    fn parse_dataflows_missing_name_falls_back_to_id() {
        let body = br#"{"data": {"dataflows": [{"id": "NONAME"}]}}"#;
        let flows = parse_dataflows(body).unwrap();
        assert_eq!(flows[0].label, "NONAME");
    }

    #[test]
    fn parse_dataflows_rejects_wrong_shape() {
        assert!(parse_dataflows(br#"{"data": {}}"#).is_err());
        assert!(parse_dataflows(b"not json").is_err());
    }

    #[test]
    fn dataflow_url_strips_trailing_slash() {
        let cfg = DacConfig::default();
        let cat = SdmxCatalog::new("https://example.org/rest/", "IT1", &cfg).unwrap();
        assert_eq!(cat.dataflow_url(), "https://example.org/rest/dataflow/IT1");
    }
}
