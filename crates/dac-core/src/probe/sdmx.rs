//! SDMX data probe: fetch the first observation of a dataflow and verify
//! the service actually returns data for it.
//!
//! A dataflow can be listed by the structure endpoint yet yield nothing from
//! the data endpoint (decommissioned or embargoed flows), so a 2xx alone is
//! not enough; the SDMX-JSON payload must contain at least one data set with
//! series or observations.

mod parse;

use std::time::Duration;
use url::Url;

use crate::config::DacConfig;

use super::{Probe, ProbeError};

const DATA_ACCEPT: &str = "application/vnd.sdmx.data+json;version=1.0.0-wd";

/// Probes one SDMX dataflow through the `/data/{flow}` endpoint.
#[derive(Debug, Clone)]
pub struct SdmxProbe {
    base: Url,
    connect_timeout: Duration,
    timeout: Duration,
}

impl SdmxProbe {
    pub fn new(base: Url, cfg: &DacConfig) -> Self {
        Self {
            base,
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.request_timeout(),
        }
    }

    fn data_url(&self, flow_id: &str) -> String {
        // One observation is enough to prove the flow serves data.
        format!(
            "{}/data/{}?firstNObservations=1",
            self.base.as_str().trim_end_matches('/'),
            flow_id
        )
    }
}

impl Probe for SdmxProbe {
    fn check(&self, id: &str) -> Result<(), ProbeError> {
        let url = self.data_url(id);
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&url)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        list.append(&format!("Accept: {}", DATA_ACCEPT))?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if code < 200 || code >= 300 {
            return Err(ProbeError::Http(code));
        }

        parse::validate_data(&body)
    }
}
