//! Plain HTTP availability probe: GET a per-dataset URL, require 2xx.

use std::time::Duration;

use crate::config::DacConfig;

use super::{Probe, ProbeError};

/// Probes a dataset by substituting its identifier into a URL template
/// (`{id}` placeholder) and issuing a GET. The body is discarded; only the
/// status code decides availability.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    url_template: String,
    accept: Option<String>,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(url_template: impl Into<String>, accept: Option<String>, cfg: &DacConfig) -> Self {
        Self {
            url_template: url_template.into(),
            accept,
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.request_timeout(),
        }
    }

    fn url_for(&self, id: &str) -> String {
        self.url_template.replace("{id}", id)
    }
}

impl Probe for HttpProbe {
    fn check(&self, id: &str) -> Result<(), ProbeError> {
        let url = self.url_for(id);

        let mut easy = curl::easy::Easy::new();
        easy.url(&url)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        if let Some(accept) = &self.accept {
            let mut list = curl::easy::List::new();
            list.append(&format!("Accept: {}", accept))?;
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            // Discard the body; without a write callback curl writes to stdout.
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if code < 200 || code >= 300 {
            return Err(ProbeError::Http(code));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_substitutes_identifier() {
        let cfg = DacConfig::default();
        let probe = HttpProbe::new("https://example.org/odapi/package_show?id={id}", None, &cfg);
        assert_eq!(
            probe.url_for("pensioni-2023"),
            "https://example.org/odapi/package_show?id=pensioni-2023"
        );
    }

    #[test]
    fn url_for_without_placeholder_is_unchanged() {
        let cfg = DacConfig::default();
        let probe = HttpProbe::new("https://example.org/ping", None, &cfg);
        assert_eq!(probe.url_for("X"), "https://example.org/ping");
    }
}
