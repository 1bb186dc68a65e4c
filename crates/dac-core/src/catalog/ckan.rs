//! CKAN-style package listing with limit/offset pagination.
//!
//! Walks `current_package_list_with_resources` (the INPS open-data portal
//! shape) page by page until the service returns an empty page.

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::config::DacConfig;

use super::{fetch_bytes, Catalog, DatasetRef};

/// Lists datasets from a CKAN-style portal.
#[derive(Debug, Clone)]
pub struct CkanCatalog {
    base: Url,
    page_limit: usize,
    connect_timeout: Duration,
    timeout: Duration,
}

impl CkanCatalog {
    pub fn new(base_url: &str, cfg: &DacConfig) -> Result<Self> {
        let base = Url::parse(base_url).with_context(|| format!("invalid base URL {}", base_url))?;
        Ok(Self {
            base,
            page_limit: cfg.page_limit.max(1),
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.request_timeout(),
        })
    }

    fn page_url(&self, offset: usize) -> String {
        format!(
            "{}/current_package_list_with_resources?limit={}&offset={}",
            self.base.as_str().trim_end_matches('/'),
            self.page_limit,
            offset
        )
    }
}

impl Catalog for CkanCatalog {
    fn list(&self) -> Result<Vec<DatasetRef>> {
        let mut all = Vec::new();
        let mut offset = 0usize;
        loop {
            let url = self.page_url(offset);
            tracing::debug!(url = %url, "fetching package page");
            let body = fetch_bytes(&url, None, self.connect_timeout, self.timeout)?;
            let page = parse_package_page(&body)?;
            if page.is_empty() {
                break;
            }
            all.extend(page);
            offset += self.page_limit;
        }
        tracing::info!("{} packages listed from {}", all.len(), self.base);
        Ok(all)
    }
}

/// Parse one page of a CKAN package list into dataset references.
/// Packages without an `id` are skipped; a missing title falls back to the id.
pub(crate) fn parse_package_page(body: &[u8]) -> Result<Vec<DatasetRef>> {
    let v: Value = serde_json::from_slice(body).context("package list response is not valid JSON")?;
    let packages = v
        .get("result")
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("package list response missing result array"))?;

    let mut out = Vec::with_capacity(packages.len());
    for package in packages {
        let Some(id) = package.get("id").and_then(Value::as_str) else {
            continue;
        };
        let label = package
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(id)
            .to_string();
        out.push(DatasetRef {
            id: id.to_string(),
            label,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_package_page_ids_and_titles() {
        let body = br#"{
            "result": [
                {"id": "pensioni-2023", "title": "Pensioni erogate 2023", "notes": "..."},
                {"id": "untitled-ds"}
            ]
        }"#;
        let page = parse_package_page(body).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, "pensioni-2023");
        assert_eq!(page[0].label, "Pensioni erogate 2023");
        assert_eq!(page[1].label, "untitled-ds");
    }

    #[test]
    fn parse_package_page_empty_result() {
        let page = parse_package_page(br#"{"result": []}"#).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn parse_package_page_rejects_wrong_shape() {
        assert!(parse_package_page(br#"{"success": true}"#).is_err());
        assert!(parse_package_page(b"<html>").is_err());
    }

    #[test]
    fn page_url_carries_limit_and_offset() {
        let cfg = DacConfig {
            page_limit: 25,
            ..DacConfig::default()
        };
        let cat = CkanCatalog::new("https://example.org/odapi/", &cfg).unwrap();
        assert_eq!(
            cat.page_url(50),
            "https://example.org/odapi/current_package_list_with_resources?limit=25&offset=50"
        );
    }
}
