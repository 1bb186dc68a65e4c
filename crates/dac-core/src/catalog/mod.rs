//! Catalog interface for enumerating the datasets a source offers.
//!
//! The checker only depends on the `Catalog` trait and does not know about
//! SDMX, CKAN, or any other specific listing format.

mod ckan;
mod sdmx;

pub use ckan::CkanCatalog;
pub use sdmx::SdmxCatalog;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One remote dataset as named by its source: identifier plus a
/// human-readable label. Identifiers are taken as-is; a batch with duplicate
/// identifiers probes each occurrence independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRef {
    pub id: String,
    pub label: String,
}

/// Trait implemented by dataset listers (SDMX dataflow endpoint, CKAN
/// package list, a CSV on disk, ...).
pub trait Catalog: Send + Sync {
    fn list(&self) -> Result<Vec<DatasetRef>>;
}

/// Performs a GET and returns the response body.
///
/// Follows redirects. Runs in the current thread; call from `spawn_blocking`
/// if used from async code.
pub(crate) fn fetch_bytes(
    url: &str,
    accept: Option<&str>,
    connect_timeout: Duration,
    timeout: Duration,
) -> Result<Vec<u8>> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.connect_timeout(connect_timeout)?;
    easy.timeout(timeout)?;

    if let Some(accept) = accept {
        let mut list = curl::easy::List::new();
        list.append(&format!("Accept: {}", accept))?;
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    Ok(body)
}
