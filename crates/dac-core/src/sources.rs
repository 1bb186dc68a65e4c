//! Built-in source registry.
//!
//! Maps a short source name (ISTAT, ECB, ...) to the endpoint and protocol
//! needed to build its catalog and probe. SDMX sources list dataflows and
//! probe the data endpoint; CKAN sources page through the package list and
//! probe `package_show`.

use anyhow::{anyhow, Context, Result};
use std::sync::Arc;
use url::Url;

use crate::catalog::{Catalog, CkanCatalog, SdmxCatalog};
use crate::config::DacConfig;
use crate::probe::{HttpProbe, Probe, SdmxProbe};

/// Listing/probing protocol spoken by a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Sdmx,
    Ckan,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Sdmx => "sdmx",
            SourceKind::Ckan => "ckan",
        }
    }
}

/// One known open-data source.
#[derive(Debug, Clone, Copy)]
pub struct SourceSpec {
    pub name: &'static str,
    pub kind: SourceKind,
    pub base_url: &'static str,
    /// SDMX agency id; empty for CKAN sources.
    pub agency: &'static str,
    pub description: &'static str,
}

const SOURCES: &[SourceSpec] = &[
    SourceSpec {
        name: "ISTAT",
        kind: SourceKind::Sdmx,
        base_url: "https://esploradati.istat.it/SDMXWS/rest",
        agency: "IT1",
        description: "Italian National Institute of Statistics",
    },
    SourceSpec {
        name: "ECB",
        kind: SourceKind::Sdmx,
        base_url: "https://sdw-wsrest.ecb.europa.eu/service",
        agency: "ECB",
        description: "European Central Bank statistical data warehouse",
    },
    SourceSpec {
        name: "ESTAT",
        kind: SourceKind::Sdmx,
        base_url: "https://ec.europa.eu/eurostat/api/dissemination/sdmx/2.1",
        agency: "ESTAT",
        description: "Eurostat dissemination API",
    },
    SourceSpec {
        name: "OECD",
        kind: SourceKind::Sdmx,
        base_url: "https://sdmx.oecd.org/public/rest",
        agency: "OECD",
        description: "OECD data explorer",
    },
    SourceSpec {
        name: "WB",
        kind: SourceKind::Sdmx,
        base_url: "https://api.worldbank.org/v2/sdmx/rest",
        agency: "WB",
        description: "World Bank SDMX service",
    },
    SourceSpec {
        name: "INPS",
        kind: SourceKind::Ckan,
        base_url: "https://serviziweb2.inps.it/odapi",
        agency: "",
        description: "Italian social security open-data portal",
    },
];

pub fn builtin_sources() -> &'static [SourceSpec] {
    SOURCES
}

/// Look up a source by name, case-insensitively.
pub fn find_source(name: &str) -> Result<&'static SourceSpec> {
    SOURCES
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            let known: Vec<&str> = SOURCES.iter().map(|s| s.name).collect();
            anyhow!("unknown source '{}' (known: {})", name, known.join(", "))
        })
}

impl SourceSpec {
    /// Build the dataset lister for this source.
    pub fn catalog(&self, cfg: &DacConfig) -> Result<Box<dyn Catalog>> {
        match self.kind {
            SourceKind::Sdmx => Ok(Box::new(SdmxCatalog::new(self.base_url, self.agency, cfg)?)),
            SourceKind::Ckan => Ok(Box::new(CkanCatalog::new(self.base_url, cfg)?)),
        }
    }

    /// Build the availability probe for this source.
    pub fn probe(&self, cfg: &DacConfig) -> Result<Arc<dyn Probe>> {
        let base = Url::parse(self.base_url)
            .with_context(|| format!("invalid base URL {}", self.base_url))?;
        match self.kind {
            SourceKind::Sdmx => Ok(Arc::new(SdmxProbe::new(base, cfg))),
            SourceKind::Ckan => {
                let template = format!(
                    "{}/package_show?id={{id}}",
                    base.as_str().trim_end_matches('/')
                );
                Ok(Arc::new(HttpProbe::new(template, None, cfg)))
            }
        }
    }
}
