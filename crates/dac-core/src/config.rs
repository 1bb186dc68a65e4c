use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/dac/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DacConfig {
    /// Maximum number of availability probes in flight at once.
    pub max_parallel: usize,
    /// Connect timeout for each HTTP request, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout for each HTTP request, in seconds.
    pub request_timeout_secs: u64,
    /// Page size used when walking paginated catalog endpoints.
    pub page_limit: usize,
}

impl Default for DacConfig {
    fn default() -> Self {
        Self {
            max_parallel: 10,
            connect_timeout_secs: 15,
            request_timeout_secs: 60,
            page_limit: 50,
        }
    }
}

impl DacConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dac")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DacConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DacConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DacConfig = toml::from_str(&data)?;
    Ok(cfg)
}
