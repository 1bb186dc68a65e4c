//! Logging init: file under the XDG state dir, with stderr fallback.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,dac=debug"))
}

fn open_log_file() -> Result<(Arc<fs::File>, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dac")?;
    let log_dir = xdg_dirs.get_state_home().join("dac");
    fs::create_dir_all(&log_dir)?;
    let path = log_dir.join("dac.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((Arc::new(file), path))
}

/// Initialize structured logging to `~/.local/state/dac/dac.log`.
/// If the log file cannot be opened (e.g. state dir unwritable), logs go to
/// stderr instead so the CLI still runs.
pub fn init() {
    match open_log_file() {
        Ok((file, path)) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(file)
                .with_ansi(false)
                .init();
            tracing::info!("dac logging initialized at {}", path.display());
        }
        Err(err) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .init();
            tracing::warn!("log file unavailable ({}), logging to stderr", err);
        }
    }
}
