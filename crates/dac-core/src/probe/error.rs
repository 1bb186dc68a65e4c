//! Probe failure type.
//!
//! Kept as an enum (rather than anyhow) so the checker can convert failures
//! into outcome records with a stable, human-readable message.

use thiserror::Error;

/// Error returned by a single availability probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Curl reported an error (timeout, DNS, connection refused, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Response received but not in the expected format.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Response was well-formed but carried no data.
    #[error("no observations returned")]
    Empty,
}
