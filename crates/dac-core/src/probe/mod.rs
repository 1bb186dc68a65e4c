//! Probe interface: attempt to materialize one dataset, signal success or failure.
//!
//! The checker only cares whether a probe succeeded; what "available" means
//! (a 2xx response, parseable SDMX data, ...) lives entirely inside the
//! probe implementation, including any timeout.

mod error;
mod http;
mod sdmx;

pub use error::ProbeError;
pub use http::HttpProbe;
pub use sdmx::SdmxProbe;

/// Capability to check one dataset by identifier.
///
/// `check` blocks on network I/O; the checker runs it through
/// `spawn_blocking`. Implementations must be side-effect-free with respect
/// to concurrent siblings.
pub trait Probe: Send + Sync {
    fn check(&self, id: &str) -> Result<(), ProbeError>;
}
