//! Bulk availability checker.
//!
//! Probes every dataset in a batch with bounded parallelism and isolates
//! failures: one dataset failing can never change another's outcome or
//! abort the batch. The only error `check_all` itself raises is a failure
//! of the worker machinery.

mod outcome;
mod progress;
mod run;

pub use outcome::{ProbeOutcome, ProbeStatus};
pub use progress::ProgressUpdate;
pub use run::check_all;
