//! Report sinks: serialize dataset lists and batch outcomes to CSV.

mod csv;

pub use self::csv::{read_datasets, write_datasets, write_outcomes};
