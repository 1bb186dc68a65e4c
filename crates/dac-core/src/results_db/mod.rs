//! Persistent run-history database (SQLite via sqlx).
//!
//! Stores one row per batch run plus every per-dataset outcome, so past
//! availability reports can be listed and exported without re-probing.

pub mod db;
pub mod types;

mod runs;

pub use db::*;
pub use types::*;
