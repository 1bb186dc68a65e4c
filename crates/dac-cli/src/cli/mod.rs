//! CLI for the DAC dataset availability checker.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dac_core::config;
use dac_core::results_db::ResultsDb;
use std::path::PathBuf;

use commands::{run_check, run_export, run_list, run_remove, run_sources, run_status};

/// Top-level CLI for the DAC dataset availability checker.
#[derive(Debug, Parser)]
#[command(name = "dac")]
#[command(about = "DAC: bulk availability checker for open-data dataset catalogs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the built-in source registry.
    Sources,

    /// List the datasets a source currently publishes.
    List {
        /// Source name (see `dac sources`).
        source: String,

        /// Write the list to a CSV file instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Probe every dataset of a source and report availability.
    Check {
        /// Source name (see `dac sources`).
        source: String,

        /// Check the datasets in this CSV (id,label) instead of listing the catalog.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Probe up to N datasets concurrently (default from config).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,

        /// Write the outcome report to a CSV file.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Do not store the run in the history database.
        #[arg(long)]
        no_store: bool,
    },

    /// Show stored runs.
    Status,

    /// Export a stored run's outcomes to CSV.
    Export {
        /// Run identifier (defaults to the latest run).
        run_id: Option<i64>,

        /// Output file (defaults to run_<id>_outcomes.csv).
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Remove a stored run by its ID.
    Remove {
        /// Run identifier.
        id: i64,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Sources => run_sources()?,
            CliCommand::List { source, output } => {
                run_list(&cfg, &source, output.as_deref()).await?;
            }
            CliCommand::Check {
                source,
                input,
                jobs,
                output,
                no_store,
            } => {
                let db = ResultsDb::open_default().await?;
                run_check(
                    &db,
                    &cfg,
                    &source,
                    input.as_deref(),
                    jobs,
                    output.as_deref(),
                    no_store,
                )
                .await?;
            }
            CliCommand::Status => {
                let db = ResultsDb::open_default().await?;
                run_status(&db).await?;
            }
            CliCommand::Export { run_id, output } => {
                let db = ResultsDb::open_default().await?;
                run_export(&db, run_id, output.as_deref()).await?;
            }
            CliCommand::Remove { id } => {
                let db = ResultsDb::open_default().await?;
                run_remove(&db, id).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
