//! Command-line interface for late-night place searches.
//!
//! The `search` subcommand reads a JSON snapshot of place results
//! keyed by category, runs the enrichment pipeline against a
//! caller-supplied origin, and prints the ranked businesses as JSON.
#![forbid(unsafe_code)]

mod search;
mod source;

use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use thiserror::Error;

pub use source::FileSource;

pub(crate) const ARG_SEARCH_PLACES: &str = "places";
pub(crate) const ARG_SEARCH_LAT: &str = "lat";
pub(crate) const ARG_SEARCH_LNG: &str = "lng";
pub(crate) const ENV_SEARCH_PLACES: &str = "NIGHTOWL_CMDS_SEARCH_PLACES";
pub(crate) const ENV_SEARCH_LAT: &str = "NIGHTOWL_CMDS_SEARCH_LAT";
pub(crate) const ENV_SEARCH_LNG: &str = "NIGHTOWL_CMDS_SEARCH_LNG";

/// Run the CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Search(args) => search::run_search(args),
    }
}

fn init_logging() {
    // The logger may already be installed when embedded in tests.
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();
}

#[derive(Debug, Parser)]
#[command(
    name = "nightowl",
    about = "Find businesses open late around a point",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank late-night businesses from a snapshot of place results.
    Search(search::SearchArgs),
}

/// Errors emitted by the nightowl CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A coordinate component is outside its valid range.
    #[error("{field} {value} is out of range")]
    CoordinateOutOfRange {
        field: &'static str,
        value: f64,
    },
    /// The search radius is not a positive finite number of miles.
    #[error("radius {value} must be a positive number of miles")]
    InvalidRadius {
        value: f64,
    },
    /// The day index is outside 0 (Sunday) to 6 (Saturday).
    #[error("day {value} must be between 0 (Sunday) and 6 (Saturday)")]
    InvalidDay {
        value: u8,
    },
    /// A requested category name is not recognised.
    #[error("unknown category {name:?}")]
    UnknownCategory {
        name: String,
    },
    /// The snapshot path does not point at a file.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile { field: &'static str, path: PathBuf },
    /// The snapshot file could not be opened.
    #[error("failed to open snapshot {path:?}")]
    OpenSnapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The snapshot file is not valid JSON for the expected shape.
    #[error("failed to parse snapshot {path:?}")]
    ParseSnapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Results could not be encoded as JSON.
    #[error("failed to encode results")]
    EncodeOutput(#[from] serde_json::Error),
    /// Results could not be written to the output stream.
    #[error("failed to write results")]
    WriteOutput(#[from] std::io::Error),
    /// The search itself failed.
    #[error(transparent)]
    Search(#[from] nightowl_scorer::SearchError),
}

#[cfg(test)]
mod tests;
