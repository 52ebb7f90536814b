//! Search command implementation.

use chrono::Datelike;
use clap::Parser;
use geo::Coord;
use nightowl_core::{Category, SearchQuery};
use nightowl_scorer::SearchPipeline;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::{
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{
    ARG_SEARCH_LAT, ARG_SEARCH_LNG, ARG_SEARCH_PLACES, CliError, ENV_SEARCH_LAT, ENV_SEARCH_LNG,
    ENV_SEARCH_PLACES, FileSource,
};

const DEFAULT_RADIUS_MILES: f64 = 5.0;

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank late-night businesses around an origin point. Place \
                 results come from a JSON snapshot keyed by category name; \
                 options can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Rank late-night businesses around an origin point"
)]
#[ortho_config(prefix = "NIGHTOWL")]
pub(crate) struct SearchArgs {
    /// Path to the JSON snapshot of place results.
    #[arg(long = ARG_SEARCH_PLACES, value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<PathBuf>,
    /// Origin latitude in degrees.
    #[arg(long = ARG_SEARCH_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Origin longitude in degrees.
    #[arg(long = ARG_SEARCH_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Search radius in miles (default 5).
    #[arg(long, value_name = "miles")]
    #[serde(default)]
    pub(crate) radius: Option<f64>,
    /// Day of the week, 0 = Sunday (default: today).
    #[arg(long, value_name = "0-6")]
    #[serde(default)]
    pub(crate) day: Option<u8>,
    /// Restrict the search to these categories (default: all).
    #[arg(long = "category", value_name = "name")]
    #[serde(default)]
    pub(crate) categories: Vec<String>,
}

impl SearchArgs {
    fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchConfig {
    /// Path to the JSON snapshot of place results.
    pub(crate) places: PathBuf,
    /// Search origin, `x` = longitude and `y` = latitude.
    pub(crate) origin: Coord<f64>,
    /// Search radius in miles.
    pub(crate) radius_miles: f64,
    /// Day of the week, 0 = Sunday.
    pub(crate) day: u8,
    /// Categories to search.
    pub(crate) categories: Vec<Category>,
}

impl SearchConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.places, ARG_SEARCH_PLACES)
    }

    fn require_existing(path: &Path, field: &'static str) -> Result<(), CliError> {
        if path.is_file() {
            Ok(())
        } else {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
    }
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_SEARCH_PLACES,
            env: ENV_SEARCH_PLACES,
        })?;
        let lat = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_SEARCH_LAT,
            env: ENV_SEARCH_LAT,
        })?;
        let lng = args.lng.ok_or(CliError::MissingArgument {
            field: ARG_SEARCH_LNG,
            env: ENV_SEARCH_LNG,
        })?;
        if !(lat.is_finite() && (-90.0..=90.0).contains(&lat)) {
            return Err(CliError::CoordinateOutOfRange {
                field: ARG_SEARCH_LAT,
                value: lat,
            });
        }
        if !(lng.is_finite() && (-180.0..=180.0).contains(&lng)) {
            return Err(CliError::CoordinateOutOfRange {
                field: ARG_SEARCH_LNG,
                value: lng,
            });
        }

        let radius_miles = args.radius.unwrap_or(DEFAULT_RADIUS_MILES);
        if !(radius_miles.is_finite() && radius_miles > 0.0) {
            return Err(CliError::InvalidRadius {
                value: radius_miles,
            });
        }

        let day = match args.day {
            Some(day) => check_day(day)?,
            None => local_day(),
        };

        let categories = if args.categories.is_empty() {
            Category::ALL.to_vec()
        } else {
            args.categories
                .iter()
                .map(|name| {
                    Category::from_str(name).map_err(|_| CliError::UnknownCategory {
                        name: name.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self {
            places,
            origin: Coord { x: lng, y: lat },
            radius_miles,
            day,
            categories,
        })
    }
}

fn check_day(day: u8) -> Result<u8, CliError> {
    if day <= 6 {
        Ok(day)
    } else {
        Err(CliError::InvalidDay { value: day })
    }
}

fn local_day() -> u8 {
    let weekday = chrono::Local::now().weekday().num_days_from_sunday();
    u8::try_from(weekday).unwrap_or(0)
}

pub(super) fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_search_with(args, &mut stdout)
}

pub(super) fn run_search_with(
    args: SearchArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_search_config(args)?;
    log::info!(
        "searching {} categories within {} miles of ({}, {})",
        config.categories.len(),
        config.radius_miles,
        config.origin.y,
        config.origin.x,
    );
    let source = FileSource::from_path(&config.places)?;
    let query = SearchQuery {
        origin: config.origin,
        radius_miles: config.radius_miles,
    };
    let pipeline = SearchPipeline::new();
    let results = pipeline.run(&source, &query, config.day, &config.categories)?;
    serde_json::to_writer_pretty(&mut *writer, &results)?;
    writeln!(writer)?;
    Ok(())
}

fn resolve_search_config(args: SearchArgs) -> Result<SearchConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}
