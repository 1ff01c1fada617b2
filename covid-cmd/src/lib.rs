//! Command implementations for the COVID dashboard CLI.
//!
//! Every subcommand loads the dataset once, evaluates one dashboard output
//! and prints it as JSON.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use covid_owid::granularity::Granularity;
use covid_owid::metric::Metric;
use std::path::{Path, PathBuf};

pub mod query;

/// Dataset file read when neither `--data` nor `COVID_DATA_PATH` is set.
pub const DEFAULT_DATA_PATH: &str = "owid_covid_cleaned.csv";

/// Where to write a command's JSON output.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write JSON to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Dashboard inputs. Anything omitted keeps the dashboard's initial value.
#[derive(Args, Debug, Clone, Default)]
pub struct ChartArgs {
    /// Country name, matched exactly (e.g. "India")
    #[arg(short = 'c', long, conflicts_with = "all_countries")]
    pub country: Option<String>,

    /// Aggregate over every country instead of one
    #[arg(long)]
    pub all_countries: bool,

    /// Continent filter (e.g. "Europe")
    #[arg(long, conflicts_with = "all_continents")]
    pub continent: Option<String>,

    /// Drop the continent filter
    #[arg(long)]
    pub all_continents: bool,

    /// Metric column, e.g. total_cases or people_vaccinated_per_hundred
    #[arg(short = 'm', long)]
    pub metric: Option<Metric>,

    /// First date of the range (YYYY-MM-DD)
    #[arg(long, value_parser = covid_utils::dates::parse_date)]
    pub start: Option<NaiveDate>,

    /// Last date of the range (YYYY-MM-DD)
    #[arg(long, value_parser = covid_utils::dates::parse_date)]
    pub end: Option<NaiveDate>,

    /// Time-series aggregation: D, W or M
    #[arg(short = 'a', long)]
    pub aggregation: Option<Granularity>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the continents present in the dataset
    Continents {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List countries, optionally for one continent
    Countries {
        /// Continent to list countries for
        #[arg(long)]
        continent: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Peak total cases, deaths and vaccinations for the selection
    Kpis(ChartArgs),

    /// Metric over time for one country, with a 7-day rolling average
    Timeseries(ChartArgs),

    /// Per-date country values for an animated map
    Map(ChartArgs),

    /// Top 10 countries by metric on the latest date
    Top(ChartArgs),

    /// Vaccination rate against deaths per million on the latest date
    Scatter(ChartArgs),

    /// Every dashboard output at once
    Dashboard(ChartArgs),
}

pub fn run(data_path: &Path, command: Command) -> anyhow::Result<()> {
    let dataset = query::load(data_path)?;
    query::run_command(&dataset, command)
}
