//! COVID CLI - Command line tool for querying the COVID-19 dashboard views.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "covid-cli",
    version,
    about = "COVID-19 dashboard data toolkit"
)]
struct Cli {
    /// Cleaned OWID CSV to load (gzip if it ends in .gz)
    #[arg(
        long,
        global = true,
        env = "COVID_DATA_PATH",
        default_value = covid_cmd::DEFAULT_DATA_PATH
    )]
    data: PathBuf,

    #[command(subcommand)]
    command: covid_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[COVID] cli: data path {}", cli.data.display());
    covid_cmd::run(&cli.data, cli.command)
}
