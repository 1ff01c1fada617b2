//! Dashboard queries run from the command line.

use crate::{ChartArgs, Command, OutputArgs};
use anyhow::Context;
use covid_dashboard::{charts, kpi, options, render_dashboard, DashboardParams};
use covid_data::Dataset;
use covid_owid::date_range::DateRange;
use log::{info, warn};
use serde::Serialize;
use std::path::Path;

/// Load the dataset, failing the command if it cannot be read.
pub fn load(path: &Path) -> anyhow::Result<Dataset> {
    let dataset = Dataset::from_path(path)
        .with_context(|| format!("failed to load dataset from {}", path.display()))?;
    info!(
        "[COVID] cmd: loaded {} records from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

/// Start from the dashboard's initial inputs and apply the overrides given
/// on the command line. Changing the continent resets the country the way
/// the country selector does; an explicit `--country` wins over that.
pub fn params_for(dataset: &Dataset, args: &ChartArgs) -> DashboardParams {
    let mut params = DashboardParams::defaults_for(dataset);

    if args.all_continents {
        params.select_continent(dataset, None);
    } else if let Some(continent) = &args.continent {
        params.select_continent(dataset, Some(continent.clone()));
    }

    if args.all_countries {
        params.entity = None;
    } else if let Some(country) = &args.country {
        if !dataset.entities(None).contains(country) {
            warn!("[COVID] cmd: no rows for country {:?}", country);
        }
        params.entity = Some(country.clone());
    }

    if let Some(metric) = args.metric {
        params.metric = metric;
    }
    if let Some(aggregation) = args.aggregation {
        params.granularity = aggregation;
    }
    params.range = DateRange(
        args.start.unwrap_or(params.range.start()),
        args.end.unwrap_or(params.range.end()),
    );
    params
}

pub fn run_command(dataset: &Dataset, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Continents { output } => write_json(&options::continent_options(dataset), &output),
        Command::Countries { continent, output } => write_json(
            &options::country_options(dataset, continent.as_deref()),
            &output,
        ),
        Command::Kpis(args) => {
            let params = params_for(dataset, &args);
            write_json(&kpi::kpi_cards(dataset, &params), &args.output)
        }
        Command::Timeseries(args) => {
            let params = params_for(dataset, &args);
            write_json(&charts::timeseries_chart(dataset, &params), &args.output)
        }
        Command::Map(args) => {
            let params = params_for(dataset, &args);
            write_json(&charts::world_map(dataset, &params), &args.output)
        }
        Command::Top(args) => {
            let params = params_for(dataset, &args);
            write_json(&charts::top_bar_chart(dataset, &params), &args.output)
        }
        Command::Scatter(args) => {
            let params = params_for(dataset, &args);
            write_json(&charts::vaccination_scatter(dataset, &params), &args.output)
        }
        Command::Dashboard(args) => {
            let params = params_for(dataset, &args);
            write_json(&render_dashboard(dataset, &params), &args.output)
        }
    }
}

fn write_json<T: Serialize>(value: &T, output: &OutputArgs) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match &output.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("[COVID] cmd: wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clap::Parser;
    use covid_owid::granularity::Granularity;
    use covid_owid::metric::Metric;
    use std::path::PathBuf;

    const SAMPLE_CSV: &str = include_str!("../../fixtures/owid_covid_sample.csv");

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> Command {
        TestCli::try_parse_from(std::iter::once("covid-cli").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    fn chart_args(args: &[&str]) -> ChartArgs {
        match parse(args) {
            Command::Kpis(args) => args,
            other => panic!("expected kpis, got {:?}", other),
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("covid-cmd-{}-{}", std::process::id(), name))
    }

    #[test]
    fn parses_chart_arguments() {
        let args = chart_args(&[
            "kpis",
            "--country",
            "France",
            "--metric",
            "new_deaths",
            "--start",
            "2021-01-02",
            "--aggregation",
            "W",
        ]);
        assert_eq!(args.country.as_deref(), Some("France"));
        assert_eq!(args.metric, Some(Metric::NewDeaths));
        assert_eq!(args.start, NaiveDate::from_ymd_opt(2021, 1, 2));
        assert_eq!(args.end, None);
        assert_eq!(args.aggregation, Some(Granularity::Weekly));
    }

    #[test]
    fn rejects_bad_arguments() {
        let cli = |args: &[&str]| {
            TestCli::try_parse_from(std::iter::once("covid-cli").chain(args.iter().copied()))
        };
        assert!(cli(&["kpis", "--metric", "hospital_beds"]).is_err());
        assert!(cli(&["kpis", "--start", "01/02/2021"]).is_err());
        assert!(cli(&["kpis", "--country", "India", "--all-countries"]).is_err());
    }

    #[test]
    fn params_default_to_dashboard_initial_state() {
        let dataset = Dataset::from_csv_str(SAMPLE_CSV).unwrap();
        let params = params_for(&dataset, &ChartArgs::default());
        assert_eq!(params, DashboardParams::defaults_for(&dataset));
    }

    #[test]
    fn continent_override_resets_country() {
        let dataset = Dataset::from_csv_str(SAMPLE_CSV).unwrap();
        let params = params_for(&dataset, &chart_args(&["kpis", "--continent", "Europe"]));
        assert_eq!(params.continent.as_deref(), Some("Europe"));
        assert_eq!(params.entity.as_deref(), Some("France"));

        let params = params_for(
            &dataset,
            &chart_args(&["kpis", "--continent", "Europe", "--country", "Germany"]),
        );
        assert_eq!(params.entity.as_deref(), Some("Germany"));

        let params = params_for(
            &dataset,
            &chart_args(&["kpis", "--all-continents", "--all-countries"]),
        );
        assert_eq!(params.continent, None);
        assert_eq!(params.entity, None);
    }

    #[test]
    fn range_overrides_keep_missing_bound() {
        let dataset = Dataset::from_csv_str(SAMPLE_CSV).unwrap();
        let params = params_for(&dataset, &chart_args(&["kpis", "--end", "2021-01-02"]));
        assert_eq!(params.range.start(), NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(params.range.end(), NaiveDate::from_ymd_opt(2021, 1, 2).unwrap());
    }

    #[test]
    fn kpis_command_writes_json_file() {
        let dataset = Dataset::from_csv_str(SAMPLE_CSV).unwrap();
        let path = temp_path("kpis.json");
        let path_arg = path.to_string_lossy().to_string();
        let command = parse(&["kpis", "--country", "France", "--output", &path_arg]);
        run_command(&dataset, command).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(json["total_cases"], "360");
        assert_eq!(json["raw"]["deaths"], 25.0);
    }

    #[test]
    fn countries_command_writes_options() {
        let dataset = Dataset::from_csv_str(SAMPLE_CSV).unwrap();
        let path = temp_path("countries.json");
        let path_arg = path.to_string_lossy().to_string();
        let command = parse(&["countries", "--continent", "Asia", "-o", &path_arg]);
        run_command(&dataset, command).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(json["selected"], "India");
        assert_eq!(json["options"][1]["value"], "Japan");
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load(Path::new("/nonexistent/owid.csv")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/owid.csv"));
    }
}
