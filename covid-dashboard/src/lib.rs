//! Render-ready views for the COVID-19 dashboard.
//!
//! This crate provides:
//! - `params`: [`DashboardParams`], the explicit bundle of user inputs
//! - `options`: selector option lists (continents, countries, metrics, aggregation)
//! - `kpi`: headline figure cards
//! - `charts`: one pure function per chart returning a serializable descriptor
//!
//! [`render_dashboard`] evaluates everything for one set of inputs. A host UI
//! calls it (or an individual chart function) whenever an input changes and
//! draws what comes back; it holds no query logic of its own.

pub mod charts;
pub mod kpi;
pub mod options;
pub mod params;

pub use params::DashboardParams;

use charts::{BarChart, ChoroplethMap, LineChart, ScatterChart};
use covid_data::Dataset;
use kpi::KpiCards;
use options::{CountryOptions, SelectOption};
use serde::Serialize;

/// Every output of the dashboard for one set of inputs.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub params: DashboardParams,
    pub continents: Vec<SelectOption>,
    pub countries: CountryOptions,
    pub metrics: Vec<SelectOption>,
    pub granularities: Vec<SelectOption>,
    pub kpis: KpiCards,
    pub timeseries: LineChart,
    pub map: ChoroplethMap,
    pub top_countries: BarChart,
    pub scatter: ScatterChart,
}

pub fn render_dashboard(dataset: &Dataset, params: &DashboardParams) -> DashboardView {
    log::info!(
        "[COVID] dashboard: rendering entity={:?} continent={:?} metric={} aggregation={}",
        params.entity,
        params.continent,
        params.metric,
        params.granularity
    );
    DashboardView {
        params: params.clone(),
        continents: options::continent_options(dataset),
        countries: options::country_options(dataset, params.continent.as_deref()),
        metrics: options::metric_options(),
        granularities: options::granularity_options(),
        kpis: kpi::kpi_cards(dataset, params),
        timeseries: charts::timeseries_chart(dataset, params),
        map: charts::world_map(dataset, params),
        top_countries: charts::top_bar_chart(dataset, params),
        scatter: charts::vaccination_scatter(dataset, params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = include_str!("../../fixtures/owid_covid_sample.csv");

    #[test]
    fn render_dashboard_with_defaults() {
        let dataset = Dataset::from_csv_str(SAMPLE_CSV).unwrap();
        let params = DashboardParams::defaults_for(&dataset);
        let view = render_dashboard(&dataset, &params);

        assert_eq!(view.params, params);
        assert_eq!(view.countries.selected.as_deref(), Some("India"));
        assert_eq!(view.kpis.total_cases, "210");
        assert_eq!(view.timeseries.series.len(), 3);
        assert_eq!(view.top_countries.bars.len(), 2);
        assert_eq!(view.scatter.points.len(), 2);
        assert_eq!(view.continents.len(), 2);
    }

    #[test]
    fn render_dashboard_serializes() {
        let dataset = Dataset::from_csv_str(SAMPLE_CSV).unwrap();
        let params = DashboardParams::defaults_for(&dataset);
        let json = serde_json::to_value(render_dashboard(&dataset, &params)).unwrap();
        assert_eq!(json["params"]["metric"], "total_cases");
        assert_eq!(json["params"]["granularity"], "D");
        assert_eq!(json["kpis"]["raw"]["cases"], 210.0);
        assert_eq!(json["top_countries"]["bars"][0]["location"], "India");
    }
}
