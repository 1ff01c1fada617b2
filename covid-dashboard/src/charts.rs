//! One pure function per chart.
//!
//! Each function takes the dataset and the current [`DashboardParams`] and
//! returns a descriptor that a charting front end can draw as-is. Dates
//! serialize as `YYYY-MM-DD`; undefined rolling values serialize as `null`.

use crate::params::DashboardParams;
use chrono::NaiveDate;
use covid_data::models::{MapFrame, RollingPoint};
use covid_data::view::{resample, rolling_mean};
use covid_data::{Dataset, DEFAULT_ROLLING_WINDOW, DEFAULT_TOP_N};
use covid_owid::granularity::Granularity;
use covid_owid::metric::Metric;
use serde::Serialize;

pub const SELECT_COUNTRY_TITLE: &str = "Please select a country";
pub const SELECT_RANGE_TITLE: &str = "Please select a valid range";
pub const SCATTER_TITLE: &str = "Vaccination vs Deaths per Million";
pub const MAP_COLOR_SCALE: &str = "Reds";

/// Title and axis labels shared by every chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

impl ChartConfig {
    fn new(title: impl Into<String>, x_axis_label: &str, y_axis_label: &str) -> Self {
        Self {
            title: title.into(),
            x_axis_label: x_axis_label.to_string(),
            y_axis_label: y_axis_label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct LinePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Metric over time for one country, with its trailing rolling average.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    pub config: ChartConfig,
    pub metric: Metric,
    pub granularity: Granularity,
    pub series: Vec<LinePoint>,
    pub rolling_label: String,
    pub rolling_average: Vec<RollingPoint>,
    /// True when the chart only carries a prompt in its title
    pub placeholder: bool,
}

impl LineChart {
    fn placeholder(title: &str, params: &DashboardParams) -> Self {
        Self {
            config: ChartConfig::new(title, "date", params.metric.column()),
            metric: params.metric,
            granularity: params.granularity,
            series: Vec::new(),
            rolling_label: rolling_label(),
            rolling_average: Vec::new(),
            placeholder: true,
        }
    }
}

fn rolling_label() -> String {
    format!("{}-Day Rolling Average", DEFAULT_ROLLING_WINDOW)
}

/// The selected country's metric over the selected range, resampled to the
/// selected granularity, plus a 7-row rolling average of the same series.
pub fn timeseries_chart(dataset: &Dataset, params: &DashboardParams) -> LineChart {
    let Some(entity) = params.entity.as_deref() else {
        return LineChart::placeholder(SELECT_COUNTRY_TITLE, params);
    };
    if params.range.is_inverted() {
        return LineChart::placeholder(SELECT_RANGE_TITLE, params);
    }

    let mut rows = dataset.filter_range(Some(entity), params.range);
    rows.sort_by_key(|r| r.date);
    let rows = resample(&rows, params.granularity);
    let series = rows
        .iter()
        .map(|r| LinePoint {
            date: r.date,
            value: r.value(params.metric),
        })
        .collect();
    let rolling_average = rolling_mean(&rows, params.metric, DEFAULT_ROLLING_WINDOW);

    LineChart {
        config: ChartConfig::new(
            format!("{} in {}", params.metric.label(), entity),
            "date",
            params.metric.column(),
        ),
        metric: params.metric,
        granularity: params.granularity,
        series,
        rolling_label: rolling_label(),
        rolling_average,
        placeholder: false,
    }
}

/// Animated choropleth: one frame per date, countries colored by metric.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChoroplethMap {
    pub config: ChartConfig,
    pub metric: Metric,
    pub color_scale: String,
    pub frames: Vec<MapFrame>,
}

pub fn world_map(dataset: &Dataset, params: &DashboardParams) -> ChoroplethMap {
    ChoroplethMap {
        config: ChartConfig::new(
            format!("Global {}", params.metric.label()),
            "iso_code",
            params.metric.column(),
        ),
        metric: params.metric,
        color_scale: MAP_COLOR_SCALE.to_string(),
        frames: dataset.map_frames(params.metric, params.continent.as_deref()),
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bar {
    pub iso_code: String,
    pub location: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarChart {
    pub config: ChartConfig,
    pub metric: Metric,
    pub bars: Vec<Bar>,
}

/// The ten countries with the highest metric on the latest date.
pub fn top_bar_chart(dataset: &Dataset, params: &DashboardParams) -> BarChart {
    let bars = dataset
        .top_n(params.metric, params.continent.as_deref(), DEFAULT_TOP_N)
        .into_iter()
        .map(|r| Bar {
            value: r.value(params.metric),
            iso_code: r.iso_code,
            location: r.location,
        })
        .collect();
    BarChart {
        config: ChartConfig::new(
            format!(
                "Top {} Countries by {} (Latest Date)",
                DEFAULT_TOP_N,
                params.metric.label()
            ),
            "location",
            params.metric.column(),
        ),
        metric: params.metric,
        bars,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub iso_code: String,
    pub location: String,
    /// Color group
    pub continent: String,
    /// People vaccinated per hundred
    pub x: f64,
    /// Total deaths per million
    pub y: f64,
    /// Population, used for marker size
    pub size: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterChart {
    pub config: ChartConfig,
    pub points: Vec<ScatterPoint>,
}

/// Vaccination rate against deaths per million for every country on the
/// latest date. The selected metric does not affect this chart.
pub fn vaccination_scatter(dataset: &Dataset, params: &DashboardParams) -> ScatterChart {
    let points = dataset
        .latest_snapshot(params.continent.as_deref())
        .into_iter()
        .map(|r| ScatterPoint {
            x: r.people_vaccinated_per_hundred,
            y: r.total_deaths_per_million,
            size: r.population,
            iso_code: r.iso_code,
            location: r.location,
            continent: r.continent,
        })
        .collect();
    ScatterChart {
        config: ChartConfig::new(
            SCATTER_TITLE,
            Metric::PeopleVaccinatedPerHundred.column(),
            Metric::TotalDeathsPerMillion.column(),
        ),
        points,
    }
}
