//! Dashboard input parameters.
//!
//! `DashboardParams` bundles every user-controlled input into one explicit
//! value. Each chart function receives it by reference; nothing about the
//! current selection lives anywhere else.

use crate::options::country_options;
use chrono::NaiveDate;
use covid_data::Dataset;
use covid_owid::date_range::DateRange;
use covid_owid::granularity::Granularity;
use covid_owid::metric::Metric;
use serde::{Deserialize, Serialize};

/// Continent preselected when the dashboard first opens.
pub const DEFAULT_CONTINENT: &str = "Asia";

/// Current state of the dashboard's inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardParams {
    /// Selected country; `None` means "all countries"
    pub entity: Option<String>,
    /// Selected continent filter
    pub continent: Option<String>,
    /// Metric plotted by the time series, map and bar chart
    pub metric: Metric,
    /// Inclusive date window for the KPIs and time series
    pub range: DateRange,
    /// Time-bucket size for the time series
    pub granularity: Granularity,
}

impl DashboardParams {
    /// The inputs shown when the dashboard opens: the default continent (if
    /// the dataset has it), its first country, total cases, the whole date
    /// span and daily granularity.
    pub fn defaults_for(dataset: &Dataset) -> Self {
        let continent = dataset
            .continents()
            .into_iter()
            .find(|c| c == DEFAULT_CONTINENT);
        let entity = country_options(dataset, continent.as_deref()).selected;
        let range = dataset
            .date_bounds()
            .unwrap_or(DateRange(NaiveDate::MIN, NaiveDate::MAX));
        Self {
            entity,
            continent,
            metric: Metric::TotalCases,
            range,
            granularity: Granularity::Daily,
        }
    }

    /// Change the continent filter and reset the country to the first one
    /// available under it, as the country selector does.
    pub fn select_continent(&mut self, dataset: &Dataset, continent: Option<String>) {
        self.entity = country_options(dataset, continent.as_deref()).selected;
        self.continent = continent;
    }
}
