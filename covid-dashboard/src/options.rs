//! Selector option lists: continents, countries, metrics and aggregation.

use covid_data::Dataset;
use covid_owid::granularity::Granularity;
use covid_owid::metric::Metric;
use serde::Serialize;

/// One entry of a dropdown or radio group.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    fn same(text: &str) -> Self {
        Self {
            label: text.to_string(),
            value: text.to_string(),
        }
    }
}

/// Countries available under a continent, with the default selection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryOptions {
    pub options: Vec<SelectOption>,
    /// The first option, or `None` when the list is empty
    pub selected: Option<String>,
}

/// Sorted country options for `continent` (every country when `None`).
pub fn country_options(dataset: &Dataset, continent: Option<&str>) -> CountryOptions {
    let options: Vec<SelectOption> = dataset
        .entities(continent)
        .iter()
        .map(|name| SelectOption::same(name))
        .collect();
    let selected = options.first().map(|o| o.value.clone());
    CountryOptions { options, selected }
}

pub fn continent_options(dataset: &Dataset) -> Vec<SelectOption> {
    dataset
        .continents()
        .iter()
        .map(|c| SelectOption::same(c))
        .collect()
}

pub fn metric_options() -> Vec<SelectOption> {
    Metric::SELECTABLE
        .iter()
        .map(|m| SelectOption {
            label: m.selector_label().to_string(),
            value: m.column().to_string(),
        })
        .collect()
}

pub fn granularity_options() -> Vec<SelectOption> {
    Granularity::ALL
        .iter()
        .map(|g| SelectOption {
            label: g.label().to_string(),
            value: g.code().to_string(),
        })
        .collect()
}
