use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a metric name does not match any known CSV column.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("unknown metric `{0}`")]
pub struct ParseMetricError(pub String);

/// A numeric column of the dataset.
///
/// Serialized as the CSV column name (e.g. `total_cases`).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    NewCases,
    NewDeaths,
    TotalCases,
    TotalDeaths,
    TotalVaccinations,
    PeopleVaccinatedPerHundred,
    TotalCasesPerMillion,
    TotalDeathsPerMillion,
    Population,
}

impl Metric {
    /// Every numeric field, in CSV column order.
    pub const ALL: [Metric; 9] = [
        Metric::NewCases,
        Metric::NewDeaths,
        Metric::TotalCases,
        Metric::TotalDeaths,
        Metric::TotalVaccinations,
        Metric::PeopleVaccinatedPerHundred,
        Metric::TotalCasesPerMillion,
        Metric::TotalDeathsPerMillion,
        Metric::Population,
    ];

    /// Metrics offered by the dashboard's metric selector.
    pub const SELECTABLE: [Metric; 4] = [
        Metric::TotalCases,
        Metric::TotalDeaths,
        Metric::TotalVaccinations,
        Metric::PeopleVaccinatedPerHundred,
    ];

    /// The CSV column holding this metric.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::NewCases => "new_cases",
            Metric::NewDeaths => "new_deaths",
            Metric::TotalCases => "total_cases",
            Metric::TotalDeaths => "total_deaths",
            Metric::TotalVaccinations => "total_vaccinations",
            Metric::PeopleVaccinatedPerHundred => "people_vaccinated_per_hundred",
            Metric::TotalCasesPerMillion => "total_cases_per_million",
            Metric::TotalDeathsPerMillion => "total_deaths_per_million",
            Metric::Population => "population",
        }
    }

    /// Human-readable label: the column name with underscores as spaces,
    /// every word capitalized.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::NewCases => "New Cases",
            Metric::NewDeaths => "New Deaths",
            Metric::TotalCases => "Total Cases",
            Metric::TotalDeaths => "Total Deaths",
            Metric::TotalVaccinations => "Total Vaccinations",
            Metric::PeopleVaccinatedPerHundred => "People Vaccinated Per Hundred",
            Metric::TotalCasesPerMillion => "Total Cases Per Million",
            Metric::TotalDeathsPerMillion => "Total Deaths Per Million",
            Metric::Population => "Population",
        }
    }

    /// Label used by the metric selector, which shortens the vaccination rate.
    pub fn selector_label(&self) -> &'static str {
        match self {
            Metric::PeopleVaccinatedPerHundred => "People Vaccinated (%)",
            other => other.label(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.column().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseMetricError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_column_names() {
        assert_eq!("total_cases".parse::<Metric>().unwrap(), Metric::TotalCases);
        assert_eq!(
            "people_vaccinated_per_hundred".parse::<Metric>().unwrap(),
            Metric::PeopleVaccinatedPerHundred
        );
        assert_eq!(" Population ".parse::<Metric>().unwrap(), Metric::Population);
    }

    #[test]
    fn rejects_unknown_metric() {
        let err = "stringency_index".parse::<Metric>().unwrap_err();
        assert_eq!(err, ParseMetricError("stringency_index".to_string()));
        assert_eq!(err.to_string(), "unknown metric `stringency_index`");
    }

    #[test]
    fn labels_are_title_cased_columns() {
        for metric in Metric::ALL {
            let expected: Vec<String> = metric
                .column()
                .split('_')
                .map(|w| {
                    let mut chars = w.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect(),
                        None => String::new(),
                    }
                })
                .collect();
            assert_eq!(metric.label(), expected.join(" "));
        }
    }
}
