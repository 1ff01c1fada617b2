use crate::metric::Metric;
use chrono::naive::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the dataset's `date` column: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of a country ISO code. Aggregate rows (continents, income groups,
/// the world) use longer `OWID_*` codes.
pub const COUNTRY_CODE_LENGTH: usize = 3;

pub const ISO_CODE_COLUMN: &str = "iso_code";
pub const CONTINENT_COLUMN: &str = "continent";
pub const LOCATION_COLUMN: &str = "location";
pub const DATE_COLUMN: &str = "date";

/// One row of the dataset: a single entity on a single day.
///
/// Numeric fields never hold NaN once loaded; missing values are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub iso_code: String,
    pub location: String,
    pub continent: String,
    pub date: NaiveDate,
    pub new_cases: f64,
    pub new_deaths: f64,
    pub total_cases: f64,
    pub total_deaths: f64,
    pub total_vaccinations: f64,
    pub people_vaccinated_per_hundred: f64,
    pub total_cases_per_million: f64,
    pub total_deaths_per_million: f64,
    pub population: f64,
}

impl Record {
    /// A record for `date` with every numeric field set to zero.
    pub fn zeroed(iso_code: &str, location: &str, continent: &str, date: NaiveDate) -> Record {
        Record {
            iso_code: iso_code.to_string(),
            location: location.to_string(),
            continent: continent.to_string(),
            date,
            new_cases: 0.0,
            new_deaths: 0.0,
            total_cases: 0.0,
            total_deaths: 0.0,
            total_vaccinations: 0.0,
            people_vaccinated_per_hundred: 0.0,
            total_cases_per_million: 0.0,
            total_deaths_per_million: 0.0,
            population: 0.0,
        }
    }

    /// Whether the ISO code identifies a country rather than an aggregate.
    pub fn is_country_code(iso_code: &str) -> bool {
        iso_code.chars().count() == COUNTRY_CODE_LENGTH
    }

    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::NewCases => self.new_cases,
            Metric::NewDeaths => self.new_deaths,
            Metric::TotalCases => self.total_cases,
            Metric::TotalDeaths => self.total_deaths,
            Metric::TotalVaccinations => self.total_vaccinations,
            Metric::PeopleVaccinatedPerHundred => self.people_vaccinated_per_hundred,
            Metric::TotalCasesPerMillion => self.total_cases_per_million,
            Metric::TotalDeathsPerMillion => self.total_deaths_per_million,
            Metric::Population => self.population,
        }
    }

    pub fn value_mut(&mut self, metric: Metric) -> &mut f64 {
        match metric {
            Metric::NewCases => &mut self.new_cases,
            Metric::NewDeaths => &mut self.new_deaths,
            Metric::TotalCases => &mut self.total_cases,
            Metric::TotalDeaths => &mut self.total_deaths,
            Metric::TotalVaccinations => &mut self.total_vaccinations,
            Metric::PeopleVaccinatedPerHundred => &mut self.people_vaccinated_per_hundred,
            Metric::TotalCasesPerMillion => &mut self.total_cases_per_million,
            Metric::TotalDeathsPerMillion => &mut self.total_deaths_per_million,
            Metric::Population => &mut self.population,
        }
    }

    /// Add every numeric field of `other` into this record.
    pub fn accumulate(&mut self, other: &Record) {
        for metric in Metric::ALL {
            *self.value_mut(metric) += other.value(metric);
        }
    }
}
