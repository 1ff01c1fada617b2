//! Headline KPI cards.

use crate::params::DashboardParams;
use covid_data::models::Kpis;
use covid_data::view::max_metrics;
use covid_data::Dataset;
use covid_utils::numbers::format_optional;
use serde::Serialize;

/// Text for the three headline cards plus the raw figures behind them.
///
/// An empty selection renders every card as `N/A`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KpiCards {
    pub total_cases: String,
    pub total_deaths: String,
    pub total_vaccinations: String,
    pub raw: Kpis,
}

/// Peak cumulative figures for the selected country (or all countries)
/// within the selected date range.
pub fn kpi_cards(dataset: &Dataset, params: &DashboardParams) -> KpiCards {
    let rows = dataset.filter_range(params.entity.as_deref(), params.range);
    let raw = max_metrics(&rows);
    KpiCards {
        total_cases: format_optional(raw.cases),
        total_deaths: format_optional(raw.deaths),
        total_vaccinations: format_optional(raw.vaccinations),
        raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use covid_owid::date_range::DateRange;

    const SAMPLE_CSV: &str = include_str!("../../fixtures/owid_covid_sample.csv");

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn kpis_for_selected_country() {
        let dataset = Dataset::from_csv_str(SAMPLE_CSV).unwrap();
        let mut params = DashboardParams::defaults_for(&dataset);
        params.entity = Some("France".to_string());
        let cards = kpi_cards(&dataset, &params);
        assert_eq!(cards.total_cases, "360");
        assert_eq!(cards.total_deaths, "25");
        assert_eq!(cards.total_vaccinations, "500");
    }

    #[test]
    fn kpis_for_all_countries_use_thousands_separator() {
        let csv = "\
iso_code,continent,location,date,new_cases,new_deaths,total_cases,total_deaths,total_vaccinations,people_vaccinated_per_hundred,total_cases_per_million,total_deaths_per_million,population
USA,North America,United States,2021-01-01,0,0,20345678,350123,1234567,0.5,0,0,330000000
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        let mut params = DashboardParams::defaults_for(&dataset);
        params.entity = None;
        let cards = kpi_cards(&dataset, &params);
        assert_eq!(cards.total_cases, "20,345,678");
        assert_eq!(cards.total_deaths, "350,123");
        assert_eq!(cards.total_vaccinations, "1,234,567");
    }

    #[test]
    fn kpis_for_empty_selection_are_not_available() {
        let dataset = Dataset::from_csv_str(SAMPLE_CSV).unwrap();
        let mut params = DashboardParams::defaults_for(&dataset);
        params.range = DateRange(date(2021, 1, 3), date(2021, 1, 1));
        let cards = kpi_cards(&dataset, &params);
        assert_eq!(cards.total_cases, "N/A");
        assert_eq!(cards.total_deaths, "N/A");
        assert_eq!(cards.total_vaccinations, "N/A");
        assert_eq!(cards.raw, Kpis::default());
    }
}
