//! In-memory dataset and query layer for COVID-19 country observations.
//!
//! This crate loads an Our World in Data CSV export once, normalizes it, and
//! answers bounded queries over the resulting immutable table.
//!
//! # Architecture
//!
//! - [`Dataset`] is an `Arc<[Record]>` handle: cheap to clone, `Send + Sync`,
//!   never mutated after load. Every query borrows it.
//! - [`loader`] builds a `Dataset` from a CSV string, reader, or file path
//!   (gzip-compressed files are decompressed transparently).
//! - [`view`] holds pure functions over any slice of records: range
//!   filtering, KPI maxima, time-bucket resampling and rolling means.
//! - Dataset-level queries (top-N, latest snapshot, selector lists, map
//!   frames) live in `queries` as methods on [`Dataset`].
//!
//! # Usage
//!
//! ```rust
//! use covid_data::Dataset;
//! use covid_owid::metric::Metric;
//!
//! let csv = "iso_code,continent,location,date,new_cases,new_deaths,total_cases,total_deaths,\
//! total_vaccinations,people_vaccinated_per_hundred,total_cases_per_million,\
//! total_deaths_per_million,population\n\
//! FRA,Europe,France,2021-01-01,30,2,300,20,,,4.6,0.3,65000000\n";
//! let dataset = Dataset::from_csv_str(csv).unwrap();
//! let top = dataset.top_n(Metric::TotalCases, None, 10);
//! assert_eq!(top[0].location, "France");
//! ```

pub mod error;
pub mod loader;
pub mod models;
mod queries;
pub mod view;

pub use error::{LoadError, Result};
pub use loader::prepare_dataset;

use covid_owid::metric::Metric;
use covid_owid::record::Record;
use std::sync::Arc;

/// Number of rows returned by the top-N ranking when no count is given.
pub const DEFAULT_TOP_N: usize = 10;

/// Number of trailing rows averaged by the rolling mean when no window is given.
pub const DEFAULT_ROLLING_WINDOW: usize = 7;

/// The full, ordered, immutable collection of country records.
///
/// Rows keep the order of the source file. Cloning shares the same
/// underlying records.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Dataset {
    /// Build a dataset from already-parsed records, enforcing the load-time
    /// invariants: aggregate rows (non 3-letter codes) are dropped and any
    /// non-finite numeric value becomes zero.
    pub fn from_records(records: Vec<Record>) -> Self {
        let records: Vec<Record> = records
            .into_iter()
            .filter(|r| Record::is_country_code(&r.iso_code))
            .map(|mut r| {
                for metric in Metric::ALL {
                    let value = r.value_mut(metric);
                    if !value.is_finite() {
                        *value = 0.0;
                    }
                }
                r
            })
            .collect();
        Self {
            records: records.into(),
        }
    }

    /// All records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
