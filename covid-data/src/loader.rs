//! CSV loading and normalization.
//!
//! Columns are located by header name, so their order does not matter and
//! unrelated columns are ignored. The required header set is
//! `iso_code,continent,location,date` plus every numeric column in
//! [`Metric::ALL`].
//!
//! # Example CSV
//! ```text
//! iso_code,continent,location,date,total_cases,new_cases,...
//! FRA,Europe,France,2021-01-01,300,30,...
//! OWID_WRL,,World,2021-01-01,985,130,...
//! ```
//!
//! Rows whose `iso_code` is not exactly three characters (continent, income
//! group and world aggregates) are skipped before any field is parsed.

use crate::error::{LoadError, Result};
use crate::Dataset;
use chrono::NaiveDate;
use covid_owid::metric::Metric;
use covid_owid::record::{
    Record, CONTINENT_COLUMN, DATE_COLUMN, DATE_FORMAT, ISO_CODE_COLUMN, LOCATION_COLUMN,
};
use csv::StringRecord;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Cell contents read as a missing value, alongside the empty cell.
const MISSING_MARKERS: [&str; 15] = [
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "#N/A",
    "#N/A N/A", "#NA", "<NA>", "-1.#IND",
];

/// Parse and normalize a CSV source into a [`Dataset`].
pub fn prepare_dataset<R: Read>(source: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = rdr.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let row = result?;
        // Short rows read their missing cells as empty; long rows are misaligned.
        if row.len() > headers.len() {
            return Err(LoadError::TooManyFields {
                line: row.position().map(|p| p.line()).unwrap_or(0),
                expected: headers.len(),
                found: row.len(),
            });
        }
        let iso_code = field(&row, columns.iso_code);
        if !Record::is_country_code(iso_code) {
            skipped += 1;
            continue;
        }
        records.push(columns.parse_record(&row)?);
    }
    log::info!(
        "[COVID] loader: loaded {} country rows, skipped {} aggregate rows",
        records.len(),
        skipped
    );
    Ok(Dataset::from_records(records))
}

impl Dataset {
    /// Load the dataset from an in-memory CSV string.
    pub fn from_csv_str(csv_data: &str) -> Result<Dataset> {
        prepare_dataset(csv_data.as_bytes())
    }

    /// Load the dataset from any reader producing CSV bytes.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
        prepare_dataset(reader)
    }

    /// Load the dataset from a file. Paths ending in `.gz` are decompressed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        let path = path.as_ref();
        log::info!("[COVID] loader: reading {}", path.display());
        let file = BufReader::new(File::open(path)?);
        let gzipped = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
        if gzipped {
            prepare_dataset(GzDecoder::new(file))
        } else {
            prepare_dataset(file)
        }
    }
}

/// Positions of the columns the loader reads, resolved from the header row.
struct ColumnIndex {
    iso_code: usize,
    continent: usize,
    location: usize,
    date: usize,
    numeric: [usize; 9],
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &'static str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(LoadError::MissingColumn(name))
        };
        let mut numeric = [0usize; 9];
        for (slot, metric) in numeric.iter_mut().zip(Metric::ALL) {
            *slot = find(metric.column())?;
        }
        Ok(Self {
            iso_code: find(ISO_CODE_COLUMN)?,
            continent: find(CONTINENT_COLUMN)?,
            location: find(LOCATION_COLUMN)?,
            date: find(DATE_COLUMN)?,
            numeric,
        })
    }

    fn parse_record(&self, row: &StringRecord) -> Result<Record> {
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let date_str = field(row, self.date);
        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| {
            LoadError::InvalidDate {
                line,
                value: date_str.to_string(),
            }
        })?;

        let mut record = Record::zeroed(
            field(row, self.iso_code),
            field(row, self.location),
            field(row, self.continent),
            date,
        );
        for (idx, metric) in self.numeric.iter().zip(Metric::ALL) {
            *record.value_mut(metric) = parse_number(field(row, *idx), line, metric)?;
        }
        Ok(record)
    }
}

/// A trimmed cell, or `""` when the row is too short.
fn field(row: &StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or("").trim()
}

/// Parse a numeric cell; empty cells, missing markers and NaN become zero.
fn parse_number(value: &str, line: u64, metric: Metric) -> Result<f64> {
    if value.is_empty() || MISSING_MARKERS.contains(&value) {
        return Ok(0.0);
    }
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Ok(0.0),
        Err(_) => Err(LoadError::InvalidNumber {
            line,
            column: metric.column(),
            value: value.to_string(),
        }),
    }
}
