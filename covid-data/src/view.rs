//! Pure functions over views: transient sequences of records.
//!
//! A view is any `&[Record]`: the whole dataset or a previously derived
//! result. None of these functions fail; empty input produces empty output
//! (or the `None` sentinel for scalar aggregates).

use crate::models::{Kpis, RollingPoint};
use covid_owid::date_range::DateRange;
use covid_owid::granularity::Granularity;
use covid_owid::metric::Metric;
use covid_owid::record::Record;
use std::collections::BTreeMap;

/// Records dated within `range` (inclusive) and, when `entity` is given,
/// whose location matches it exactly. Input order is preserved.
///
/// An inverted range yields an empty view.
pub fn filter_range(records: &[Record], entity: Option<&str>, range: DateRange) -> Vec<Record> {
    if range.is_inverted() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| range.contains(r.date))
        .filter(|r| entity.map_or(true, |name| r.location == name))
        .cloned()
        .collect()
}

/// The highest cumulative cases, deaths and vaccinations across the view.
pub fn max_metrics(records: &[Record]) -> Kpis {
    Kpis {
        cases: max_of(records, Metric::TotalCases),
        deaths: max_of(records, Metric::TotalDeaths),
        vaccinations: max_of(records, Metric::TotalVaccinations),
    }
}

fn max_of(records: &[Record], metric: Metric) -> Option<f64> {
    records
        .iter()
        .map(|r| r.value(metric))
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

/// Sum every numeric field per time bucket.
///
/// Each output record is dated by its bucket's closing date (see
/// [`Granularity::bucket_end`]). Buckets between the first and last populated
/// one that hold no rows are emitted with zero sums, so the series has no
/// gaps. Identity fields come from the first row: the view is expected to
/// hold a single entity. Daily granularity returns the view unchanged.
pub fn resample(records: &[Record], granularity: Granularity) -> Vec<Record> {
    let first = match records.first() {
        Some(first) if granularity != Granularity::Daily => first,
        _ => return records.to_vec(),
    };
    let empty_bucket =
        |date| Record::zeroed(&first.iso_code, &first.location, &first.continent, date);

    let mut buckets: BTreeMap<_, Record> = BTreeMap::new();
    for record in records {
        let end = granularity.bucket_end(record.date);
        buckets
            .entry(end)
            .or_insert_with(|| empty_bucket(end))
            .accumulate(record);
    }

    if let (Some(&lo), Some(&hi)) = (buckets.keys().next(), buckets.keys().next_back()) {
        let mut cursor = lo;
        while let Some(next) = granularity.next_bucket_end(cursor).filter(|n| *n < hi) {
            buckets.entry(next).or_insert_with(|| empty_bucket(next));
            cursor = next;
        }
    }

    let result: Vec<Record> = buckets.into_values().collect();
    log::debug!(
        "[COVID] view: resample({}) produced {} buckets from {} rows",
        granularity,
        result.len(),
        records.len()
    );
    result
}

/// Trailing arithmetic mean of `metric` over `window` rows, current row
/// included, with rows ordered by date ascending. Rows sharing a date keep
/// their view order.
///
/// The first `window - 1` points are `None`: a mean is only reported once a
/// full window of samples exists. A zero window reports nothing.
pub fn rolling_mean(records: &[Record], metric: Metric, window: usize) -> Vec<RollingPoint> {
    let mut ordered: Vec<&Record> = records.iter().collect();
    ordered.sort_by_key(|r| r.date);
    let values: Vec<f64> = ordered.iter().map(|r| r.value(metric)).collect();

    ordered
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let value = if window > 0 && i + 1 >= window {
                let sum: f64 = values[i + 1 - window..=i].iter().sum();
                Some(sum / window as f64)
            } else {
                None
            };
            RollingPoint {
                date: record.date,
                value,
            }
        })
        .collect()
}
