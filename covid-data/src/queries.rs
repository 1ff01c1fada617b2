//! Dataset-level queries.
//!
//! Ranking, snapshot and map queries all anchor on the latest date present
//! in the whole dataset, before any continent filter is applied.

use crate::models::{MapFrame, MapPoint};
use crate::view;
use crate::Dataset;
use chrono::NaiveDate;
use covid_owid::date_range::DateRange;
use covid_owid::metric::Metric;
use covid_owid::record::Record;
use std::collections::{BTreeMap, BTreeSet};

impl Dataset {
    /// Records for `entity` (or every entity) dated within `range`.
    ///
    /// See [`view::filter_range`].
    pub fn filter_range(&self, entity: Option<&str>, range: DateRange) -> Vec<Record> {
        let rows = view::filter_range(self.records(), entity, range);
        log::info!(
            "[COVID] query: filter_range({:?}, {} .. {}) returned {} records",
            entity,
            range.start(),
            range.end(),
            rows.len()
        );
        rows
    }

    /// The latest observation date, or `None` for an empty dataset.
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.records().iter().map(|r| r.date).max()
    }

    /// The earliest and latest observation dates.
    pub fn date_bounds(&self) -> Option<DateRange> {
        let min = self.records().iter().map(|r| r.date).min()?;
        let max = self.latest_date()?;
        Some(DateRange(min, max))
    }

    /// Rows at the latest date, optionally restricted to one continent.
    ///
    /// Yields one row per entity reporting on that date; used for
    /// cross-metric comparisons such as vaccination rate against deaths.
    pub fn latest_snapshot(&self, continent: Option<&str>) -> Vec<Record> {
        let rows: Vec<Record> = self
            .latest_rows(continent)
            .into_iter()
            .cloned()
            .collect();
        log::info!(
            "[COVID] query: latest_snapshot({:?}) returned {} records",
            continent,
            rows.len()
        );
        rows
    }

    /// The `n` rows at the latest date with the largest `metric`, descending.
    ///
    /// Ties keep their dataset order.
    pub fn top_n(&self, metric: Metric, continent: Option<&str>, n: usize) -> Vec<Record> {
        let mut rows = self.latest_rows(continent);
        // sort_by is stable, so equal values stay in dataset order
        rows.sort_by(|a, b| b.value(metric).total_cmp(&a.value(metric)));
        let rows: Vec<Record> = rows.into_iter().take(n).cloned().collect();
        log::info!(
            "[COVID] query: top_n({}, {:?}, {}) returned {} records",
            metric,
            continent,
            n,
            rows.len()
        );
        rows
    }

    fn latest_rows(&self, continent: Option<&str>) -> Vec<&Record> {
        let Some(latest) = self.latest_date() else {
            return Vec::new();
        };
        self.records()
            .iter()
            .filter(|r| r.date == latest)
            .filter(|r| continent.map_or(true, |c| r.continent == c))
            .collect()
    }

    /// Distinct non-empty continents, sorted.
    pub fn continents(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records()
            .iter()
            .map(|r| r.continent.as_str())
            .filter(|c| !c.is_empty())
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// Distinct entity names, sorted, optionally restricted to one continent.
    pub fn entities(&self, continent: Option<&str>) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records()
            .iter()
            .filter(|r| continent.map_or(true, |c| r.continent == c))
            .map(|r| r.location.as_str())
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// One frame per date, ascending, holding each country's `metric` value.
    ///
    /// Drives an animated choropleth; `continent` narrows the countries shown.
    pub fn map_frames(&self, metric: Metric, continent: Option<&str>) -> Vec<MapFrame> {
        let mut frames: BTreeMap<NaiveDate, Vec<MapPoint>> = BTreeMap::new();
        for record in self
            .records()
            .iter()
            .filter(|r| continent.map_or(true, |c| r.continent == c))
        {
            frames.entry(record.date).or_default().push(MapPoint {
                iso_code: record.iso_code.clone(),
                location: record.location.clone(),
                value: record.value(metric),
            });
        }
        let frames: Vec<MapFrame> = frames
            .into_iter()
            .map(|(date, points)| MapFrame { date, points })
            .collect();
        log::info!(
            "[COVID] query: map_frames({}, {:?}) returned {} frames",
            metric,
            continent,
            frames.len()
        );
        frames
    }
}
