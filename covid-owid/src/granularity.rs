use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when an aggregation code is neither `D`, `W`, `M` nor their names.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("unknown aggregation `{0}` (expected D, W or M)")]
pub struct ParseGranularityError(pub String);

/// Time-bucket size used when aggregating a series.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
pub enum Granularity {
    /// One row per observation; no aggregation.
    #[default]
    #[serde(rename = "D")]
    Daily,
    /// Calendar weeks ending on Sunday.
    #[serde(rename = "W")]
    Weekly,
    /// Calendar months.
    #[serde(rename = "M")]
    Monthly,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [
        Granularity::Daily,
        Granularity::Weekly,
        Granularity::Monthly,
    ];

    /// Short code shown on the aggregation toggle.
    pub fn code(&self) -> &'static str {
        match self {
            Granularity::Daily => "D",
            Granularity::Weekly => "W",
            Granularity::Monthly => "M",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Daily => "Daily",
            Granularity::Weekly => "Weekly",
            Granularity::Monthly => "Monthly",
        }
    }

    /// The date that labels the bucket containing `date`.
    ///
    /// Weekly buckets are labelled by the Sunday closing the week, monthly
    /// buckets by the last day of the month, daily buckets by the date itself.
    pub fn bucket_end(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Daily => date,
            Granularity::Weekly => {
                let to_sunday = 6 - date.weekday().num_days_from_monday();
                date.checked_add_days(Days::new(u64::from(to_sunday)))
                    .unwrap_or(date)
            }
            Granularity::Monthly => last_day_of_month(date),
        }
    }

    /// The label of the bucket that follows the bucket labelled `bucket_end`.
    pub fn next_bucket_end(&self, bucket_end: NaiveDate) -> Option<NaiveDate> {
        match self {
            Granularity::Daily => bucket_end.succ_opt(),
            Granularity::Weekly => bucket_end.checked_add_days(Days::new(7)),
            Granularity::Monthly => bucket_end.succ_opt().map(last_day_of_month),
        }
    }
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "daily" | "raw" => Ok(Granularity::Daily),
            "w" | "weekly" => Ok(Granularity::Weekly),
            "m" | "monthly" => Ok(Granularity::Monthly),
            _ => Err(ParseGranularityError(s.to_string())),
        }
    }
}
