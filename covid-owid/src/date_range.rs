use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date window: `DateRange(start, end)` covers every date from
/// the start date through the end date.
///
/// A range whose start falls after its end is still a valid value; it simply
/// contains no dates.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Serialize, Deserialize)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    pub fn start(&self) -> NaiveDate {
        self.0
    }

    pub fn end(&self) -> NaiveDate {
        self.1
    }

    /// True when `start > end`.
    pub fn is_inverted(&self) -> bool {
        self.0 > self.1
    }

    /// Whether `date` lies within `[start, end]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0 <= date && date <= self.1
    }
}
