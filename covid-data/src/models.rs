//! Query result model structs.
//!
//! All structs derive `Serialize` so the presentation layer can hand them to
//! a charting library as JSON. Dates serialize as `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::Serialize;

/// Headline figures for a view: the highest cumulative value reached.
///
/// Each field is `None` when the view is empty.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Default)]
pub struct Kpis {
    pub cases: Option<f64>,
    pub deaths: Option<f64>,
    pub vaccinations: Option<f64>,
}

/// One point of a trailing rolling mean.
///
/// `value` is `None` until the window has filled.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RollingPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// A single country's value within a map frame.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapPoint {
    pub iso_code: String,
    pub location: String,
    pub value: f64,
}

/// Every country's value for one date; one frame of the animated map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapFrame {
    pub date: NaiveDate,
    pub points: Vec<MapPoint>,
}
