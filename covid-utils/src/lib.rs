//! Shared utility functions for the COVID dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

}

/// Number formatting for headline figures
pub mod numbers {
    /// Text shown in place of a figure when a view holds no data.
    pub const NOT_AVAILABLE: &str = "N/A";

    /// Round to a whole number and group digits in thousands: `1234567.4` -> "1,234,567".
    pub fn format_thousands(value: f64) -> String {
        let rounded = format!("{:.0}", value.abs());
        let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3 + 1);
        for (i, digit) in rounded.chars().enumerate() {
            if i > 0 && (rounded.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        if value < 0.0 && rounded != "0" {
            grouped.insert(0, '-');
        }
        grouped
    }

    /// [`format_thousands`] for present values, [`NOT_AVAILABLE`] otherwise.
    pub fn format_optional(value: Option<f64>) -> String {
        match value {
            Some(v) if v.is_finite() => format_thousands(v),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

}
