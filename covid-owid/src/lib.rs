pub mod date_range;
pub mod granularity;
pub mod metric;
pub mod record;
