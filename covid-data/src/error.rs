/// Error types for loading the dataset
use thiserror::Error;

/// Raised while reading or normalizing the source CSV.
///
/// Every variant is fatal: a process cannot serve queries without its dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source file could not be opened or read
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV structure itself is malformed
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A column the loader depends on is absent from the header row
    #[error("required column `{0}` is missing")]
    MissingColumn(&'static str),

    /// A row holds more cells than the header names
    #[error("line {line}: expected at most {expected} fields, found {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A country row carries a date that is not `YYYY-MM-DD`
    #[error("line {line}: invalid date `{value}`")]
    InvalidDate { line: u64, value: String },

    /// A non-empty numeric cell failed to parse
    #[error("line {line}: invalid number `{value}` in column `{column}`")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
