use std::path::PathBuf;

use thiserror::Error;

/// The unified error type for the `price_bars` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The source path does not exist. Raised before any read or parse attempt.
    #[error("No file found at: {}", path.display())]
    NotFound { path: PathBuf },

    /// The underlying CSV reader rejected the input (malformed record, bad UTF-8, ...).
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    /// A column could not be turned into the type the loader needs.
    #[error("Parse error in column '{column}': {message}")]
    Parse { column: String, message: String },

    /// A generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required field is absent from the table.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A malformed interval token or a non-positive EMA period.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric column holds a value that is not a number.
    #[error("Column '{column}' holds a non-numeric {found} value at position {position}")]
    TypeMismatch {
        column: String,
        position: usize,
        found: &'static str,
    },

    /// A column's length disagrees with the length of the time index.
    #[error("Column '{column}' has {found} values but the index has {expected}")]
    Shape {
        column: String,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
