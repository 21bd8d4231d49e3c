use std::path::PathBuf;

use thiserror::Error;
use tracing::error;

/// Error types raised while loading the rental datasets.
///
/// All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file is missing or unreadable
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the file
    #[error("Malformed CSV file {file}: {message}")]
    Csv { file: String, message: String },

    /// A column the dashboard depends on is absent
    #[error("{file}: missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    /// A cell is null or cannot be converted to the column's type.
    /// `row` is 1-based and does not count the header.
    #[error("{file}: invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        file: String,
        column: String,
        row: usize,
        value: String,
    },

    /// A `dteday` cell is not a calendar date
    #[error("{file}: cannot parse date '{value}' at row {row}")]
    DateParse {
        file: String,
        row: usize,
        value: String,
    },

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),
}

impl From<polars::error::PolarsError> for LoadError {
    fn from(error: polars::error::PolarsError) -> Self {
        let err = LoadError::DataFrame(error.to_string());
        error!(?err, "DataFrame error while loading dataset");
        err
    }
}

/// Type alias for Result with LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
