use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type used across the crate.
pub type BikeshareResult<T> = Result<T, BikeshareError>;

/// Error type returned by loading, reporting and session functions.
///
/// This is a single error enum shared by ingestion, configuration and the reports.
#[derive(Debug, Error)]
pub enum BikeshareError {
    /// Underlying I/O error (console read/write failures, unreadable config file).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file could not be decoded.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration decoded but failed validation.
    #[error("invalid config: {message}")]
    InvalidConfig { message: String },

    /// The city's backing file is missing or cannot be opened.
    #[error("no trip data for {city}: cannot open '{}': {source}", path.display())]
    DataSourceNotFound {
        city: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input does not conform to the expected schema (missing required columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A report that needs at least one row was given an empty table.
    #[error("{report}: no trips in the selected data")]
    EmptyDataset { report: &'static str },
}
