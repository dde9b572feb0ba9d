//! Error types for the data-loader crate.
//!
//! A load failure is fatal for the whole pipeline run: the dashboard is
//! rendered from a single static file, so there is nothing to recover to.
//! Cell-level coercion failures (currency text, marker-free runtimes) are
//! NOT errors; they become sentinel values during cleaning.

use thiserror::Error;

/// Errors that can occur while loading and cleaning the movie dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed CSV (bad quoting, inconsistent record length, ...)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A column the pipeline depends on is absent from the header row
    #[error("Required column '{column}' not found in dataset header")]
    MissingColumn { column: String },

    /// Row in the dataset couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
