use std::io;
use thiserror::Error;

/// Error type for rotatype-io operations.
#[derive(Error, Debug)]
pub enum RotatypeIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to read or write a delimited table.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The number of classifications does not match the number of table rows.
    #[error("Expected {expected} classifications for the evaluation table, got {found}")]
    RowCountMismatch { expected: usize, found: usize },
}

///
/// Why a single BLAST row could not be turned into an alignment record.
/// These never abort a read; the row is skipped.
///
#[derive(Error, Debug, PartialEq)]
pub enum BlastRowError {
    #[error("expected {expected} columns, found {found}")]
    TooFewColumns { expected: usize, found: usize },

    #[error("column `{column}` is not numeric: `{value}`")]
    NotNumeric { column: &'static str, value: String },
}

/// Result type alias for rotatype-io operations.
pub type Result<T> = std::result::Result<T, RotatypeIoError>;
