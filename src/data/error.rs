//! Dataset error types
//!
//! Defines all errors that can occur while loading or aggregating the dataset.

use thiserror::Error;

/// Errors that can occur in the data layer
#[derive(Error, Debug)]
pub enum DataError {
    /// The HTTP request for the dataset failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The dataset server answered with a non-success status
    #[error("HTTP {status} while fetching {url}")]
    Status { url: String, status: u16 },

    /// CSV decoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A row has a different number of fields than the header
    #[error("Row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The CSV had no header row
    #[error("Dataset is empty")]
    Empty,

    /// Requested column does not exist
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// A value column contained text
    #[error("Column {column} is not numeric at row {row}")]
    NonNumeric { column: String, row: usize },
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::UnknownColumn("lifeExpectancy".to_string());
        assert_eq!(err.to_string(), "Unknown column: lifeExpectancy");

        let err = DataError::RaggedRow {
            row: 3,
            expected: 6,
            found: 5,
        };
        assert_eq!(err.to_string(), "Row 3 has 5 fields, expected 6");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let data_err: DataError = io_err.into();
        assert!(matches!(data_err, DataError::Io(_)));
    }
}
