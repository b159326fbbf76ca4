//! Dashboard error types
//!
//! Errors raised while building figures and dispatching callbacks.

use thiserror::Error;

use crate::data::DataError;

/// Errors from the figure and callback layers
#[derive(Error, Debug)]
pub enum DashError {
    /// The control value is not one of the offered options
    #[error("Invalid option {value:?}, expected one of {options:?}")]
    InvalidOption {
        value: String,
        options: Vec<String>,
    },

    /// No callback produces the requested output
    #[error("No callback registered for output {0}")]
    UnknownOutput(String),

    /// A declared callback input was not supplied
    #[error("Missing callback input {0}")]
    MissingInput(String),

    /// Figure serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Dataset error
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Result type alias for dashboard operations
pub type DashResult<T> = Result<T, DashError>;
