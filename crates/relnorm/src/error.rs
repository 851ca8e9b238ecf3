//! Error types for the relnorm library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for relnorm operations.
///
/// The normalization core itself never fails: degenerate inputs degrade to
/// warnings on the result. Errors only arise at the ingestion boundary and
/// when callers request an unknown stage.
#[derive(Debug, Error)]
pub enum RelnormError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Unknown normalization stage name.
    #[error("Unknown stage '{0}' (expected unf, 1nf, 2nf, or 3nf)")]
    UnknownStage(String),
}

/// Result type alias for relnorm operations.
pub type Result<T> = std::result::Result<T, RelnormError>;
