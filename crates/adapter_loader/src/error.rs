//! Loader error types.

use std::path::PathBuf;

use pricer_saccr::SaCcrError;
use thiserror::Error;

/// Errors raised while reading trade files.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid trade envelope.
    #[error("Malformed trade file {origin}: {source}")]
    Json {
        /// Path or other description of the input
        origin: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A record is missing a field or carries a value of the wrong JSON type.
    #[error("Invalid field '{field}' on trade {trade}: {reason}")]
    InvalidRecord {
        /// Trade id, or `data[<index>]` when the id itself is unusable
        trade: String,
        /// Name of the offending field
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// The `data` array holds no records.
    #[error("Trade file {origin} contains no records")]
    EmptyRecords {
        /// Path or other description of the input
        origin: String,
    },

    /// A record could not be turned into an instrument.
    #[error(transparent)]
    SaCcr(#[from] SaCcrError),
}

/// Result alias for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;
