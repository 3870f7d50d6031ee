//! Dataset loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading the initial dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Failed to read the dataset file
    #[error("Failed to read dataset from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the dataset file
    #[error("Failed to parse dataset: {0}")]
    ParseFailed(#[from] serde_json::Error),

    /// Loaded records break a data model invariant
    #[error("Dataset invariant violated: {0}")]
    Invariant(String),
}
