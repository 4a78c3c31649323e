use std::path::PathBuf;
use thiserror::Error;

/// Result type for scenetab operations
pub type Result<T> = std::result::Result<T, SceneTabError>;

/// Error types for scenetab operations
#[derive(Error, Debug)]
pub enum SceneTabError {
    /// Scene-graph JSON file could not be read or parsed
    #[error("failed to load {}: {message}", path.display())]
    LoadError { path: PathBuf, message: String },

    /// Attribute triple without exactly three `|`-delimited fields
    #[error("malformed attribute triple in record {record_id}: {chunk:?}")]
    MalformedAttribute { record_id: String, chunk: String },

    /// CSV serialization error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
