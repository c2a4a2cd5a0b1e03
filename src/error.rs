// Error types for the shortlist application.
// Covers storage, filesystem, and export failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShortlistError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No data directory available on this platform")]
    MissingDataDir,

    #[error("No upload at index {index}")]
    NoSuchUpload { index: usize },

    #[error("No content for {file_name}: uploads made before a restart keep only their metadata")]
    ContentUnavailable { file_name: String },
}

pub type Result<T> = std::result::Result<T, ShortlistError>;
