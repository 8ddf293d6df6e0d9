//! Error types for dataset loading.

use thiserror::Error;

/// Everything that can stop a page (or the CLI) from initializing.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV file loaded but contains no data")]
    Empty,
    #[error("required columns missing: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// A specialized Result type for dataset loading.
pub type Result<T> = std::result::Result<T, LoadError>;
