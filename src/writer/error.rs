use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Output file name '{0}' must be a plain file name")]
    InvalidFileName(String),

    #[error("Output path exists but is not a directory: '{0}'")]
    NotADirectory(PathBuf),

    #[error("Failed to create output directory '{0}'")]
    DirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to create output file '{0}'")]
    FileCreate(PathBuf, #[source] std::io::Error),

    #[error("Failed to build table from records")]
    TableBuild(#[source] PolarsError),

    // Errors during CSV writing (inside blocking task)
    #[error("Encoding error writing CSV file '{0}'")]
    CsvEncode(PathBuf, #[source] PolarsError),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
