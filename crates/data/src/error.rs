use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Columnar read error: {0}")]
    PolarsError(#[from] polars::error::PolarsError),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported file extension '{0}' (use .parquet or .csv)")]
    UnsupportedFormat(String),

    #[error("Unknown data category '{0}'")]
    UnknownCategory(String),
}
