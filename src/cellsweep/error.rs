use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Failed to load matrix: {0}")]
    Load(#[from] hdf5::Error),

    #[error("Malformed matrix file {path}: {reason}")]
    Matrix { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tool error: {0}")]
    Tool(String),
}

pub type Result<T> = std::result::Result<T, SweepError>;
