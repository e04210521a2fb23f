use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("malformed ignore file {path}: {source}")]
    IgnoreFile {
        path: PathBuf,
        source: ignore::Error,
    },
    #[error("invalid regex pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("invalid glob pattern {0}")]
    Glob(String),
    #[error("failed to serialize directory structure: {0}")]
    Structure(#[from] serde_json::Error),
}

impl SummaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SummaryError::Io {
            path: path.into(),
            source,
        }
    }
}
