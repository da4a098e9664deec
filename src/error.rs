// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input: {0}")]
    Input(#[source] std::io::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed API response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error {code}: {info}")]
    Api { code: String, info: String },

    #[error("invalid config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl DictError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type DictResult<T> = Result<T, DictError>;
