//! Internal failure taxonomy for handlers.
//!
//! Nothing here reaches the client verbatim. Each handler maps a
//! `HandlerError` to its own fixed response text and logs the detail.

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("{0} not passed")]
    MissingParameter(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("{action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("upstream request failed: {0:#}")]
    Upstream(#[from] anyhow::Error),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl HandlerError {
    pub fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        HandlerError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type HandlerResult<T> = Result<T, HandlerError>;
