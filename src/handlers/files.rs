use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::error::{HandlerError, HandlerResult};
use crate::http::{Completed, Query, ResponseSink};
use crate::stream::filter_file;

pub const READ_FAILED: &str = "Failed to read file";
pub const LIST_FAILED: &str = "Failed to list files";

/// Names of the entries in `dir`, sorted.
pub async fn list_entries(dir: &Path) -> HandlerResult<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| HandlerError::io("list", dir, e))?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| HandlerError::io("list", dir, e))?
    {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Responds with a JSON array of the entries in the configured root directory.
pub async fn list(config: Arc<Config>, _query: Query, sink: ResponseSink) -> Completed {
    let names = match list_entries(&config.root_dir).await {
        Ok(names) => names,
        Err(e) => {
            tracing::error!(error = %e, "Error listing files");
            return sink.end(LIST_FAILED);
        }
    };

    match serde_json::to_string(&names) {
        Ok(json) => sink.end(json),
        Err(e) => {
            tracing::error!(error = %e, "Error encoding file list");
            sink.end(LIST_FAILED)
        }
    }
}

/// Responds with the marker-bearing lines of the file named by `filename`.
pub async fn full_text(config: Arc<Config>, query: Query, sink: ResponseSink) -> Completed {
    let Some(filename) = query.value("filename") else {
        return sink.end(HandlerError::MissingParameter("filename").to_string());
    };
    let path = PathBuf::from(filename);

    match filter_file(&path, config.read_chunk_size, &config.marker).await {
        Ok(matched) => sink.end(matched),
        Err(e) => {
            tracing::error!(error = %e, "Error reading file");
            sink.end(READ_FAILED)
        }
    }
}
