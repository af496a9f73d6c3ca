use std::sync::Arc;

use crate::config::Config;
use crate::error::{HandlerError, HandlerResult};
use crate::http::{Completed, Query, ResponseSink};

const STATM: &str = "/proc/self/statm";
const PAGE_SIZE: u64 = 4096;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Resident set size of this process, in bytes.
pub async fn resident_bytes() -> HandlerResult<u64> {
    let path = std::path::Path::new(STATM);
    let statm = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| HandlerError::io("read", path, e))?;

    // statm: size resident shared text lib data dt, all in pages
    statm
        .split_whitespace()
        .nth(1)
        .and_then(|pages| pages.parse::<u64>().ok())
        .map(|pages| pages * PAGE_SIZE)
        .ok_or_else(|| HandlerError::Validation(format!("unexpected {} format", STATM)))
}

pub fn format_report(bytes: u64) -> String {
    format!("Memory consumption: {:.2} GB", bytes as f64 / GIB)
}

pub async fn handle(_config: Arc<Config>, _query: Query, sink: ResponseSink) -> Completed {
    let bytes = resident_bytes().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Memory usage unavailable");
        0
    });
    sink.end(format_report(bytes))
}
