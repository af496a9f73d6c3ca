use std::sync::Arc;

use crate::config::Config;
use crate::error::HandlerError;
use crate::http::{Completed, Query, ResponseSink};

pub async fn handle(_config: Arc<Config>, query: Query, sink: ResponseSink) -> Completed {
    match query.value("key") {
        Some(key) => sink.end(format!("Hello, {}!", key)),
        None => sink.end(HandlerError::MissingParameter("key").to_string()),
    }
}
