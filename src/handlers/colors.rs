use std::sync::Arc;

use crate::config::Config;
use crate::error::HandlerError;
use crate::http::{Completed, Query, ResponseSink};
use crate::lookup::color_hex;

pub const NOT_FOUND: &str = "Color not found";

pub async fn handle(_config: Arc<Config>, query: Query, sink: ResponseSink) -> Completed {
    let Some(color) = query.value("color") else {
        return sink.end(HandlerError::MissingParameter("color").to_string());
    };

    sink.end(color_hex(color).unwrap_or(NOT_FOUND))
}
