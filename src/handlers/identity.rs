use std::sync::Arc;

use crate::config::Config;
use crate::error::HandlerError;
use crate::http::{Completed, Query, ResponseSink};
use crate::validators::validate_spanish_dni;

pub async fn handle(_config: Arc<Config>, query: Query, sink: ResponseSink) -> Completed {
    let Some(dni) = query.value("dni") else {
        return sink.end(HandlerError::MissingParameter("dni").to_string());
    };

    if validate_spanish_dni(dni) {
        sink.end("valid")
    } else {
        sink.end("invalid")
    }
}
