use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::config::Config;
use crate::http::{Completed, Query, ResponseSink};
use crate::lookup::{Country, EUROPEAN_COUNTRIES};

/// Picks a country uniformly at random from the static table.
pub fn pick() -> Option<&'static Country> {
    EUROPEAN_COUNTRIES.choose(&mut rand::thread_rng())
}

pub async fn handle(_config: Arc<Config>, _query: Query, sink: ResponseSink) -> Completed {
    match pick() {
        Some(country) => sink.end(format!(
            "Random European Country: {}\nISO Code: {}",
            country.name, country.iso_code
        )),
        None => sink.finish(),
    }
}
