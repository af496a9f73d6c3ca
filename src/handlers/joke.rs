use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::error::HandlerResult;
use crate::http::{Completed, Query, ResponseSink};
use crate::upstream::UpstreamClient;

pub const FAILED: &str = "Failed to fetch joke";

#[derive(Debug, Deserialize)]
struct JokePayload {
    joke: String,
}

/// Fetches one joke from the configured upstream.
pub async fn fetch_joke(config: &Config) -> HandlerResult<String> {
    let url = Url::parse(&config.joke_url).context("Invalid joke URL")?;
    let client = UpstreamClient::new(
        config.upstream_connect_timeout(),
        config.upstream_request_timeout(),
    );

    let response = client.get(&url).await?;
    if !response.is_success() {
        return Err(anyhow::anyhow!("joke service answered {}", response.status).into());
    }

    let payload: JokePayload =
        serde_json::from_slice(&response.body).context("Malformed joke payload")?;
    Ok(payload.joke)
}

pub async fn handle(config: Arc<Config>, _query: Query, sink: ResponseSink) -> Completed {
    match fetch_joke(&config).await {
        Ok(joke) => sink.end(joke),
        Err(e) => {
            tracing::error!(error = %e, "Error fetching joke");
            sink.end(FAILED)
        }
    }
}
