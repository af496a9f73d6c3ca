use std::sync::Arc;

use serde_json::{Map, Value};
use url::{Url, form_urlencoded};

use crate::config::Config;
use crate::error::HandlerError;
use crate::http::{Completed, Query, ResponseSink};

/// The parts of a URL reported by `/ParseUrl`. `None` renders as `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBreakdown {
    pub protocol: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub path: String,
    pub query: Map<String, Value>,
    pub hash: Option<String>,
}

impl UrlBreakdown {
    /// Breaks `raw` apart. Absolute URLs are parsed fully; anything else is
    /// treated as a bare path with optional query and fragment.
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) => Self::from_url(&url),
            Err(_) => Self::from_relative(raw),
        }
    }

    fn from_url(url: &Url) -> Self {
        let host = url.host_str().map(|host| match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        });

        let mut path = url.path().to_string();
        if let Some(query) = url.query() {
            path.push('?');
            path.push_str(query);
        }

        Self {
            protocol: Some(format!("{}:", url.scheme())),
            host,
            port: url.port().map(|p| p.to_string()),
            path,
            query: query_object(url.query().unwrap_or_default()),
            hash: url.fragment().map(|f| format!("#{}", f)),
        }
    }

    fn from_relative(raw: &str) -> Self {
        let (before_hash, hash) = match raw.split_once('#') {
            Some((head, fragment)) => (head, Some(format!("#{}", fragment))),
            None => (raw, None),
        };
        let query = before_hash
            .split_once('?')
            .map(|(_, q)| q)
            .unwrap_or_default();

        Self {
            protocol: None,
            host: None,
            port: None,
            path: before_hash.to_string(),
            query: query_object(query),
            hash,
        }
    }

    pub fn render(&self) -> String {
        let host = or_null(&self.host);
        format!(
            "Protocol: {}\nHost: {}\nPort: {}\nPath: {}\nQuerystring: {}\nHash: {}\nParsed Host: {}",
            or_null(&self.protocol),
            host,
            or_null(&self.port),
            self.path,
            Value::Object(self.query.clone()),
            or_null(&self.hash),
            host,
        )
    }
}

fn query_object(raw: &str) -> Map<String, Value> {
    form_urlencoded::parse(raw.as_bytes())
        .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
        .collect()
}

fn or_null(part: &Option<String>) -> &str {
    part.as_deref().unwrap_or("null")
}

pub async fn handle(_config: Arc<Config>, query: Query, sink: ResponseSink) -> Completed {
    match query.value("someurl") {
        Some(someurl) => sink.end(UrlBreakdown::parse(someurl).render()),
        None => sink.end(HandlerError::MissingParameter("someurl").to_string()),
    }
}
