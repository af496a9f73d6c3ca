//! Path-keyed dispatch.
//!
//! The route table is built once, before the listener starts, and is never
//! mutated afterwards. Lookups are exact string matches on the request path;
//! there are no patterns, wildcards or method filters.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::config::Config;
use crate::http::request::split_target;
use crate::http::{Completed, Query, ResponseSink};

/// Body written for any path without a route.
pub const NOT_SUPPORTED: &str = "method not supported";

pub type BoxFuture = Pin<Box<dyn Future<Output = Completed> + Send + 'static>>;

/// A function bound to one route.
///
/// Handlers own everything they touch, so the returned future is `'static`
/// and can run on any worker thread. Any `async fn(Arc<Config>, Query,
/// ResponseSink) -> Completed` implements this trait.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, config: Arc<Config>, query: Query, sink: ResponseSink) -> BoxFuture;
}

impl<F, Fut> Handler for F
where
    F: Fn(Arc<Config>, Query, ResponseSink) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Completed> + Send + 'static,
{
    fn call(&self, config: Arc<Config>, query: Query, sink: ResponseSink) -> BoxFuture {
        Box::pin(self(config, query, sink))
    }
}

/// Collects routes before the table is frozen into a [`Router`].
#[derive(Default)]
pub struct RouterBuilder {
    routes: HashMap<&'static str, Box<dyn Handler>>,
}

impl RouterBuilder {
    /// Binds `path` to `handler`. A later binding for the same path replaces
    /// the earlier one.
    pub fn route<H: Handler>(mut self, path: &'static str, handler: H) -> Self {
        if self.routes.insert(path, Box::new(handler)).is_some() {
            tracing::warn!(path, "Route registered twice, keeping the last handler");
        }
        self
    }

    pub fn build(self, config: Arc<Config>) -> Router {
        Router {
            routes: self.routes,
            config,
        }
    }
}

/// Immutable route table plus the configuration every handler receives.
pub struct Router {
    routes: HashMap<&'static str, Box<dyn Handler>>,
    config: Arc<Config>,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    /// The router serving every endpoint this service exposes.
    pub fn standard(config: Arc<Config>) -> Self {
        crate::handlers::register(Self::builder()).build(config)
    }

    /// Registered paths, sorted.
    pub fn paths(&self) -> Vec<&'static str> {
        let mut paths: Vec<_> = self.routes.keys().copied().collect();
        paths.sort_unstable();
        paths
    }

    /// Routes a raw request target such as `/get?key=world`.
    ///
    /// The handler for the exact path runs with the decoded query; unknown
    /// paths complete immediately with [`NOT_SUPPORTED`]. The router never
    /// inspects what the handler wrote.
    pub async fn dispatch(&self, target: &str) -> Completed {
        let (path, raw_query) = split_target(target);

        match self.routes.get(path) {
            Some(handler) => {
                let query = Query::parse(raw_query);
                tracing::debug!(path, params = query.len(), "Dispatching request");
                handler
                    .call(Arc::clone(&self.config), query, ResponseSink::new())
                    .await
            }
            None => {
                tracing::debug!(path, "No route for path");
                ResponseSink::new().end(NOT_SUPPORTED)
            }
        }
    }
}
