//! Dispatch - path-routed HTTP request dispatcher
//!
//! Accepts HTTP/1.1 requests, routes them by exact path to small
//! self-contained handlers, and answers with a plain text body.

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod lookup;
pub mod router;
pub mod server;
pub mod stream;
pub mod upstream;
pub mod validators;
