//! HTTP protocol implementation.
//!
//! A small HTTP/1.1 server layer with keep-alive support. It knows nothing
//! about routes; a [`Connection`](connection::Connection) hands each parsed
//! request target to the [`Router`](crate::router::Router) and writes back
//! whatever body the handler completed.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection request/response state machine
//! - **`parser`**: parses incoming HTTP requests from byte buffers
//! - **`request`**: HTTP request representation and target splitting
//! - **`query`**: best-effort query string decoding
//! - **`sink`**: the one-shot body sink handed to handlers
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Dispatch to the routed handler
//!        └──────┬───────────┘
//!               │ Body completed
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → Reading (same connection)
//!               └─ Close → Closed
//! ```

pub mod connection;
pub mod parser;
pub mod query;
pub mod request;
pub mod response;
pub mod sink;
pub mod writer;

pub use query::Query;
pub use sink::{Completed, ResponseSink};
