//! One-shot response body sink.
//!
//! A handler receives a [`ResponseSink`], appends zero or more chunks, and
//! hands it back through [`ResponseSink::end`] or [`ResponseSink::finish`].
//! Both consume the sink, so nothing can be written after completion, and the
//! returned [`Completed`] is the only way a handler can produce its result.

use bytes::{Bytes, BytesMut};

#[derive(Debug, Default)]
pub struct ResponseSink {
    body: BytesMut,
}

/// A finished response body. Only obtainable by completing a [`ResponseSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a completed response must be returned to the router"]
pub struct Completed {
    body: Bytes,
}

impl ResponseSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk to the body.
    pub fn write(&mut self, chunk: impl AsRef<[u8]>) {
        self.body.extend_from_slice(chunk.as_ref());
    }

    /// Appends a final chunk and completes the response.
    pub fn end(mut self, chunk: impl AsRef<[u8]>) -> Completed {
        self.write(chunk);
        self.finish()
    }

    /// Completes the response with whatever has been written so far.
    pub fn finish(self) -> Completed {
        Completed {
            body: self.body.freeze(),
        }
    }
}

impl Completed {
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }
}
