//! Chunked, marker-filtered text read.
//!
//! Each chunk of the file is decoded and split on `\n` on its own. Segments
//! containing the marker are kept, each followed by a newline. A line that
//! straddles two chunks is seen as two unrelated segments, so a marker split
//! across the boundary is missed and a matching half-line is returned on its
//! own. Only UTF-8 decoding state crosses chunk boundaries: an incomplete
//! multibyte sequence at the end of a chunk is held back and prefixed to the
//! next one.

use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::error::{HandlerError, HandlerResult};

/// Accumulates matching segments across chunks.
#[derive(Debug)]
pub struct LineFilter {
    marker: String,
    /// Trailing bytes of an incomplete UTF-8 sequence from the previous chunk.
    carry: Vec<u8>,
    matched: String,
}

impl LineFilter {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            carry: Vec::new(),
            matched: String::new(),
        }
    }

    /// Decodes one chunk and filters its segments.
    pub fn push_chunk(&mut self, chunk: &[u8]) {
        let text = self.decode(chunk);
        self.filter_segments(&text);
    }

    /// Flushes any held-back bytes and returns the accumulated matches.
    pub fn finish(mut self) -> String {
        if !self.carry.is_empty() {
            let tail = String::from_utf8_lossy(&std::mem::take(&mut self.carry)).into_owned();
            self.filter_segments(&tail);
        }
        self.matched
    }

    fn filter_segments(&mut self, text: &str) {
        for segment in text.split('\n') {
            if segment.contains(self.marker.as_str()) {
                self.matched.push_str(segment);
                self.matched.push('\n');
            }
        }
    }

    fn decode(&mut self, chunk: &[u8]) -> String {
        let mut bytes = std::mem::take(&mut self.carry);
        bytes.extend_from_slice(chunk);

        let mut text = String::with_capacity(bytes.len());
        let mut rest = bytes.as_slice();
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    text.push_str(valid);
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    text.push_str(&String::from_utf8_lossy(valid));
                    match e.error_len() {
                        Some(bad) => {
                            text.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[bad..];
                        }
                        None => {
                            self.carry = after.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        text
    }
}

/// Reads `path` in chunks of at most `chunk_size` bytes and returns every
/// segment containing `marker`, newline-terminated, in file order.
pub async fn filter_file(path: &Path, chunk_size: usize, marker: &str) -> HandlerResult<String> {
    let mut file = File::open(path)
        .await
        .map_err(|e| HandlerError::io("open", path, e))?;

    let mut filter = LineFilter::new(marker);
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut chunks = 0usize;

    loop {
        let n = file
            .read(&mut buf)
            .await
            .map_err(|e| HandlerError::io("read", path, e))?;
        if n == 0 {
            break;
        }
        chunks += 1;
        filter.push_chunk(&buf[..n]);
    }

    tracing::debug!(path = %path.display(), chunks, "Finished filtered read");
    Ok(filter.finish())
}
