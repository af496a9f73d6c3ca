//! Outbound HTTP/1.1 client.
//!
//! Just enough client to issue a `GET` against a plain-HTTP service and
//! read back one response: one connection per request, `Connection: close`,
//! body delimited by Content-Length or by the server closing the socket.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use bytes::{Buf, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use url::Url;

/// Default buffer size for streaming
const BUFFER_SIZE: usize = 8192;

/// Largest header section accepted from an upstream.
const MAX_HEADER_BYTES: usize = 64 * 1024;

/// A response read back from an upstream server.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct UpstreamClient {
    /// Connection timeout duration
    connect_timeout: Duration,

    /// Timeout for sending the request and reading the whole response
    request_timeout: Duration,
}

impl UpstreamClient {
    pub fn new(connect_timeout: Duration, request_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            request_timeout,
        }
    }

    /// Issues a GET for `url` and returns the full response.
    ///
    /// Only `http` URLs are supported; anything else fails before connecting.
    pub async fn get(&self, url: &Url) -> Result<UpstreamResponse> {
        anyhow::ensure!(
            url.scheme() == "http",
            "unsupported upstream scheme {:?}",
            url.scheme()
        );

        let host = url.host_str().context("Upstream URL missing host")?;
        let port = url.port_or_known_default().unwrap_or(80);
        let addr = format!("{}:{}", host, port);

        let stream = timeout(self.connect_timeout, TcpStream::connect(&addr))
            .await
            .context("Connection timeout")?
            .with_context(|| format!("Failed to connect to {}", addr))?;

        tracing::trace!(upstream = %addr, "Connected to upstream");

        timeout(self.request_timeout, self.exchange(stream, url))
            .await
            .context("Request timeout")?
    }

    async fn exchange(&self, mut stream: TcpStream, url: &Url) -> Result<UpstreamResponse> {
        let request_bytes = build_get_request(url);
        stream.write_all(&request_bytes).await?;
        stream.flush().await?;

        read_http_response(&mut stream).await
    }
}

/// Builds the bytes of a `GET` request for `url`.
pub fn build_get_request(url: &Url) -> Vec<u8> {
    let mut target = url.path().to_string();
    if let Some(query) = url.query() {
        target.push('?');
        target.push_str(query);
    }

    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };

    format!(
        "GET {} HTTP/1.1\r\nHost: {}\r\nAccept: application/json\r\nConnection: close\r\n\r\n",
        target, host
    )
    .into_bytes()
}

async fn read_http_response(stream: &mut TcpStream) -> Result<UpstreamResponse> {
    let mut buffer = BytesMut::with_capacity(BUFFER_SIZE);

    loop {
        let n = stream.read_buf(&mut buffer).await?;

        if n == 0 {
            anyhow::bail!("Connection closed before complete response received");
        }

        if let Some(headers_end) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers_bytes = buffer.split_to(headers_end + 4);
            let (status, headers) = parse_response_headers(&headers_bytes)?;
            let body = read_response_body(stream, &mut buffer, &headers).await?;

            return Ok(UpstreamResponse {
                status,
                headers,
                body,
            });
        }

        if buffer.len() > MAX_HEADER_BYTES {
            anyhow::bail!("Response headers too large");
        }
    }
}

/// Parses a status line plus headers.
pub fn parse_response_headers(headers_bytes: &[u8]) -> Result<(u16, HashMap<String, String>)> {
    let headers_str =
        std::str::from_utf8(headers_bytes).context("Invalid UTF-8 in response headers")?;

    let mut lines = headers_str.lines();

    let status_line = lines.next().context("Empty response")?;
    let parts: Vec<&str> = status_line.splitn(3, ' ').collect();

    if parts.len() < 2 || !parts[0].starts_with("HTTP/") {
        anyhow::bail!("Invalid status line: {}", status_line);
    }

    let status: u16 = parts[1].parse().context("Invalid status code")?;

    let mut headers = HashMap::new();
    for line in lines {
        if line.is_empty() {
            break;
        }

        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    Ok((status, headers))
}

async fn read_response_body(
    stream: &mut TcpStream,
    buffer: &mut BytesMut,
    headers: &HashMap<String, String>,
) -> Result<Vec<u8>> {
    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("Content-Length"))
        .map(|(_, v)| v.parse::<usize>().context("Invalid Content-Length"))
        .transpose()?;

    let Some(content_length) = content_length else {
        // No Content-Length, read until connection closes
        while stream.read_buf(buffer).await? != 0 {}
        return Ok(buffer.split().to_vec());
    };

    let mut body = Vec::with_capacity(content_length);

    let from_buffer = buffer.len().min(content_length);
    body.extend_from_slice(&buffer[..from_buffer]);
    buffer.advance(from_buffer);

    let mut chunk = [0u8; BUFFER_SIZE];
    while body.len() < content_length {
        let to_read = (content_length - body.len()).min(BUFFER_SIZE);
        let n = stream.read(&mut chunk[..to_read]).await?;

        if n == 0 {
            anyhow::bail!("Connection closed before complete body received");
        }

        body.extend_from_slice(&chunk[..n]);
    }

    Ok(body)
}
