//! End-to-end tests over a real socket

use std::net::SocketAddr;
use std::sync::Arc;

use dispatch::config::Config;
use dispatch::router::Router;
use dispatch::server;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn start() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Arc::new(Router::standard(Arc::new(Config::default())));

    tokio::spawn(server::serve(listener, router));
    addr
}

/// Sends one request with `Connection: close` and returns the raw response.
async fn roundtrip(addr: SocketAddr, target: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        target
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

fn body(response: &str) -> &str {
    response.split_once("\r\n\r\n").map(|(_, b)| b).unwrap_or("")
}

#[tokio::test]
async fn test_greeting_over_http() {
    let addr = start().await;

    let response = roundtrip(addr, "/get?key=world").await;

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("Content-Length: 13\r\n"));
    assert!(response.contains("Connection: close\r\n"));
    assert_eq!(body(&response), "Hello, world!");
}

#[tokio::test]
async fn test_unknown_route_over_http() {
    let addr = start().await;

    let response = roundtrip(addr, "/nope").await;

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(body(&response), "method not supported");
}

#[tokio::test]
async fn test_any_method_reaches_handler() {
    let addr = start().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"POST /get?key=post HTTP/1.1\r\nContent-Length: 4\r\nConnection: close\r\n\r\nbody")
        .await
        .unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert_eq!(body(&response), "Hello, post!");
}

#[tokio::test]
async fn test_keep_alive_serves_several_requests() {
    let addr = start().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    stream
        .write_all(b"GET /get?key=one HTTP/1.1\r\n\r\nGET /get?key=two HTTP/1.1\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert_eq!(response.matches("HTTP/1.1 200 OK").count(), 2);
    assert!(response.contains("Hello, one!"));
    assert!(response.ends_with("Hello, two!"));
}

#[tokio::test]
async fn test_malformed_request_gets_bad_request() {
    let addr = start().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(b"BREW /pot HTTP/1.1\r\n\r\n").await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
}

#[tokio::test]
async fn test_concurrent_connections() {
    let addr = start().await;

    let mut tasks = Vec::new();
    for i in 0..16 {
        tasks.push(tokio::spawn(async move {
            let response = roundtrip(addr, &format!("/get?key=client{}", i)).await;
            assert_eq!(body(&response), format!("Hello, client{}!", i));
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }
}
