use dispatch::http::request::{Method, Request, split_target};
use std::collections::HashMap;

fn request(version: &str, headers: &[(&str, &str)]) -> Request {
    Request {
        method: Method::GET,
        path: "/".to_string(),
        version: version.to_string(),
        headers: headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
        body: vec![],
    }
}

#[test]
fn test_request_header_retrieval() {
    let req = request("HTTP/1.1", &[("Host", "localhost:3000")]);

    assert_eq!(req.header("Host"), Some("localhost:3000"));
    assert_eq!(req.header("host"), Some("localhost:3000"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_keep_alive_http11_default() {
    assert!(request("HTTP/1.1", &[]).keep_alive());
}

#[test]
fn test_request_keep_alive_http10_default() {
    assert!(!request("HTTP/1.0", &[]).keep_alive());
    assert!(request("HTTP/1.0", &[("Connection", "keep-alive")]).keep_alive());
}

#[test]
fn test_request_keep_alive_close() {
    assert!(!request("HTTP/1.1", &[("Connection", "close")]).keep_alive());
    assert!(!request("HTTP/1.1", &[("connection", "Close")]).keep_alive());
}

#[test]
fn test_split_target_path_and_query() {
    assert_eq!(
        split_target("/ParseUrl?someurl=http%3A%2F%2Fa.com#frag"),
        ("/ParseUrl", "someurl=http%3A%2F%2Fa.com")
    );
    assert_eq!(split_target("/get?"), ("/get", ""));
}

#[test]
fn test_request_method_from_string() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("POST"), Some(Method::POST));
    assert_eq!(Method::from_str("INVALID"), None);
    assert_eq!(Method::from_str("get"), None); // Case-sensitive
}
