use courier::error::HandlerError;
use courier::http::request::{Method, Request, RequestBuilder};
use std::collections::HashMap;

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("Host".to_string(), "example.com".to_string());
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    let req = Request {
        method: Method::GET,
        path: "/".to_string(),
        version: Some("HTTP/1.1".to_string()),
        headers,
    };

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
    assert_eq!(req.header("host"), None);
}

#[test]
fn test_request_content_length_parsing() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/files/a")
        .header("Content-Length", "42")
        .build()
        .unwrap();

    assert_eq!(req.content_length().unwrap(), 42);
}

#[test]
fn test_request_content_length_missing() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/files/a")
        .build()
        .unwrap();

    assert!(matches!(req.content_length(), Err(HandlerError::MissingLength)));
}

#[test]
fn test_request_content_length_invalid() {
    for value in ["not-a-number", "-5", "", "1.5"] {
        let req = RequestBuilder::new()
            .method(Method::POST)
            .path("/files/a")
            .header("Content-Length", value)
            .build()
            .unwrap();

        assert!(
            matches!(req.content_length(), Err(HandlerError::InvalidLength(_))),
            "{value:?} should be rejected"
        );
    }
}

#[test]
fn test_request_builder_requires_method_and_path() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_method_round_trips_through_str() {
    for token in ["GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS", "PATCH", "BREW"] {
        assert_eq!(Method::parse(token).as_str(), token);
    }
}

#[test]
fn test_unrouted_methods_parse_to_other() {
    assert_eq!(Method::parse("GET"), Method::GET);
    assert_eq!(Method::parse("POST"), Method::POST);
    assert_eq!(Method::parse("PUT"), Method::Other("PUT".to_string()));
    assert_eq!(Method::parse("post"), Method::Other("post".to_string()));
}
