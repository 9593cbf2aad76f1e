use std::collections::HashMap;

use crate::error::HandlerError;

/// HTTP request methods.
///
/// Only GET and POST are routed. Every other token is kept in `Other` and
/// answered with 405 Method Not Allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// Any other token found in the method position, kept verbatim.
    Other(String),
}

impl Method {
    /// Parses an HTTP method token.
    ///
    /// Matching is case-sensitive, so `get` becomes `Method::Other("get")`.
    ///
    /// ```
    /// # use courier::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(s) => s,
        }
    }
}

/// A parsed request head.
///
/// The body is not stored here: it stays in the connection's buffered
/// reader, positioned right after the header terminator, until a handler
/// asks for it.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// The request target exactly as sent (e.g. "/echo/abc")
    pub path: String,
    /// Third request-line token, if any. Not used for routing.
    pub version: Option<String>,
    /// Header names keep the case they were sent with; the last duplicate wins.
    pub headers: HashMap<String, String>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            version: None,
            headers: HashMap::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            version: self.version,
            headers: self.headers,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Looks up a header by its exact name.
    ///
    /// No case folding is done: `user-agent` does not match `User-Agent`.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// The declared body length.
    ///
    /// A missing header is [`HandlerError::MissingLength`]; a value that is
    /// not a non-negative integer is [`HandlerError::InvalidLength`].
    pub fn content_length(&self) -> Result<usize, HandlerError> {
        let value = self
            .header("Content-Length")
            .ok_or(HandlerError::MissingLength)?;

        value
            .parse::<usize>()
            .map_err(|_| HandlerError::InvalidLength(value.to_string()))
    }
}
