use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

const GREETING: &[u8] = b"Hello, World!\n";

/// Body used when the client sent no `User-Agent`, or an empty one.
pub const UNKNOWN_USER_AGENT: &str = "Unknown";

/// `GET /`: the greeting, sent without headers.
pub fn greeting() -> Response {
    ResponseBuilder::new(StatusCode::Ok)
        .body(GREETING.to_vec())
        .unframed()
        .build()
}

/// `GET /user-agent`: echoes the `User-Agent` header.
pub fn user_agent(request: &Request) -> Response {
    let agent = request
        .header("User-Agent")
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN_USER_AGENT);

    Response::text(StatusCode::Ok, agent)
}
