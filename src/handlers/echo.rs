use crate::error::HandlerError;
use crate::http::encoding::{self, Negotiation};
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// `GET /echo/{text}`: sends `text` back, gzip-compressed if the client
/// asked for it.
///
/// When `Accept-Encoding` is present but does not offer gzip, the reply
/// has a `Content-Type` and nothing else: no `Content-Length`, no body.
pub fn echo(request: &Request, text: &str) -> Result<Response, HandlerError> {
    let builder = ResponseBuilder::new(StatusCode::Ok).header("Content-Type", "text/plain");

    let response = match encoding::negotiate(request.header("Accept-Encoding")) {
        Negotiation::Identity => builder.body(text.as_bytes().to_vec()).build(),
        Negotiation::Gzip => {
            let compressed = encoding::gzip(text.as_bytes()).map_err(HandlerError::Encoding)?;
            builder
                .header("Content-Encoding", "gzip")
                .body(compressed)
                .build()
        }
        Negotiation::Unsatisfied => builder.unframed().build(),
    };

    Ok(response)
}
