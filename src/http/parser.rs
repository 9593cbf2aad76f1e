use std::collections::HashMap;
use std::io;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};

#[derive(Debug, Error)]
pub enum ParseError {
    /// The stream failed or closed before the header terminator.
    #[error("transport error while reading request head: {0}")]
    Transport(#[from] io::Error),

    /// The request line had fewer than two whitespace-separated tokens.
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),
}

impl ParseError {
    /// Both kinds of parse failure are answered with a bare 400.
    pub fn into_response(self) -> Response {
        Response::status_only(StatusCode::BadRequest)
    }
}

/// Reads a request line and header block from `reader`.
///
/// Stops right after the empty line that ends the headers, so any body
/// bytes remain unread in `reader`.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let request_line = read_line(reader).await?;
    let (method, path, version) = parse_request_line(&request_line)?;

    let mut headers = HashMap::new();
    loop {
        let line = read_line(reader).await?;
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = parse_header_line(&line) {
            headers.insert(key, value);
        }
    }

    Ok(Request {
        method,
        path,
        version,
        headers,
    })
}

/// Splits a request line into method, target and optional version.
pub fn parse_request_line(line: &str) -> Result<(Method, String, Option<String>), ParseError> {
    let mut parts = line.split_whitespace();

    let (Some(method), Some(path)) = (parts.next(), parts.next()) else {
        return Err(ParseError::MalformedRequestLine(line.to_string()));
    };
    let version = parts.next().map(str::to_string);

    Ok((Method::parse(method), path.to_string(), version))
}

/// Splits a header line on its first colon and trims both halves.
///
/// Returns `None` for lines with no colon; callers skip those.
pub fn parse_header_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}

/// Reads one `\n`-terminated line and strips the trailing CR/LF.
///
/// End of stream before a `\n` is a transport error, even when some bytes
/// were read.
async fn read_line<R>(reader: &mut R) -> Result<String, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf).await?;

    if buf.last() != Some(&b'\n') {
        return Err(ParseError::Transport(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "connection closed before end of line",
        )));
    }

    let line = String::from_utf8_lossy(&buf);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
