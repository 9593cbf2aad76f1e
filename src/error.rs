//! Errors raised while handling a parsed request.
//!
//! Every variant maps to one status code. The client only ever sees that
//! status (plus the fixed `Path not found` text for unmatched routes);
//! the detail carried here is for the logs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::http::response::{Response, StatusCode};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Content-Length header is required")]
    MissingLength,

    #[error("invalid Content-Length: {0:?}")]
    InvalidLength(String),

    #[error("request body shorter than declared: expected {expected} bytes, got {received}")]
    ShortBody { expected: usize, received: usize },

    #[error("cannot read {path:?}: {source}")]
    NotFound { path: PathBuf, source: io::Error },

    #[error("gzip encoding failed: {0}")]
    Encoding(#[source] io::Error),

    #[error("cannot store {path:?}: {source}")]
    Storage { path: PathBuf, source: io::Error },

    #[error("method {0} not allowed")]
    UnsupportedMethod(String),

    #[error("no route for {0}")]
    UnmatchedRoute(String),
}

impl HandlerError {
    pub fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::NotFound {
            path: path.into(),
            source,
        }
    }

    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::MissingLength => StatusCode::LengthRequired,
            HandlerError::InvalidLength(_) | HandlerError::ShortBody { .. } => {
                StatusCode::BadRequest
            }
            HandlerError::NotFound { .. } | HandlerError::UnmatchedRoute(_) => {
                StatusCode::NotFound
            }
            HandlerError::UnsupportedMethod(_) => StatusCode::MethodNotAllowed,
            HandlerError::Encoding(_) | HandlerError::Storage { .. } => {
                StatusCode::InternalServerError
            }
        }
    }

    pub fn into_response(self) -> Response {
        match self {
            HandlerError::UnmatchedRoute(_) => Response::path_not_found(),
            other => Response::status_only(other.status()),
        }
    }
}
