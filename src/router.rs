//! Fixed route table.
//!
//! Rules are tried in order and the first match wins. Path suffixes are
//! taken literally, with no percent-decoding.

use crate::http::request::Method;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    /// `GET /`
    Greeting,
    /// `GET /user-agent`
    UserAgent,
    /// `GET /echo/{text}`
    Echo(&'a str),
    /// `GET /files/{name}`
    ServeFile(&'a str),
    /// `POST /files...`
    UploadFile(&'a str),
    /// GET or POST on any other path.
    Unmatched,
    /// Anything but GET or POST.
    MethodNotAllowed,
}

impl<'a> Route<'a> {
    pub fn resolve(method: &Method, path: &'a str) -> Self {
        match method {
            Method::GET => Self::resolve_get(path),
            Method::POST => Self::resolve_post(path),
            _ => Route::MethodNotAllowed,
        }
    }

    fn resolve_get(path: &'a str) -> Self {
        if path == "/" {
            Route::Greeting
        } else if path == "/user-agent" {
            Route::UserAgent
        } else if let Some(text) = path.strip_prefix("/echo/") {
            Route::Echo(text)
        } else if let Some(name) = path.strip_prefix("/files/") {
            Route::ServeFile(name)
        } else {
            Route::Unmatched
        }
    }

    // Upload only needs the `/files` prefix. When the slash after it is
    // missing, the whole path is used as the file name.
    fn resolve_post(path: &'a str) -> Self {
        if path.starts_with("/files") {
            Route::UploadFile(path.strip_prefix("/files/").unwrap_or(path))
        } else {
            Route::Unmatched
        }
    }
}
