//! `/files/` routes: serve a stored file, or store an uploaded body.
//!
//! File names are appended to the base directory as plain text, so an
//! absolute name still lands under it. `..` segments are not filtered.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{info, warn};

use crate::error::HandlerError;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Builds `directory + separator + name` without path joining rules.
fn resolve(directory: Option<&Path>, separator: &str, name: &str) -> io::Result<PathBuf> {
    let directory = directory.ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no files directory configured")
    })?;

    let mut path = directory.as_os_str().to_os_string();
    path.push(separator);
    path.push(name);
    Ok(PathBuf::from(path))
}

/// `GET /files/{name}`
///
/// The `Content-Length` is the size reported when the file is opened.
/// Reading fewer bytes than that fails instead of sending a truncated body.
pub async fn serve(directory: Option<&Path>, name: &str) -> Result<Response, HandlerError> {
    let path = resolve(directory, "", name).map_err(|e| HandlerError::not_found(name, e))?;

    let contents = read_whole(&path)
        .await
        .map_err(|e| HandlerError::not_found(&path, e))?;

    Ok(ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "application/octet-stream")
        .body(contents)
        .build())
}

async fn read_whole(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path).await?;
    let size = file.metadata().await?.len();

    let mut contents = vec![0u8; size as usize];
    file.read_exact(&mut contents).await?;
    Ok(contents)
}

/// `POST /files/{name}`
///
/// Reads exactly `Content-Length` bytes from `body` before touching the
/// file system, so a short body never leaves a file behind. The stored
/// bytes are echoed back in the 201 reply.
pub async fn upload<R>(
    request: &Request,
    body: &mut R,
    directory: Option<&Path>,
    name: &str,
) -> Result<Response, HandlerError>
where
    R: AsyncRead + Unpin,
{
    let expected = request.content_length()?;

    let mut contents = Vec::with_capacity(expected.min(64 * 1024));
    if let Err(e) = body.take(expected as u64).read_to_end(&mut contents).await {
        warn!(error = %e, "Error reading request body");
    }
    let received = contents.len();
    if received < expected {
        return Err(HandlerError::ShortBody { expected, received });
    }

    let path = resolve(directory, "/", name).map_err(|e| HandlerError::storage(name, e))?;
    tokio::fs::write(&path, &contents)
        .await
        .map_err(|e| HandlerError::storage(&path, e))?;

    info!(path = %path.display(), bytes = received, "Stored upload");

    Ok(Response::text(StatusCode::Created, contents))
}
