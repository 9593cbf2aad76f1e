//! Response writers for each route family.
//!
//! [`handle`] resolves the route and runs exactly one handler. Handler
//! failures come back as [`HandlerError`], which is logged here and then
//! turned into its status response.

pub mod echo;
pub mod files;
pub mod text;

use tokio::io::AsyncRead;
use tracing::{error, warn};

use crate::config::Config;
use crate::error::HandlerError;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::router::Route;

/// Produces the response for `request`.
///
/// `body` is the connection's reader, positioned right after the header
/// block. Only the upload handler reads from it.
pub async fn handle<R>(request: &Request, body: &mut R, config: &Config) -> Response
where
    R: AsyncRead + Unpin,
{
    match dispatch(request, body, config).await {
        Ok(response) => response,
        Err(e) => {
            let status = e.status();
            if status.is_server_error() {
                error!(
                    method = request.method.as_str(),
                    path = %request.path,
                    status = status.as_u16(),
                    "Request failed: {}", e
                );
            } else {
                warn!(
                    method = request.method.as_str(),
                    path = %request.path,
                    status = status.as_u16(),
                    "Request rejected: {}", e
                );
            }
            e.into_response()
        }
    }
}

async fn dispatch<R>(
    request: &Request,
    body: &mut R,
    config: &Config,
) -> Result<Response, HandlerError>
where
    R: AsyncRead + Unpin,
{
    let directory = config.directory.as_deref();

    match Route::resolve(&request.method, &request.path) {
        Route::Greeting => Ok(text::greeting()),
        Route::UserAgent => Ok(text::user_agent(request)),
        Route::Echo(text) => echo::echo(request, text),
        Route::ServeFile(name) => files::serve(directory, name).await,
        Route::UploadFile(name) => files::upload(request, body, directory, name).await,
        Route::Unmatched => Err(HandlerError::UnmatchedRoute(request.path.clone())),
        Route::MethodNotAllowed => Err(HandlerError::UnsupportedMethod(
            request.method.as_str().to_string(),
        )),
    }
}
