use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::handlers;
use crate::http::parser::read_request;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

/// One accepted connection, served exactly once and then closed.
pub struct Connection<S> {
    reader: BufReader<S>,
    config: Arc<Config>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: Arc<Config>) -> Self {
        Self {
            reader: BufReader::new(stream),
            config,
            state: ConnectionState::Reading,
        }
    }

    /// Reads one request, answers it, and shuts the write side down.
    ///
    /// Only failures to write the response come back as errors; anything
    /// wrong with the request itself is answered with a status code.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match read_request(&mut self.reader).await {
                        Ok(request) => {
                            info!(
                                method = request.method.as_str(),
                                path = %request.path,
                                "Incoming request"
                            );
                            ConnectionState::Processing(request)
                        }
                        Err(e) => {
                            warn!("Error reading request: {}", e);
                            ConnectionState::Writing(ResponseWriter::new(&e.into_response()))
                        }
                    };
                }

                ConnectionState::Processing(request) => {
                    let response =
                        handlers::handle(&request, &mut self.reader, &self.config).await;
                    debug!(status = response.status.as_u16(), "Response ready");
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(mut writer) => {
                    let stream = self.reader.get_mut();
                    writer.write_to_stream(stream).await?;
                    if let Err(e) = stream.shutdown().await {
                        debug!("Error shutting down connection: {}", e);
                    }
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }
}
