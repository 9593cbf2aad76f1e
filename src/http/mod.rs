//! HTTP/1.1 wire handling.
//!
//! # Architecture
//!
//! - **`connection`**: drives one connection through read, process, write, close
//! - **`parser`**: reads the request line and header block from a buffered stream
//! - **`request`**: request head representation and header lookups
//! - **`response`**: response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client
//! - **`encoding`**: `Accept-Encoding` negotiation and gzip compression
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Request line and headers, body left unread
//!        └──────┬──────┘
//!               │ Request parsed (or 400 on parse failure ─┐)
//!               ▼                                          │
//!        ┌──────────────────┐                              │
//!        │   Processing     │ ← Route, run one handler     │
//!        └──────┬───────────┘                              │
//!               │ Response ready                           │
//!               ▼                                          │
//!        ┌──────────────────┐                              │
//!        │    Writing       │ ◄────────────────────────────┘
//!        └──────┬───────────┘
//!               │ Response sent, write side shut down
//!               ▼
//!            Closed
//! ```
//!
//! There is no keep-alive: every connection carries exactly one request.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use courier::config::Config;
//! use courier::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Arc::new(Config::with_directory("/tmp/"));
//!     let listener = TcpListener::bind("127.0.0.1:4221").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let cfg = Arc::clone(&cfg);
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, cfg);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod encoding;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
