//! Courier - a minimal HTTP/1.1 server over raw TCP
//!
//! Requests are parsed by hand from the socket, routed over a fixed table
//! and answered with byte-exact HTTP/1.1 responses, one request per
//! connection.

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
