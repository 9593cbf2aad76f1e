//! `Accept-Encoding` negotiation for echo responses.
//!
//! Only the `gzip` token is recognised. A client that sends the header
//! without it gets [`Negotiation::Unsatisfied`], which the echo handler
//! answers with headers and no body.

use std::io::{self, Write};

use flate2::Compression;
use flate2::write::GzEncoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Negotiation {
    /// No `Accept-Encoding` header: send the body as is.
    Identity,
    /// `gzip` was offered.
    Gzip,
    /// The header was sent but did not offer `gzip`.
    Unsatisfied,
}

/// Picks a coding from the raw `Accept-Encoding` value.
pub fn negotiate(accept_encoding: Option<&str>) -> Negotiation {
    match accept_encoding {
        None => Negotiation::Identity,
        Some(value) if accepts_gzip(value) => Negotiation::Gzip,
        Some(_) => Negotiation::Unsatisfied,
    }
}

/// True when `gzip` is one of the comma-separated tokens.
///
/// Tokens are compared exactly after trimming, so `x-gzip` or
/// `gzip;q=1.0` do not count.
pub fn accepts_gzip(accept_encoding: &str) -> bool {
    accept_encoding.split(',').any(|token| token.trim() == "gzip")
}

/// Compresses `body` into a complete gzip member.
pub fn gzip(body: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(body)?;
    encoder.finish()
}
