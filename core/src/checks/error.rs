//! Internal failure taxonomy for probe execution
//!
//! These never escape a probe: each variant is rendered into the `message`
//! field of a `CheckResult` at the probe boundary.

use std::time::Duration;
use thiserror::Error;

/// Ways a single probe attempt can fail
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The probe's own deadline elapsed
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// TCP connection failed
    #[error("connect failed: {0}")]
    Tcp(#[from] std::io::Error),

    /// HTTP request failed at the transport level
    #[error("request failed: {0}")]
    Http(#[from] hyper::Error),

    /// Configured URL does not parse
    #[error("invalid url: {0}")]
    InvalidUri(#[from] hyper::http::uri::InvalidUri),

    /// Request could not be constructed
    #[error("bad request: {0}")]
    Request(#[from] hyper::http::Error),
}

impl ProbeError {
    /// Whether this failure happened before any I/O was attempted.
    ///
    /// Pre-I/O failures report a null latency.
    pub fn is_pre_dispatch(&self) -> bool {
        matches!(self, ProbeError::InvalidUri(_) | ProbeError::Request(_))
    }
}
