//! Probe implementations for every check kind
//!
//! This module provides the probing primitives the dispatcher fans out over:
//! HTTP GET, raw TCP connect, and local disk usage. Each probe consumes one
//! immutable check definition and produces exactly one normalized
//! [`CheckResult`], folding every failure mode into the result rather than
//! returning an error.
//!
//! ## Types
//!
//! - [`Probe`]: the trait all probe kinds implement
//! - [`HttpProbe`], [`TcpProbe`], [`DiskProbe`]: one probe per kind
//! - [`ProbeError`]: internal failure taxonomy rendered into result messages

pub mod disk;
pub mod error;
pub mod http;
pub mod tcp;
pub mod types;

pub use disk::{DiskProbe, DiskUsage};
pub use error::ProbeError;
pub use http::HttpProbe;
pub use tcp::{TcpProbe, TCP_CONNECT_TIMEOUT};
pub use types::Probe;

use async_trait::async_trait;
use schema::{CheckDefinition, CheckResult, Status, UnknownCheck};

/// Create a probe for a check definition.
///
/// Every definition gets a probe, including unrecognized kinds: those
/// resolve immediately to WARN so the check still occupies its slot in the
/// output instead of being silently dropped.
pub fn create_probe(definition: &CheckDefinition) -> Box<dyn Probe> {
    match definition {
        CheckDefinition::Http(check) => Box::new(HttpProbe::new(check.clone())),
        CheckDefinition::Tcp(check) => Box::new(TcpProbe::new(check.clone(), TCP_CONNECT_TIMEOUT)),
        CheckDefinition::Disk(check) => Box::new(DiskProbe::new(check.clone())),
        CheckDefinition::Unknown(check) => Box::new(UnknownProbe::new(check.clone())),
    }
}

/// Probe for configured kinds the dispatcher does not recognize
#[derive(Debug, Clone)]
struct UnknownProbe {
    check: UnknownCheck,
}

impl UnknownProbe {
    fn new(check: UnknownCheck) -> Self {
        Self { check }
    }
}

#[async_trait]
impl Probe for UnknownProbe {
    async fn run(&self) -> CheckResult {
        let label = if self.check.kind.is_empty() {
            "unknown".to_string()
        } else {
            self.check.kind.clone()
        };
        CheckResult {
            name: self.check.name.clone(),
            kind: label,
            target: self.check.target.clone(),
            status: Status::Warn,
            latency_ms: None,
            message: format!("Unknown check type: '{}'", self.check.kind),
        }
    }
}
