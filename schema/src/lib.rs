//! Schema definitions for Vantage
//!
//! This crate contains the shared data structures used across the Vantage
//! health dashboard: the normalized check result model, the aggregate report
//! served to consumers, and the typed check definitions consumed by the
//! dispatcher. All types here implement JSON Schema generation for external
//! consumption.
//!
//! The JSON field names on [`CheckResult`] and [`AggregateReport`] are a
//! compatibility contract with consuming dashboards and must not change.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod check;


pub use check::{CheckDefinition, DiskCheck, HttpCheck, TcpCheck, UnknownCheck};

/// Health status of a single check, or of the system as a whole.
///
/// Precedence, highest wins: `Down` > `Warn` > `Up`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Target answered and looks healthy
    Up,
    /// Target answered but reported an unhealthy signal
    Warn,
    /// Target is unreachable or timed out
    Down,
}

impl Status {
    /// Numeric severity used for precedence comparison (higher is worse)
    #[must_use]
    pub fn severity(self) -> u8 {
        match self {
            Status::Up => 0,
            Status::Warn => 1,
            Status::Down => 2,
        }
    }

    /// Combine two statuses, keeping the more severe one
    #[must_use]
    pub fn elevate(self, other: Status) -> Status {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }
}

/// Normalized outcome of one probe execution.
///
/// Every probe invocation produces exactly one of these, regardless of kind
/// and regardless of how the probe failed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CheckResult {
    /// Check name, echoed from the definition
    pub name: String,
    /// Display kind: "http", "tcp", "mysql", "redis", "disk", or the raw
    /// unrecognized kind string
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable address: URL, `host:port`, or filesystem path
    pub target: String,
    /// Probe outcome
    pub status: Status,
    /// Wall-clock latency in milliseconds; `None` when the check could not
    /// start (e.g. a missing required field)
    pub latency_ms: Option<u64>,
    /// Free-text detail: status code, error text, or disk percentage
    pub message: String,
}

/// Disk slice of the aggregate report
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SystemReport {
    /// Results of the configured disk checks, in configuration order
    pub disk: Vec<CheckResult>,
}

/// Full aggregation output for one polling cycle.
///
/// Created fresh on every invocation and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AggregateReport {
    /// Precedence reduction over all service and disk results
    pub overall_status: Status,
    /// RFC 3339 UTC timestamp of when this report was generated
    pub generated_at: String,
    /// Service check results, in configuration order
    pub services: Vec<CheckResult>,
    /// System-level results (currently disk only)
    pub system: SystemReport,
}
