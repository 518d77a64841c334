//! Typed check definitions consumed by the dispatcher
//!
//! A [`CheckDefinition`] is the declarative, immutable description of one
//! probe target. Definitions are derived from configuration once at startup
//! and shared read-only across concurrent probe invocations; they carry no
//! mutable state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP GET check against a URL
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HttpCheck {
    /// Unique check name
    pub name: String,
    /// URL to request; `None` is a configuration error surfaced as a DOWN
    /// result by the probe, not rejected at load time
    pub url: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_http_timeout_s")]
    pub timeout_s: f64,
}

impl HttpCheck {
    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_s)
    }
}

fn default_http_timeout_s() -> f64 {
    2.0
}

/// Raw TCP connect check against `host:port`.
///
/// The same mechanism backs `mysql`, `redis`, and bare `tcp` checks; the
/// `kind` label is echoed into the result's display type.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TcpCheck {
    /// Unique check name
    pub name: String,
    /// Host to connect to; `None` yields a DOWN result without any
    /// connection attempt
    pub host: Option<String>,
    /// Port to connect to
    pub port: u16,
    /// Display label: "tcp", "mysql", "redis", ...
    pub kind: String,
}

impl TcpCheck {
    /// Target address as a display string
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host.as_deref().unwrap_or("-"), self.port)
    }
}

/// Local disk free-space check
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DiskCheck {
    /// Filesystem path to stat
    pub path: String,
    /// Warn when the free percentage drops below this threshold
    #[serde(default = "default_warn_pct")]
    pub warn_pct_free_below: f64,
}

impl DiskCheck {
    /// Display name for this check (`disk:<path>`)
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("disk:{}", self.path)
    }
}

fn default_warn_pct() -> f64 {
    10.0
}

/// A check whose configured type is not recognized.
///
/// Unknown kinds still occupy their slot in the output; the dispatcher
/// resolves them to WARN rather than dropping them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct UnknownCheck {
    /// Unique check name
    pub name: String,
    /// The unrecognized kind string as configured (may be empty)
    pub kind: String,
    /// Best-effort target taken from whatever address fields were present
    pub target: String,
}

/// One declarative probe target, tagged by kind
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "check", rename_all = "lowercase")]
pub enum CheckDefinition {
    /// HTTP GET probe
    Http(HttpCheck),
    /// Raw TCP connect probe (also mysql/redis)
    Tcp(TcpCheck),
    /// Local disk usage probe
    Disk(DiskCheck),
    /// Unrecognized configured kind
    Unknown(UnknownCheck),
}

impl CheckDefinition {
    /// Check name as shown in results
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            CheckDefinition::Http(c) => c.name.clone(),
            CheckDefinition::Tcp(c) => c.name.clone(),
            CheckDefinition::Disk(c) => c.display_name(),
            CheckDefinition::Unknown(c) => c.name.clone(),
        }
    }

    /// Display kind echoed into the result's `type` field
    #[must_use]
    pub fn kind_label(&self) -> String {
        match self {
            CheckDefinition::Http(_) => "http".to_string(),
            CheckDefinition::Tcp(c) => c.kind.clone(),
            CheckDefinition::Disk(_) => "disk".to_string(),
            CheckDefinition::Unknown(c) => {
                if c.kind.is_empty() {
                    "unknown".to_string()
                } else {
                    c.kind.clone()
                }
            }
        }
    }

    /// Human-readable target address
    #[must_use]
    pub fn target(&self) -> String {
        match self {
            CheckDefinition::Http(c) => c.url.clone().unwrap_or_else(|| "-".to_string()),
            CheckDefinition::Tcp(c) => c.address(),
            CheckDefinition::Disk(c) => c.path.clone(),
            CheckDefinition::Unknown(c) => c.target.clone(),
        }
    }
}
