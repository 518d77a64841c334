//! HTTP request health probing

use async_trait::async_trait;
use hyper::header::USER_AGENT;
use hyper::{Body, Client, Method, Request, Uri};
use std::time::Instant;
use tokio::time::timeout;
use tracing::debug;

use super::error::ProbeError;
use super::types::{elapsed_ms, Probe};
use schema::{CheckResult, HttpCheck, Status};

/// User-Agent sent with every probe request, so probed services can
/// distinguish dashboard traffic in their access logs.
const PROBE_USER_AGENT: &str = concat!("vantage/", env!("CARGO_PKG_VERSION"));

/// HTTP health probe that issues a GET and classifies the response code.
///
/// Codes in `[200, 400)` are UP, anything else the server answers with is
/// WARN (it responded, but unhealthily), and transport failures or timeouts
/// are DOWN. Latency is measured from dispatch to response headers; the body
/// is never read, since the status code alone decides the outcome.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    check: HttpCheck,
}

impl HttpProbe {
    /// Create a probe from an HTTP check definition
    pub fn new(check: HttpCheck) -> Self {
        Self { check }
    }

    async fn request(&self, url: &str) -> Result<u16, ProbeError> {
        let uri: Uri = url.parse()?;
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(USER_AGENT, PROBE_USER_AGENT)
            .body(Body::empty())?;

        let client = Client::new();
        let response = timeout(self.check.timeout(), client.request(req))
            .await
            .map_err(|_| ProbeError::Timeout(self.check.timeout()))??;

        Ok(response.status().as_u16())
    }

    fn result(&self, target: &str, status: Status, latency_ms: Option<u64>, message: String) -> CheckResult {
        CheckResult {
            name: self.check.name.clone(),
            kind: "http".to_string(),
            target: target.to_string(),
            status,
            latency_ms,
            message,
        }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn run(&self) -> CheckResult {
        let Some(url) = self.check.url.clone() else {
            return self.result("-", Status::Down, None, "Missing 'url' in config".to_string());
        };

        debug!("HTTP probe requesting {}", url);
        let start = Instant::now();

        match self.request(&url).await {
            Ok(code) => {
                let latency = elapsed_ms(start);
                let status = if (200..400).contains(&code) {
                    Status::Up
                } else {
                    Status::Warn
                };
                debug!("HTTP probe to {} returned {} in {}ms", url, code, latency);
                self.result(&url, status, Some(latency), format!("HTTP {}", code))
            }
            Err(e) if e.is_pre_dispatch() => {
                // No request ever left the process
                self.result(&url, Status::Down, None, e.to_string())
            }
            Err(e) => {
                debug!("HTTP probe to {} failed: {}", url, e);
                self.result(&url, Status::Down, Some(elapsed_ms(start)), e.to_string())
            }
        }
    }
}
