//! TCP connection health probing

use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use super::error::ProbeError;
use super::types::{elapsed_ms, Probe};
use schema::{CheckResult, Status, TcpCheck};

/// Fixed connect deadline for all tcp-family checks
pub const TCP_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// TCP health probe that tests connection establishment.
///
/// The connection is dropped immediately after establishment, on every exit
/// path, so no socket outlives the probe. The same probe backs `mysql`,
/// `redis`, and bare `tcp` checks; only the display label differs.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    check: TcpCheck,
    timeout: Duration,
}

impl TcpProbe {
    /// Create a probe from a TCP check definition
    pub fn new(check: TcpCheck, timeout: Duration) -> Self {
        Self { check, timeout }
    }

    fn result(&self, status: Status, latency_ms: Option<u64>, message: String) -> CheckResult {
        CheckResult {
            name: self.check.name.clone(),
            kind: self.check.kind.clone(),
            target: self.check.address(),
            status,
            latency_ms,
            message,
        }
    }
}

#[async_trait]
impl Probe for TcpProbe {
    async fn run(&self) -> CheckResult {
        let Some(host) = self.check.host.as_deref() else {
            return self.result(Status::Down, None, "Missing 'host' in config".to_string());
        };

        let address = format!("{}:{}", host, self.check.port);
        debug!("TCP probe connecting to {}", address);
        let start = Instant::now();

        match timeout(self.timeout, TcpStream::connect(&address)).await {
            Ok(Ok(_stream)) => {
                // Stream is dropped here, closing the connection
                let latency = elapsed_ms(start);
                debug!("TCP probe to {} succeeded in {}ms", address, latency);
                self.result(Status::Up, Some(latency), "TCP connect ok".to_string())
            }
            Ok(Err(io_error)) => {
                debug!("TCP probe to {} failed: {}", address, io_error);
                let message = ProbeError::Tcp(io_error).to_string();
                self.result(Status::Down, Some(elapsed_ms(start)), message)
            }
            Err(_) => {
                debug!("TCP probe to {} timed out after {:?}", address, self.timeout);
                let message = ProbeError::Timeout(self.timeout).to_string();
                self.result(Status::Down, Some(elapsed_ms(start)), message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;
    use tokio::task;

    fn check(host: Option<&str>, port: u16, kind: &str) -> TcpCheck {
        TcpCheck {
            name: "db".to_string(),
            host: host.map(str::to_string),
            port,
            kind: kind.to_string(),
        }
    }

    #[tokio::test]
    async fn test_tcp_probe_success() {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get local address");

        let _handle = task::spawn(async move {
            while let Ok((_stream, _addr)) = listener.accept().await {
                // Accept and drop
            }
        });

        let result = TcpProbe::new(
            check(Some("127.0.0.1"), addr.port(), "mysql"),
            Duration::from_secs(1),
        )
        .run()
        .await;

        assert_eq!(result.status, Status::Up);
        assert_eq!(result.kind, "mysql");
        assert_eq!(result.message, "TCP connect ok");
        assert!(result.latency_ms.is_some());
    }

    #[tokio::test]
    async fn test_tcp_probe_connection_refused() {
        let result = TcpProbe::new(check(Some("127.0.0.1"), 1, "tcp"), Duration::from_secs(1))
            .run()
            .await;

        assert_eq!(result.status, Status::Down);
        assert!(result.message.contains("connect failed"));
    }

    #[tokio::test]
    async fn test_tcp_probe_timeout() {
        // Non-routable address to force a timeout
        let result = TcpProbe::new(
            check(Some("10.255.255.1"), 80, "tcp"),
            Duration::from_millis(100),
        )
        .run()
        .await;

        assert_eq!(result.status, Status::Down);
        assert!(result.message.contains("timed out"));
    }

    #[tokio::test]
    async fn test_tcp_probe_missing_host_skips_connect() {
        let start = Instant::now();
        let result = TcpProbe::new(check(None, 3306, "mysql"), Duration::from_secs(2))
            .run()
            .await;

        assert_eq!(result.status, Status::Down);
        assert_eq!(result.latency_ms, None);
        assert_eq!(result.message, "Missing 'host' in config");
        // No connection attempt: returns well inside the connect timeout
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
