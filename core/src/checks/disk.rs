//! Local disk usage probing
//!
//! Disk checks degrade gracefully: an unreadable path or a low free
//! percentage yields WARN, never DOWN. A path the daemon cannot stat is not
//! necessarily a system outage.

use async_trait::async_trait;
use std::io;
use tracing::debug;

use super::types::Probe;
use schema::{CheckResult, DiskCheck, Status};

/// Free/total byte counts for one filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    /// Total size of the filesystem in bytes
    pub total: u64,
    /// Bytes available to unprivileged users
    pub free: u64,
}

impl DiskUsage {
    /// Free space as a percentage of total, 0.0 when total is zero
    #[must_use]
    pub fn free_pct(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.free as f64 / self.total as f64) * 100.0
        }
    }
}

/// Stat the filesystem holding `path`
#[cfg(unix)]
pub fn read_usage(path: &str) -> io::Result<DiskUsage> {
    let stat = nix::sys::statvfs::statvfs(std::path::Path::new(path))
        .map_err(|errno| io::Error::from_raw_os_error(errno as i32))?;

    let block = stat.fragment_size() as u64;
    Ok(DiskUsage {
        total: (stat.blocks() as u64).saturating_mul(block),
        free: (stat.blocks_available() as u64).saturating_mul(block),
    })
}

#[cfg(not(unix))]
pub fn read_usage(_path: &str) -> io::Result<DiskUsage> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "disk usage is only supported on unix",
    ))
}

/// Disk free-space probe
#[derive(Debug, Clone)]
pub struct DiskProbe {
    check: DiskCheck,
}

impl DiskProbe {
    /// Create a probe from a disk check definition
    pub fn new(check: DiskCheck) -> Self {
        Self { check }
    }
}

/// Classify a usage reading against a check's threshold.
///
/// Split out from the probe so the zero-total and threshold edge cases are
/// testable without touching a real filesystem.
pub fn evaluate(check: &DiskCheck, usage: DiskUsage) -> CheckResult {
    let free_pct = usage.free_pct();
    let (status, message) = if free_pct >= check.warn_pct_free_below {
        (Status::Up, format!("{:.1}% free", free_pct))
    } else {
        (
            Status::Warn,
            format!(
                "Low disk: {:.1}% free (< {:.1}%)",
                free_pct, check.warn_pct_free_below
            ),
        )
    };

    CheckResult {
        name: check.display_name(),
        kind: "disk".to_string(),
        target: check.path.clone(),
        status,
        latency_ms: None,
        message,
    }
}

#[async_trait]
impl Probe for DiskProbe {
    async fn run(&self) -> CheckResult {
        debug!("Disk probe reading {}", self.check.path);

        match read_usage(&self.check.path) {
            Ok(usage) => evaluate(&self.check, usage),
            Err(e) => CheckResult {
                name: self.check.display_name(),
                kind: "disk".to_string(),
                target: self.check.path.clone(),
                status: Status::Warn,
                latency_ms: None,
                message: format!("stat failed: {}", e),
            },
        }
    }
}
