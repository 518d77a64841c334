//! The probe trait shared by all check kinds

use async_trait::async_trait;
use schema::CheckResult;
use std::time::Instant;

/// A single executable check against one target.
///
/// Implementations are infallible at this boundary: every invocation
/// produces exactly one [`CheckResult`], with all failures folded into the
/// result's status and message. Probes read only their own immutable
/// definition, so they are safe to run concurrently without locking.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Execute the check once and report the outcome
    async fn run(&self) -> CheckResult;
}

/// Milliseconds elapsed since `start`, saturating at u64
pub(crate) fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
