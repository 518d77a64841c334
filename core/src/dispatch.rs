//! Concurrent fan-out of probes under a total wall-clock budget
//!
//! [`run_all`] is the engine's public contract: it launches one probe per
//! definition, all concurrently, and returns one result per definition in
//! the same order as the input. Two timeout scopes apply: each probe bounds
//! its own I/O wait internally, and a coarser total budget bounds the whole
//! batch. When the total budget elapses, still-pending probes are resolved
//! to DOWN results individually rather than failing the batch, so partial
//! results are never lost.

use futures::future::join_all;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

use crate::checks;
use crate::config::Settings;
use crate::reduce;
use schema::{AggregateReport, CheckDefinition, CheckResult, Status};

/// Default upper bound on one full aggregation cycle
pub const DEFAULT_TOTAL_TIMEOUT: Duration = Duration::from_secs(10);

/// Run every check concurrently and collect results in input order.
///
/// Each check is attempted exactly once; retries are the caller's concern
/// (in practice, the next polling cycle). No failure inside a probe
/// propagates out of this function.
pub async fn run_all(
    definitions: &[CheckDefinition],
    total_timeout: Duration,
) -> Vec<CheckResult> {
    debug!(
        "dispatching {} checks (total budget {:?})",
        definitions.len(),
        total_timeout
    );

    let probes = definitions.iter().map(|def| {
        let probe = checks::create_probe(def);
        let stalled = stalled_result(def, total_timeout);
        async move {
            match timeout(total_timeout, probe.run()).await {
                Ok(result) => result,
                Err(_) => stalled,
            }
        }
    });

    // join_all preserves the order of its input futures regardless of
    // completion order; downstream presentation relies on this positional
    // stability across refreshes.
    join_all(probes).await
}

/// Run one full aggregation cycle over a settings value: all service checks
/// plus all disk checks, reduced to an [`AggregateReport`].
pub async fn run_report(settings: &Settings, total_timeout: Duration) -> AggregateReport {
    let mut definitions = settings.service_definitions();
    let service_count = definitions.len();
    definitions.extend(settings.disk_definitions());

    let mut results = run_all(&definitions, total_timeout).await;
    let disk = results.split_off(service_count);
    reduce::aggregate(results, disk)
}

/// Result substituted for a probe that did not finish inside the batch budget
fn stalled_result(definition: &CheckDefinition, total_timeout: Duration) -> CheckResult {
    CheckResult {
        name: definition.name(),
        kind: definition.kind_label(),
        target: definition.target(),
        status: Status::Down,
        latency_ms: Some(u64::try_from(total_timeout.as_millis()).unwrap_or(u64::MAX)),
        message: format!("timed out: exceeded total budget of {:?}", total_timeout),
    }
}
