//! Precedence reduction of check results into one overall status

use chrono::Utc;
use schema::{AggregateReport, CheckResult, Status, SystemReport};

/// Reduce a sequence of results to a single overall status.
///
/// Precedence, highest wins: DOWN > WARN > UP. A single pass suffices: the
/// first DOWN is final (nothing later can downgrade it), and a WARN only
/// elevates an overall that is still UP. An empty input reduces to UP.
pub fn overall_status<'a, I>(results: I) -> Status
where
    I: IntoIterator<Item = &'a CheckResult>,
{
    let mut overall = Status::Up;
    for result in results {
        if result.status == Status::Down {
            return Status::Down;
        }
        overall = overall.elevate(result.status);
    }
    overall
}

/// Assemble a fresh aggregate report from service and disk results.
///
/// The overall status is reduced over both slices; `generated_at` is the
/// assembly time in RFC 3339 UTC.
pub fn aggregate(services: Vec<CheckResult>, disk: Vec<CheckResult>) -> AggregateReport {
    let overall = overall_status(services.iter().chain(disk.iter()));
    AggregateReport {
        overall_status: overall,
        generated_at: Utc::now().to_rfc3339(),
        services,
        system: SystemReport { disk },
    }
}
