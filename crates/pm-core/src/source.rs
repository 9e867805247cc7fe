use std::time::Duration;

use async_trait::async_trait;

/// Upper bound on how long a single probe may block, independent of the
/// configured tick interval. One slow or unreachable target must never
/// stall the sampling loop indefinitely.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// A capability that measures round-trip latency to a target, one probe per
/// call.
///
/// An unreachable target or an unreadable measurement is a normal outcome,
/// not an error: implementations return `None` rather than failing.
#[async_trait]
pub trait LatencySource: Send + Sync {
    /// Perform exactly one probe against `target`, giving up after
    /// `timeout`.
    async fn probe(&self, target: &str, timeout: Duration) -> Option<Duration>;
}
