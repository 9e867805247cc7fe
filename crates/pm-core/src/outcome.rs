use std::time::Duration;

use chrono::{DateTime, Local};

/// The recorded result of a single probe: a 1-based sequence number, the
/// wall-clock time the probe was issued, and the measured round-trip
/// latency if the probe succeeded.
///
/// Outcomes are created once per tick and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    /// Monotonic, 1-based position of this probe within the run.
    pub seq: u64,
    /// When the probe was issued.
    pub at: DateTime<Local>,
    /// Round-trip latency. `None` means the target was unreachable or the
    /// measurement could not be read.
    pub latency: Option<Duration>,
}

impl ProbeOutcome {
    /// A successful probe with a measured latency.
    pub fn success(seq: u64, at: DateTime<Local>, latency: Duration) -> Self {
        Self {
            seq,
            at,
            latency: Some(latency),
        }
    }

    /// A probe that did not produce a measurement.
    pub fn failure(seq: u64, at: DateTime<Local>) -> Self {
        Self {
            seq,
            at,
            latency: None,
        }
    }

    /// Whether the probe produced a measurement.
    pub fn is_success(&self) -> bool {
        self.latency.is_some()
    }

    /// The measured latency in fractional milliseconds.
    pub fn latency_ms(&self) -> Option<f64> {
        self.latency.map(|latency| latency.as_secs_f64() * 1_000.0)
    }
}
