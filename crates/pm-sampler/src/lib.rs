//! The tick-driven sampling loop.
//!
//! [`Sampler::run`] issues one probe per tick boundary through a
//! [`LatencySource`] and collects the outcomes. Two things can end a run:
//! exhausting the configured tick budget, or a [`CancellationToken`] set by
//! whoever owns the run (typically a signal watcher). The race between the
//! two is resolved at each boundary with cancellation winning ties.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use pm_core::{LatencySource, ProbeOutcome, DEFAULT_PROBE_TIMEOUT};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// The smallest tick interval the sampler accepts.
pub const MIN_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// Host to probe.
    pub target: String,
    /// Tick budget. 0 runs until cancelled.
    pub count: u64,
    /// Wall-clock cadence between probes.
    pub interval: Duration,
    /// Upper bound on a single probe, independent of `interval`.
    pub probe_timeout: Duration,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            target: "google.com".to_string(),
            count: 10,
            interval: Duration::from_secs(1),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

impl SamplerConfig {
    /// Reject configurations the loop must never be entered with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.target.is_empty() {
            anyhow::bail!("probe target must not be empty");
        }

        if self.interval < MIN_INTERVAL {
            anyhow::bail!(
                "probe interval must be at least {}s",
                MIN_INTERVAL.as_secs()
            );
        }

        Ok(())
    }
}

pub struct Sampler {
    config: SamplerConfig,
    outcomes: Vec<ProbeOutcome>,
}

impl Sampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self {
            config,
            outcomes: Vec::new(),
        }
    }

    /// Drive the loop to completion and return the outcome sequence.
    ///
    /// The caller has already validated the config. Probe failures are
    /// recorded as failed outcomes and never end the run. The loop itself
    /// performs no console or file I/O.
    pub async fn run(
        mut self,
        source: Arc<dyn LatencySource>,
        shutdown: CancellationToken,
    ) -> Vec<ProbeOutcome> {
        let mut ticker = tokio::time::interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut seq = 0;

        loop {
            if self.config.count > 0 && seq == self.config.count {
                break;
            }

            tokio::select! {
                biased;

                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    seq += 1;
                    let at = Local::now();

                    let latency = source
                        .probe(&self.config.target, self.config.probe_timeout)
                        .await;

                    debug!(seq, target = %self.config.target, ?latency, "probe complete");

                    self.outcomes.push(match latency {
                        Some(latency) => ProbeOutcome::success(seq, at, latency),
                        None => ProbeOutcome::failure(seq, at),
                    });
                }
            }
        }

        self.outcomes
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use pm_core::LatencySource;
    use tokio_util::sync::CancellationToken;

    use crate::{Sampler, SamplerConfig};

    /// Always answers with the same measurement (or lack of one).
    struct StaticSource(Option<Duration>);

    #[async_trait]
    impl LatencySource for StaticSource {
        async fn probe(&self, _target: &str, _timeout: Duration) -> Option<Duration> {
            self.0
        }
    }

    fn config(count: u64) -> SamplerConfig {
        SamplerConfig {
            count,
            ..SamplerConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn bounded_run_produces_exactly_count_outcomes() {
        let source = Arc::new(StaticSource(Some(Duration::from_millis(12))));

        let outcomes = Sampler::new(config(5))
            .run(source, CancellationToken::new())
            .await;

        assert_eq!(outcomes.len(), 5);

        for (index, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.seq, index as u64 + 1);
            assert!(outcome.is_success());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn probe_failures_do_not_stop_the_loop() {
        let source = Arc::new(StaticSource(None));

        let outcomes = Sampler::new(config(3))
            .run(source, CancellationToken::new())
            .await;

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|outcome| !outcome.is_success()));
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_before_the_first_tick_yields_nothing() {
        let source = Arc::new(StaticSource(Some(Duration::from_millis(1))));
        let shutdown = CancellationToken::new();
        shutdown.cancel();

        let outcomes = Sampler::new(config(0)).run(source, shutdown).await;

        assert!(outcomes.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn unbounded_run_stops_at_the_boundary_after_cancellation() {
        let source = Arc::new(StaticSource(Some(Duration::from_millis(1))));
        let shutdown = CancellationToken::new();

        let handle = tokio::spawn(Sampler::new(config(0)).run(source, shutdown.clone()));

        // Ticks fire at 0s, 1s, 2s and 3s.
        tokio::time::sleep(Duration::from_millis(3_500)).await;
        shutdown.cancel();

        let outcomes = handle.await.unwrap();

        // The cancellation races the in-flight boundary; either side may win.
        assert!(outcomes.len() == 4 || outcomes.len() == 5);

        for (index, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.seq, index as u64 + 1);
        }
    }

    #[test]
    fn sub_second_interval_is_rejected() {
        let config = SamplerConfig {
            interval: Duration::from_millis(250),
            ..SamplerConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_target_is_rejected() {
        let config = SamplerConfig {
            target: String::new(),
            ..SamplerConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
