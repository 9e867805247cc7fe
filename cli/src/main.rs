mod args;
mod report;
mod util;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use pm_core::{LatencySource, DEFAULT_PROBE_TIMEOUT};
use pm_ping::SystemPing;
use pm_sampler::{Sampler, SamplerConfig};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(util::tracing_level(cli.verbosity.log_level_filter()))
        .with_writer(std::io::stderr)
        .init();

    let config = SamplerConfig {
        target: cli.target.clone(),
        count: cli.count,
        interval: Duration::from_secs(cli.interval),
        probe_timeout: DEFAULT_PROBE_TIMEOUT,
    };
    config.validate()?;

    let shutdown = CancellationToken::new();
    tokio::spawn(watch_for_interrupt(shutdown.clone()));

    info!(
        target = %config.target,
        count = config.count,
        interval_secs = config.interval.as_secs(),
        "starting run"
    );

    let source = Arc::new(SystemPing) as Arc<dyn LatencySource>;
    let outcomes = Sampler::new(config).run(source, shutdown).await;

    report::report(&cli, &outcomes)?;

    Ok(())
}

/// Turn SIGINT/SIGTERM into a cancellation so the loop can finish the
/// current boundary and report what it has.
async fn watch_for_interrupt(shutdown: CancellationToken) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = match signal(SignalKind::terminate()) {
            Ok(terminate) => terminate,
            Err(error) => {
                tracing::warn!(%error, "unable to install the SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
                info!("interrupt received; finishing the run");
                shutdown.cancel();
                return;
            }
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    info!("interrupt received; finishing the run");
    shutdown.cancel();
}
