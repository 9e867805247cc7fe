// Copyright (c) 2023-2024 Cloudflare, Inc.
// Licensed under the BSD-3-Clause license found in the LICENSE file or at https://opensource.org/licenses/BSD-3-Clause

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use chrono::Local;
use pm_core::ProbeOutcome;
use pm_stats::summarize;
use tracing::warn;

use crate::args::Cli;
use crate::util::pretty_ms;

const PLOT_WIDTH: usize = 60;
const PLOT_HEIGHT: usize = 10;

/// Present a finished run on the console and persist the run log.
///
/// A log that cannot be written is a warning, never a failed run.
pub fn report(cli: &Cli, outcomes: &[ProbeOutcome]) -> anyhow::Result<()> {
    for outcome in outcomes {
        match outcome.latency_ms() {
            Some(ms) if ms > cli.threshold => {
                println!("Ping {}: {:.2} ms  [HIGH LATENCY]", outcome.seq, ms);
            }
            Some(ms) => println!("Ping {}: {:.2} ms", outcome.seq, ms),
            None => println!("Ping {}: timed out or unreachable", outcome.seq),
        }
    }

    let summary = summarize(outcomes);

    if cli.json {
        let json = serde_json::json!({
            "target": cli.target,
            "summary": {
                "total": summary.total,
                "successful": summary.successful,
                "loss_pct": pretty_ms(summary.loss_percent()),
                "min_ms": pretty_ms(summary.min_ms),
                "max_ms": pretty_ms(summary.max_ms),
                "mean_ms": pretty_ms(summary.mean_ms),
            },
        });

        println!("{:#}", json);
    } else {
        println!();
        println!("--- {} ping statistics ---", cli.target);
        println!(
            "{} probes sent, {} successful, {:.1}% loss",
            summary.total,
            summary.successful,
            summary.loss_percent()
        );

        if summary.successful == 0 {
            println!("No successful probes; no latency statistics to report.");
        } else {
            println!(
                "rtt min/avg/max = {:.2}/{:.2}/{:.2} ms",
                summary.min_ms, summary.mean_ms, summary.max_ms
            );

            let latencies: Vec<f64> = outcomes
                .iter()
                .filter_map(ProbeOutcome::latency_ms)
                .collect();

            println!();
            println!(
                "{}",
                pm_plot::plot(
                    &latencies,
                    PLOT_WIDTH,
                    PLOT_HEIGHT,
                    &format!("Latency to {} (ms)", cli.target),
                )
            );
        }
    }

    if let Err(error) = write_log(&cli.log, &cli.target, outcomes) {
        warn!(%error, path = %cli.log.display(), "unable to persist the run log");
    }

    Ok(())
}

/// Write the plain-text run log: a target header, a generation timestamp, a
/// separator, then one line per outcome in sequence order.
fn write_log(path: &Path, target: &str, outcomes: &[ProbeOutcome]) -> anyhow::Result<()> {
    let mut log = String::new();

    writeln!(log, "Ping log for {target}")?;
    writeln!(log, "Generated at {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(log, "----------------------------------------")?;

    for outcome in outcomes {
        let stamp = outcome.at.format("%H:%M:%S");

        match outcome.latency_ms() {
            Some(ms) => writeln!(log, "[{stamp}] Ping {}: {:.2} ms", outcome.seq, ms)?,
            None => writeln!(log, "[{stamp}] Ping {}: FAILED", outcome.seq)?,
        }
    }

    std::fs::write(path, log).with_context(|| format!("writing {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Local;
    use pm_core::ProbeOutcome;

    use crate::report::write_log;

    #[test]
    fn log_round_trips_in_sequence_order() {
        let at = Local::now();
        let outcomes = vec![
            ProbeOutcome::success(1, at, Duration::from_millis(12)),
            ProbeOutcome::failure(2, at),
            ProbeOutcome::success(3, at, Duration::from_millis(140)),
        ];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ping_log.txt");

        write_log(&path, "example.com", &outcomes).unwrap();

        let log = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = log.lines().collect();

        // Two header lines, a separator, one line per outcome.
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Ping log for example.com");
        assert!(lines[1].starts_with("Generated at "));

        assert!(lines[3].contains("Ping 1: 12.00 ms"));
        assert!(lines[4].contains("Ping 2: FAILED"));
        assert!(lines[5].contains("Ping 3: 140.00 ms"));
    }

    #[test]
    fn log_write_failure_surfaces_an_error() {
        let outcomes = vec![ProbeOutcome::failure(1, Local::now())];

        let result = write_log(
            std::path::Path::new("/nonexistent-dir/ping_log.txt"),
            "example.com",
            &outcomes,
        );

        assert!(result.is_err());
    }
}
