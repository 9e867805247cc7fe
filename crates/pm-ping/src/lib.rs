//! A [`LatencySource`] backed by the platform `ping` utility.
//!
//! Each probe spawns one `ping` with a single-echo flag and reads the
//! round-trip time back out of its textual output. The process is killed if
//! it outlives the probe timeout.

mod parse;

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use pm_core::LatencySource;
use tokio::process::Command;
use tracing::debug;

pub use crate::parse::parse_latency;

/// Probes a target by shelling out to the system `ping`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPing;

#[async_trait]
impl LatencySource for SystemPing {
    async fn probe(&self, target: &str, timeout: Duration) -> Option<Duration> {
        let mut command = Command::new("ping");

        #[cfg(windows)]
        command.arg("-n");
        #[cfg(not(windows))]
        command.arg("-c");

        command
            .arg("1")
            .arg(target)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(timeout, command.output()).await {
            Ok(Ok(output)) if output.status.success() => output,
            Ok(Ok(output)) => {
                debug!(%target, status = ?output.status, "ping reported failure");
                return None;
            }
            Ok(Err(error)) => {
                debug!(%target, %error, "unable to run ping");
                return None;
            }
            Err(_) => {
                debug!(%target, ?timeout, "probe timed out");
                return None;
            }
        };

        parse_latency(&String::from_utf8_lossy(&output.stdout))
    }
}
