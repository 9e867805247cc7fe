// Copyright (c) 2023-2024 Cloudflare, Inc.
// Licensed under the BSD-3-Clause license found in the LICENSE file or at https://opensource.org/licenses/BSD-3-Clause

use std::path::PathBuf;

use clap::Parser;

/// pingmon repeatedly measures round-trip latency to a single target using
/// the system ping utility, then reports per-probe results, aggregate
/// statistics and an ASCII chart of latency over time.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    /// The host to probe.
    #[clap(default_value = "google.com")]
    #[clap(short, long)]
    pub target: String,

    /// How many probes to send. 0 runs until interrupted.
    #[clap(default_value = "10")]
    #[clap(short, long)]
    pub count: u64,

    /// Seconds between probes. Must be at least 1.
    #[clap(default_value = "1")]
    #[clap(short, long)]
    pub interval: u64,

    /// Where the plain-text run log is written.
    #[clap(default_value = "ping_log.txt")]
    #[clap(short, long)]
    pub log: PathBuf,

    /// Successful probes above this many milliseconds are flagged as high
    /// latency in the report.
    #[clap(default_value = "100.0")]
    #[clap(long)]
    pub threshold: f64,

    /// Print the aggregate summary as JSON instead of the stats block and
    /// chart.
    #[clap(long)]
    pub json: bool,
}
