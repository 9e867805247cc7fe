// Copyright (c) 2023-2024 Cloudflare, Inc.
// Licensed under the BSD-3-Clause license found in the LICENSE file or at https://opensource.org/licenses/BSD-3-Clause

use pm_core::ProbeOutcome;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over a finished run.
///
/// Latency fields cover successful probes only and degenerate to zero when
/// there were none. The loss ratio is computed against the total probe
/// count and is defined as 0 for an empty run.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub successful: usize,
    pub loss_ratio: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub mean_ms: f64,
}

impl RunSummary {
    /// Loss ratio as a percentage, for display.
    pub fn loss_percent(&self) -> f64 {
        self.loss_ratio * 100.0
    }
}

/// Reduce an outcome sequence to a [`RunSummary`] in a single linear pass.
///
/// The aggregates depend only on the multiset of outcomes, not their order.
pub fn summarize(outcomes: &[ProbeOutcome]) -> RunSummary {
    let mut successful = 0;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for outcome in outcomes {
        let Some(ms) = outcome.latency_ms() else {
            continue;
        };

        successful += 1;
        sum += ms;
        min = min.min(ms);
        max = max.max(ms);
    }

    let total = outcomes.len();

    let loss_ratio = if total == 0 {
        0.0
    } else {
        (total - successful) as f64 / total as f64
    };

    if successful == 0 {
        return RunSummary {
            total,
            loss_ratio,
            ..RunSummary::default()
        };
    }

    RunSummary {
        total,
        successful,
        loss_ratio,
        min_ms: min,
        max_ms: max,
        mean_ms: sum / successful as f64,
    }
}
