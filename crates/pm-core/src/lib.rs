//! The core abstractions for pingmon.
//!
//! Defines the main trait and record type:
//! - [`LatencySource`]: for abstracting over how a single probe is performed.
//! - [`ProbeOutcome`]: the immutable result of one probe.

#![deny(missing_docs)]

mod outcome;
mod source;

pub use crate::{
    outcome::ProbeOutcome,
    source::{LatencySource, DEFAULT_PROBE_TIMEOUT},
};

pub use anyhow::Error;
pub use anyhow::Result;
