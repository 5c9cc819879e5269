//! Displayed run metrics.
//!
//! [`RunMetrics`] is what the metrics panel shows: the operation counters
//! of the most recently applied action plus the time spent running.

use std::fmt;
use std::time::Duration;

use sortviz_core::Metrics;

/// Counters and elapsed time for the current run.
///
/// `counts` is taken from the cumulative totals carried by each log entry,
/// so it always agrees with the generator. `elapsed` only grows while the
/// run is in the running state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Comparisons, swaps and writes applied so far.
    pub counts: Metrics,
    /// Time spent running; paused time is excluded.
    pub elapsed: Duration,
}

impl RunMetrics {
    /// Comparisons applied so far.
    pub fn comparisons(&self) -> u64 {
        self.counts.comparisons
    }

    /// Swaps applied so far.
    pub fn swaps(&self) -> u64 {
        self.counts.swaps
    }

    /// Writes applied so far.
    pub fn writes(&self) -> u64 {
        self.counts.writes
    }

    /// Elapsed running time in whole milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

impl fmt::Display for RunMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} elapsed={}ms", self.counts, self.elapsed_ms())
    }
}
