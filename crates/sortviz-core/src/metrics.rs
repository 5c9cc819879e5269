//! Comparison, swap and write counters.

use std::fmt;
use std::ops::AddAssign;

use crate::action::ActionKind;

/// Cumulative counters for one sort.
///
/// Incremented by the generator alongside each recorded action, so a
/// log entry's counters are exact at every position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Metrics {
    /// Number of `compare` actions so far.
    pub comparisons: u64,
    /// Number of `swap` actions so far (insertion sort's shifts included).
    pub swaps: u64,
    /// Number of `overwrite` actions so far.
    pub writes: u64,
}

impl Metrics {
    /// Count one action of the given kind. `SetSorted` counts nothing.
    pub fn count(&mut self, kind: ActionKind) {
        match kind {
            ActionKind::Compare => self.comparisons += 1,
            ActionKind::Swap => self.swaps += 1,
            ActionKind::Overwrite => self.writes += 1,
            ActionKind::SetSorted => {}
        }
    }

    /// Whether every counter is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl AddAssign for Metrics {
    fn add_assign(&mut self, rhs: Self) {
        self.comparisons += rhs.comparisons;
        self.swaps += rhs.swaps;
        self.writes += rhs.writes;
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comparisons={} swaps={} writes={}",
            self.comparisons, self.swaps, self.writes
        )
    }
}
