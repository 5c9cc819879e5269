//! Presentation callbacks and the status line.

use std::fmt;

use sortviz_core::{Action, AlgorithmKind};
use sortviz_render::Frame;

use crate::metrics::RunMetrics;

/// The status line shown next to the metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// A fresh array is waiting to be sorted.
    Ready,
    /// Playback is running.
    Running,
    /// Playback is paused.
    Paused,
    /// Elements `a` and `b` are being compared.
    Comparing {
        /// First index.
        a: usize,
        /// Second index.
        b: usize,
    },
    /// Elements `a` and `b` were swapped.
    Swapped {
        /// First index.
        a: usize,
        /// Second index.
        b: usize,
    },
    /// The element at `index` was written.
    Wrote {
        /// The written index.
        index: usize,
    },
    /// The element at `index` reached its final position.
    Sorted {
        /// The finalized index.
        index: usize,
    },
    /// The whole log was played.
    Completed,
    /// The run was abandoned.
    Cancelled,
}

impl Status {
    /// The status describing an applied action.
    pub fn for_action(action: &Action) -> Self {
        match *action {
            Action::Compare { a, b } => Self::Comparing { a, b },
            Action::Swap { a, b, .. } => Self::Swapped { a, b },
            Action::Overwrite { index, .. } => Self::Wrote { index },
            Action::SetSorted { index } => Self::Sorted { index },
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("Ready"),
            Self::Running => f.write_str("Running"),
            Self::Paused => f.write_str("Paused"),
            Self::Comparing { a, b } => write!(f, "Comparing {a},{b}"),
            Self::Swapped { a, b } => write!(f, "Swapped {a},{b}"),
            Self::Wrote { index } => write!(f, "Wrote {index}"),
            Self::Sorted { index } => write!(f, "Sorted {index}"),
            Self::Completed => f.write_str("Completed"),
            Self::Cancelled => f.write_str("Cancelled"),
        }
    }
}

/// Where a [`Controller`](crate::controller::Controller) presents its
/// output.
///
/// Each callback receives the complete current value; sinks never need to
/// remember earlier calls to draw correctly.
pub trait RenderSink {
    /// Draw the bars.
    fn render(&mut self, frame: &Frame);

    /// Show the counters and elapsed time.
    fn metrics(&mut self, metrics: &RunMetrics);

    /// Show the status line.
    fn status(&mut self, status: Status);

    /// Show the pseudocode panel for `algorithm`.
    fn code(&mut self, algorithm: AlgorithmKind, pseudocode: &str);
}

/// A sink that discards everything. Used for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _frame: &Frame) {}
    fn metrics(&mut self, _metrics: &RunMetrics) {}
    fn status(&mut self, _status: Status) {}
    fn code(&mut self, _algorithm: AlgorithmKind, _pseudocode: &str) {}
}
