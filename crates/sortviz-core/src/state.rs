//! Playback lifecycle states.

use std::fmt;

/// Where a run is in its lifecycle.
///
/// Transitions are driven only by user input and by exhausting the
/// action sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    /// No run has started.
    #[default]
    Idle,
    /// Actions are being applied on each tick.
    Running,
    /// The run is suspended; ticks are ignored.
    Paused,
    /// Every action was applied.
    Completed,
    /// The run was stopped before the log was exhausted.
    Cancelled,
}

impl PlaybackState {
    /// Running or paused.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }

    /// Completed or cancelled. No further transitions happen.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        })
    }
}
