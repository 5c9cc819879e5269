//! Event-driven playback of an action log.
//!
//! [`Player`] is a pure state machine: it never sleeps or reads a clock.
//! The caller feeds it [`PlayerEvent`]s and it applies at most one action
//! per event. Elapsed time arrives as the payload of
//! [`Tick`](PlayerEvent::Tick) and is only accrued while running.
//!
//! | State     | Start   | Tick      | TogglePause | Step           | Cancel    |
//! |-----------|---------|-----------|-------------|----------------|-----------|
//! | idle      | running | -         | -           | apply, paused  | -         |
//! | running   | -       | apply     | paused      | apply, paused  | cancelled |
//! | paused    | -       | -         | running     | apply          | cancelled |
//! | completed | -       | -         | -           | -              | -         |
//! | cancelled | -       | -         | -           | -              | -         |
//!
//! Applying the last action completes the run and marks every index
//! sorted. Events marked `-` are ignored.

use std::time::Duration;

use sortviz_core::{Action, ActionLog, PlaybackState, Value};
use sortviz_render::Frame;

use crate::metrics::RunMetrics;
use crate::visual::VisualState;

/// Input to [`Player::handle()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Begin playback.
    Start,
    /// A delay interval passed; apply the next action.
    Tick(Duration),
    /// Switch between running and paused.
    TogglePause,
    /// Apply exactly one action and pause.
    Step,
    /// Abandon the run.
    Cancel,
}

/// What one event did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// State before the event.
    pub before: PlaybackState,
    /// State after the event.
    pub after: PlaybackState,
    /// The action applied by the event, if any.
    pub applied: Option<Action>,
}

impl Outcome {
    /// An event that changed nothing.
    pub fn ignored(state: PlaybackState) -> Self {
        Self {
            before: state,
            after: state,
            applied: None,
        }
    }

    /// Whether the event changed nothing.
    pub fn is_ignored(&self) -> bool {
        self.before == self.after && self.applied.is_none()
    }

    /// Whether the event moved the player to another state.
    pub fn transitioned(&self) -> bool {
        self.before != self.after
    }
}

/// Plays one [`ActionLog`] against a [`VisualState`].
///
/// # Examples
///
/// ```
/// use sortviz_core::PlaybackState;
/// use sortviz_engine::{Player, PlayerEvent};
///
/// let values = [5, 3, 8, 1];
/// let log = sortviz_algos::generate(sortviz_core::AlgorithmKind::Bubble, &values);
/// let mut player = Player::new(&values, log);
///
/// player.handle(PlayerEvent::Step);
/// assert_eq!(player.state(), PlaybackState::Paused);
/// assert_eq!(player.position(), 1);
///
/// player.handle(PlayerEvent::TogglePause);
/// while player.state() == PlaybackState::Running {
///     player.handle(PlayerEvent::Tick(std::time::Duration::ZERO));
/// }
/// assert_eq!(player.visual().values(), &[1, 3, 5, 8]);
/// ```
#[derive(Clone, Debug)]
pub struct Player {
    log: ActionLog,
    cursor: usize,
    state: PlaybackState,
    visual: VisualState,
    metrics: RunMetrics,
}

impl Player {
    /// A player in the idle state showing `initial`.
    pub fn new(initial: &[Value], log: ActionLog) -> Self {
        Self {
            log,
            cursor: 0,
            state: PlaybackState::Idle,
            visual: VisualState::new(initial),
            metrics: RunMetrics::default(),
        }
    }

    /// Current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// The log being played.
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Number of actions applied so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of actions not yet applied.
    pub fn remaining(&self) -> usize {
        self.log.len() - self.cursor
    }

    /// The shown state.
    pub fn visual(&self) -> &VisualState {
        &self.visual
    }

    /// Counters and elapsed time of this run.
    pub fn metrics(&self) -> RunMetrics {
        self.metrics
    }

    /// The rendering instruction for the shown state.
    pub fn frame(&self) -> Frame {
        self.visual.frame()
    }

    /// Feed one event. Events that are not valid in the current state are
    /// ignored and reported as such.
    pub fn handle(&mut self, event: PlayerEvent) -> Outcome {
        use PlaybackState::*;

        let before = self.state;
        let applied = match (before, event) {
            (Idle, PlayerEvent::Start) => {
                self.metrics = RunMetrics::default();
                self.state = Running;
                None
            }
            (Idle, PlayerEvent::Step) => {
                self.metrics = RunMetrics::default();
                self.state = Paused;
                self.advance()
            }
            (Running, PlayerEvent::Tick(dt)) => {
                self.metrics.elapsed += dt;
                self.advance()
            }
            (Running, PlayerEvent::TogglePause) => {
                self.state = Paused;
                None
            }
            (Paused, PlayerEvent::TogglePause) => {
                self.state = Running;
                None
            }
            (Running | Paused, PlayerEvent::Step) => {
                self.state = Paused;
                self.advance()
            }
            (Running | Paused, PlayerEvent::Cancel) => {
                self.state = Cancelled;
                None
            }
            _ => None,
        };

        Outcome {
            before,
            after: self.state,
            applied,
        }
    }

    /// Apply the next action, completing the run if the log is exhausted.
    fn advance(&mut self) -> Option<Action> {
        let applied = self.log.get(self.cursor).map(|entry| {
            self.visual.apply(&entry.action);
            self.metrics.counts = entry.totals;
            entry.action.clone()
        });
        if applied.is_some() {
            self.cursor += 1;
        }
        if self.cursor == self.log.len() {
            self.complete();
        }
        applied
    }

    fn complete(&mut self) {
        self.state = PlaybackState::Completed;
        self.visual.clear_current();
        self.visual.mark_all_sorted();
    }
}
