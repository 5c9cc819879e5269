//! Walking a log's intermediate states.

use std::iter::Enumerate;
use std::slice;

use sortviz_core::{Action, ActionLog, LogEntry, Value};

/// One mutation seen while replaying.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayStep<'a> {
    /// Position of the mutating entry in the log.
    pub position: usize,
    /// The mutating action.
    pub action: &'a Action,
    /// State before the action.
    pub before: &'a [Value],
    /// State after the action.
    pub after: &'a [Value],
}

/// Iterator over the states a log passes through. Created by [`replay()`].
#[derive(Clone, Debug)]
pub struct Replay<'a> {
    entries: Enumerate<slice::Iter<'a, LogEntry>>,
    current: &'a [Value],
}

impl<'a> Replay<'a> {
    /// The state after every step yielded so far.
    pub fn current(&self) -> &'a [Value] {
        self.current
    }
}

impl<'a> Iterator for Replay<'a> {
    type Item = ReplayStep<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (position, entry) in self.entries.by_ref() {
            if let Some(after) = entry.action.snapshot() {
                let before = std::mem::replace(&mut self.current, after);
                return Some(ReplayStep {
                    position,
                    action: &entry.action,
                    before,
                    after,
                });
            }
        }
        None
    }
}

/// Replay `log` from `initial`, yielding one step per swap or overwrite.
///
/// # Examples
///
/// ```
/// use sortviz_core::AlgorithmKind;
/// use sortviz_replay::replay;
///
/// let initial = [2, 1];
/// let log = sortviz_algos::generate(AlgorithmKind::Bubble, &initial);
/// let states: Vec<_> = replay(&initial, &log).map(|s| s.after.to_vec()).collect();
/// assert_eq!(states, vec![vec![1, 2]]);
/// ```
pub fn replay<'a>(initial: &'a [Value], log: &'a ActionLog) -> Replay<'a> {
    Replay {
        entries: log.entries().iter().enumerate(),
        current: initial,
    }
}

/// The state after the whole log. Equal to `initial` when the log has no
/// mutations.
pub fn final_state(initial: &[Value], log: &ActionLog) -> Vec<Value> {
    replay(initial, log)
        .last()
        .map_or(initial, |step| step.after)
        .to_vec()
}
