//! Recorded actions and the action log produced by a sort.

use std::fmt;
use std::sync::Arc;

use smallvec::{smallvec, SmallVec};

use crate::kind::AlgorithmKind;
use crate::metrics::Metrics;

/// A single array element. Bar heights are derived from values.
pub type Value = u32;

/// Full copy of the array taken right after a mutating action.
///
/// Shared so that hosts can hold on to a frame's values without copying.
pub type Snapshot = Arc<[Value]>;

/// The indices an action touches. Never more than two.
pub type Indices = SmallVec<[usize; 2]>;

/// Discriminant of an [`Action`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Two elements were compared.
    Compare,
    /// Two elements were exchanged (or one shifted onto the other).
    Swap,
    /// One element was written.
    Overwrite,
    /// One index reached its final position.
    SetSorted,
}

impl ActionKind {
    /// Lowercase label used in logs and status lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::Overwrite => "overwrite",
            Self::SetSorted => "set-sorted",
        }
    }

    /// Whether actions of this kind carry an array snapshot.
    pub fn is_mutating(self) -> bool {
        matches!(self, Self::Swap | Self::Overwrite)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded primitive step of a sorting algorithm.
///
/// Mutating variants carry the full array state after the mutation, so
/// replaying a log in order reconstructs every intermediate state.
///
/// # Examples
///
/// ```
/// use sortviz_core::{Action, ActionKind};
///
/// let swap = Action::Swap { a: 0, b: 1, snapshot: vec![3, 5].into() };
/// assert_eq!(swap.kind(), ActionKind::Swap);
/// assert_eq!(swap.indices().as_slice(), &[0, 1]);
/// assert_eq!(swap.snapshot(), Some(&[3, 5][..]));
/// assert_eq!(swap.to_string(), "swap 0 1 [3, 5]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Elements at `a` and `b` were compared.
    Compare {
        /// First compared index.
        a: usize,
        /// Second compared index.
        b: usize,
    },
    /// Elements at `a` and `b` were exchanged.
    Swap {
        /// First swapped index.
        a: usize,
        /// Second swapped index.
        b: usize,
        /// Array state after the swap.
        snapshot: Snapshot,
    },
    /// The element at `index` was written.
    Overwrite {
        /// The written index.
        index: usize,
        /// Array state after the write.
        snapshot: Snapshot,
    },
    /// The element at `index` is in its final position.
    SetSorted {
        /// The finalized index.
        index: usize,
    },
}

impl Action {
    /// The payload-free kind of this action.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Compare { .. } => ActionKind::Compare,
            Self::Swap { .. } => ActionKind::Swap,
            Self::Overwrite { .. } => ActionKind::Overwrite,
            Self::SetSorted { .. } => ActionKind::SetSorted,
        }
    }

    /// Indices touched by this action, in recording order.
    pub fn indices(&self) -> Indices {
        match *self {
            Self::Compare { a, b } | Self::Swap { a, b, .. } => smallvec![a, b],
            Self::Overwrite { index, .. } | Self::SetSorted { index } => smallvec![index],
        }
    }

    /// The post-mutation array state, for swaps and overwrites.
    pub fn snapshot(&self) -> Option<&[Value]> {
        match self {
            Self::Swap { snapshot, .. } | Self::Overwrite { snapshot, .. } => {
                Some(&snapshot[..])
            }
            Self::Compare { .. } | Self::SetSorted { .. } => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        for index in self.indices() {
            write!(f, " {index}")?;
        }
        if let Some(values) = self.snapshot() {
            write!(f, " {values:?}")?;
        }
        Ok(())
    }
}

/// An action together with the cumulative counters after it.
///
/// The generator that records the action is the only place counters are
/// incremented; consumers read `totals` instead of recounting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// The recorded action.
    pub action: Action,
    /// Comparison/swap/write totals including this action.
    pub totals: Metrics,
}

/// The ordered log of every action produced by fully executing a sort.
///
/// # Examples
///
/// ```
/// use sortviz_core::{Action, ActionLog, AlgorithmKind, LogEntry, Metrics};
///
/// let entries = vec![LogEntry {
///     action: Action::SetSorted { index: 0 },
///     totals: Metrics::default(),
/// }];
/// let log = ActionLog::new(AlgorithmKind::Bubble, 1, entries);
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.totals(), Metrics::default());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionLog {
    algorithm: AlgorithmKind,
    input_len: usize,
    entries: Vec<LogEntry>,
}

impl ActionLog {
    /// Assemble a log from already-recorded entries.
    pub fn new(algorithm: AlgorithmKind, input_len: usize, entries: Vec<LogEntry>) -> Self {
        Self {
            algorithm,
            input_len,
            entries,
        }
    }

    /// The algorithm that produced this log.
    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    /// Length of the array the log was recorded against.
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// All entries in execution order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entry at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&LogEntry> {
        self.entries.get(position)
    }

    /// Iterate over the bare actions in execution order.
    pub fn actions(&self) -> impl ExactSizeIterator<Item = &Action> + '_ {
        self.entries.iter().map(|e| &e.action)
    }

    /// Number of recorded actions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no action was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counters after the final action (zero for an empty log).
    pub fn totals(&self) -> Metrics {
        self.entries.last().map(|e| e.totals).unwrap_or_default()
    }
}
