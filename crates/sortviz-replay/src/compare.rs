//! Log comparison for determinism checks.
//!
//! The logs are always walked entry by entry. [`log_hash`](crate::log_hash)
//! is a cheap way to tell two logs apart, but equal fingerprints are not
//! proof of equal actions.

use sortviz_core::{Action, ActionLog};

/// How two logs first differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivergenceKind {
    /// The actions are of different kinds.
    Kind,
    /// Same kind, different indices.
    Indices,
    /// Same kind and indices, different snapshot.
    Snapshot,
    /// One log ends before the other.
    Length,
}

/// The first position at which two logs differ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Divergence {
    /// Position of the first differing entry.
    pub position: usize,
    /// What differs there.
    pub kind: DivergenceKind,
    /// The first log's action, if it has one at `position`.
    pub expected: Option<Action>,
    /// The second log's action, if it has one at `position`.
    pub found: Option<Action>,
}

/// Find where `expected` and `found` first differ, or `None` if their
/// actions are identical.
///
/// Cumulative totals are not compared; they follow from the actions.
pub fn compare_logs(expected: &ActionLog, found: &ActionLog) -> Option<Divergence> {
    let mut left = expected.actions();
    let mut right = found.actions();
    let mut position = 0;
    loop {
        let kind = match (left.next(), right.next()) {
            (None, None) => return None,
            (Some(a), Some(b)) => match diff(a, b) {
                Some(kind) => kind,
                None => {
                    position += 1;
                    continue;
                }
            },
            _ => DivergenceKind::Length,
        };
        return Some(Divergence {
            position,
            kind,
            expected: expected.get(position).map(|e| e.action.clone()),
            found: found.get(position).map(|e| e.action.clone()),
        });
    }
}

fn diff(a: &Action, b: &Action) -> Option<DivergenceKind> {
    if a.kind() != b.kind() {
        Some(DivergenceKind::Kind)
    } else if a.indices() != b.indices() {
        Some(DivergenceKind::Indices)
    } else if a.snapshot() != b.snapshot() {
        Some(DivergenceKind::Snapshot)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_algos::generate;
    use sortviz_core::{AlgorithmKind, LogEntry, Metrics};

    fn log_of(actions: Vec<Action>) -> ActionLog {
        let entries = actions
            .into_iter()
            .map(|action| LogEntry {
                action,
                totals: Metrics::default(),
            })
            .collect();
        ActionLog::new(AlgorithmKind::Bubble, 2, entries)
    }

    #[test]
    fn identical_logs_match() {
        let values = [9, 4, 6, 1, 1];
        for kind in AlgorithmKind::ALL {
            assert_eq!(
                compare_logs(&generate(kind, &values), &generate(kind, &values)),
                None
            );
        }
    }

    #[test]
    fn kind_difference() {
        let a = log_of(vec![Action::Compare { a: 0, b: 1 }]);
        let b = log_of(vec![Action::SetSorted { index: 0 }]);
        let d = compare_logs(&a, &b).unwrap();
        assert_eq!(d.position, 0);
        assert_eq!(d.kind, DivergenceKind::Kind);
    }

    #[test]
    fn index_and_snapshot_differences() {
        let a = log_of(vec![
            Action::Compare { a: 0, b: 1 },
            Action::Swap {
                a: 0,
                b: 1,
                snapshot: vec![1, 2].into(),
            },
        ]);
        let b = log_of(vec![
            Action::Compare { a: 0, b: 1 },
            Action::Swap {
                a: 0,
                b: 1,
                snapshot: vec![2, 1].into(),
            },
        ]);
        let d = compare_logs(&a, &b).unwrap();
        assert_eq!((d.position, d.kind), (1, DivergenceKind::Snapshot));

        let c = log_of(vec![Action::Compare { a: 1, b: 0 }]);
        let d = compare_logs(&a, &c).unwrap();
        assert_eq!((d.position, d.kind), (0, DivergenceKind::Indices));
    }

    #[test]
    fn totals_and_algorithm_are_not_compared() {
        let values = [4, 2, 3, 1];
        let log = generate(AlgorithmKind::Insertion, &values);
        let relabelled = ActionLog::new(AlgorithmKind::Quick, 4, log.entries().to_vec());
        let zeroed = log_of(log.actions().cloned().collect());
        assert_eq!(compare_logs(&log, &relabelled), None);
        assert_eq!(compare_logs(&log, &zeroed), None);
    }

    #[test]
    fn equal_lengths_still_walk_every_entry() {
        let a = log_of(vec![
            Action::Compare { a: 0, b: 1 },
            Action::SetSorted { index: 0 },
            Action::SetSorted { index: 1 },
        ]);
        let b = log_of(vec![
            Action::Compare { a: 0, b: 1 },
            Action::SetSorted { index: 0 },
            Action::SetSorted { index: 0 },
        ]);
        let d = compare_logs(&a, &b).unwrap();
        assert_eq!((d.position, d.kind), (2, DivergenceKind::Indices));
        assert_eq!(d.found, Some(Action::SetSorted { index: 0 }));
    }

    #[test]
    fn length_difference() {
        let a = log_of(vec![Action::Compare { a: 0, b: 1 }]);
        let b = log_of(vec![
            Action::Compare { a: 0, b: 1 },
            Action::SetSorted { index: 1 },
        ]);
        let d = compare_logs(&a, &b).unwrap();
        assert_eq!(d.position, 1);
        assert_eq!(d.kind, DivergenceKind::Length);
        assert_eq!(d.expected, None);
        assert_eq!(d.found, Some(Action::SetSorted { index: 1 }));
    }
}
