//! Structural verification of an action log against its input.

use sortviz_core::{Action, ActionLog, Metrics, Value};

use crate::error::ReplayError;
use crate::hash::log_hash;

/// Summary of a log that passed [`verify_log()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogReport {
    /// Number of entries.
    pub actions: usize,
    /// Number of swaps and overwrites.
    pub mutations: usize,
    /// Recounted totals; equal to the log's own.
    pub totals: Metrics,
    /// [`log_hash`] of the log.
    pub hash: u64,
    /// State after the last mutation.
    pub final_state: Vec<Value>,
}

/// Check that `log` is a faithful recording of sorting `initial`.
///
/// Checks, in log order:
/// - every index is in bounds and every snapshot has the input's length;
/// - a mutation changes no index other than the ones it names;
/// - each entry's cumulative totals equal the recount so far;
/// - no index is marked sorted twice.
///
/// Then, at the end: every index was marked sorted, and the final state is
/// non-decreasing and a permutation of `initial`.
///
/// Returns the first problem found.
///
/// # Examples
///
/// ```
/// use sortviz_core::AlgorithmKind;
/// use sortviz_replay::verify_log;
///
/// let initial = [5, 3, 8, 1];
/// let log = sortviz_algos::generate(AlgorithmKind::Quick, &initial);
/// let report = verify_log(&initial, &log).unwrap();
/// assert_eq!(report.final_state, vec![1, 3, 5, 8]);
/// ```
pub fn verify_log(initial: &[Value], log: &ActionLog) -> Result<LogReport, ReplayError> {
    let len = initial.len();
    if log.input_len() != len {
        return Err(ReplayError::InputLength {
            recorded: log.input_len(),
            supplied: len,
        });
    }

    let mut current = initial;
    let mut marked = vec![false; len];
    let mut recount = Metrics::default();
    let mut mutations = 0;

    for (position, entry) in log.entries().iter().enumerate() {
        let action = &entry.action;
        let indices = action.indices();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(ReplayError::IndexOutOfBounds {
                position,
                index,
                len,
            });
        }

        recount.count(action.kind());
        if entry.totals != recount {
            return Err(ReplayError::MetricsMismatch {
                position,
                recorded: entry.totals,
                recounted: recount,
            });
        }

        if let Some(after) = action.snapshot() {
            if after.len() != len {
                return Err(ReplayError::SnapshotLength {
                    position,
                    expected: len,
                    found: after.len(),
                });
            }
            let foreign = (0..len).find(|&i| current[i] != after[i] && !indices.contains(&i));
            if let Some(index) = foreign {
                return Err(ReplayError::ForeignChange { position, index });
            }
            current = after;
            mutations += 1;
        } else if let Action::SetSorted { index } = *action {
            if std::mem::replace(&mut marked[index], true) {
                return Err(ReplayError::DuplicateSorted { position, index });
            }
        }
    }

    if let Some(index) = marked.iter().position(|&m| !m) {
        return Err(ReplayError::MissingSorted { index });
    }
    if let Some(index) = current.windows(2).position(|w| w[0] > w[1]) {
        return Err(ReplayError::NotSorted { index });
    }
    let mut expected = initial.to_vec();
    expected.sort_unstable();
    if expected != current {
        return Err(ReplayError::NotPermutation);
    }

    Ok(LogReport {
        actions: log.len(),
        mutations,
        totals: recount,
        hash: log_hash(log),
        final_state: current.to_vec(),
    })
}
