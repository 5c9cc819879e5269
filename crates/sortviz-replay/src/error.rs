//! Error types for log verification.

use std::fmt;

use sortviz_core::Metrics;

/// The first problem [`verify_log`](crate::verify_log) found in a log.
///
/// `position` fields are zero-based entry positions in the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// The log was recorded for an input of another length.
    InputLength {
        /// Length the log was recorded for.
        recorded: usize,
        /// Length of the supplied input.
        supplied: usize,
    },
    /// An action names an index outside the array.
    IndexOutOfBounds {
        /// Position of the offending entry.
        position: usize,
        /// The out-of-range index.
        index: usize,
        /// Array length.
        len: usize,
    },
    /// A snapshot has the wrong number of elements.
    SnapshotLength {
        /// Position of the offending entry.
        position: usize,
        /// Expected length.
        expected: usize,
        /// Actual snapshot length.
        found: usize,
    },
    /// A mutation changed an index it does not name.
    ForeignChange {
        /// Position of the offending entry.
        position: usize,
        /// The index that changed.
        index: usize,
    },
    /// An index was marked sorted more than once.
    DuplicateSorted {
        /// Position of the second mark.
        position: usize,
        /// The index marked twice.
        index: usize,
    },
    /// An index was never marked sorted.
    MissingSorted {
        /// The unmarked index.
        index: usize,
    },
    /// The final state decreases after `index`.
    NotSorted {
        /// Index of the larger element of the first inversion.
        index: usize,
    },
    /// The final state is not a rearrangement of the input.
    NotPermutation,
    /// An entry's cumulative totals disagree with the recounted actions.
    MetricsMismatch {
        /// Position of the offending entry.
        position: usize,
        /// Totals carried by the entry.
        recorded: Metrics,
        /// Totals recounted from the actions so far.
        recounted: Metrics,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputLength { recorded, supplied } => write!(
                f,
                "log recorded for {recorded} elements, input has {supplied}"
            ),
            Self::IndexOutOfBounds {
                position,
                index,
                len,
            } => write!(
                f,
                "entry {position}: index {index} out of bounds for length {len}"
            ),
            Self::SnapshotLength {
                position,
                expected,
                found,
            } => write!(
                f,
                "entry {position}: snapshot has {found} elements, expected {expected}"
            ),
            Self::ForeignChange { position, index } => {
                write!(f, "entry {position}: mutation changed unnamed index {index}")
            }
            Self::DuplicateSorted { position, index } => {
                write!(f, "entry {position}: index {index} marked sorted twice")
            }
            Self::MissingSorted { index } => write!(f, "index {index} never marked sorted"),
            Self::NotSorted { index } => {
                write!(f, "final state decreases after index {index}")
            }
            Self::NotPermutation => write!(f, "final state is not a permutation of the input"),
            Self::MetricsMismatch {
                position,
                recorded,
                recounted,
            } => write!(
                f,
                "entry {position}: totals {{{recorded}}} but recount gives {{{recounted}}}"
            ),
        }
    }
}

impl std::error::Error for ReplayError {}
