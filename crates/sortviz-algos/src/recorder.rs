//! Shared bookkeeping for action-log generators.
//!
//! A [`Recorder`] owns the working copy of the array. Every primitive
//! operation a generator performs goes through it, so the mutation, the
//! recorded [`Action`] and the counter update can never drift apart.

use sortviz_core::{Action, ActionLog, AlgorithmKind, LogEntry, Metrics, Snapshot, Value};

/// Working array plus the log being recorded against it.
///
/// # Examples
///
/// ```
/// use sortviz_algos::Recorder;
/// use sortviz_core::AlgorithmKind;
///
/// let input = [2, 1];
/// let mut rec = Recorder::new(AlgorithmKind::Bubble, &input);
/// rec.compare(0, 1);
/// rec.swap(0, 1);
/// let log = rec.finish();
///
/// assert_eq!(input, [2, 1]); // caller's array untouched
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.totals().swaps, 1);
/// ```
#[derive(Debug)]
pub struct Recorder {
    kind: AlgorithmKind,
    input_len: usize,
    values: Vec<Value>,
    entries: Vec<LogEntry>,
    totals: Metrics,
}

impl Recorder {
    /// Start recording against a private copy of `input`.
    pub fn new(kind: AlgorithmKind, input: &[Value]) -> Self {
        Self {
            kind,
            input_len: input.len(),
            values: input.to_vec(),
            entries: Vec::new(),
            totals: Metrics::default(),
        }
    }

    /// Current state of the working array.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value at `index` in the working array.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; generators only pass indices
    /// derived from the array length.
    pub fn get(&self, index: usize) -> Value {
        self.values[index]
    }

    /// Number of elements being sorted.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the working array is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Record a comparison between `a` and `b`. The array is unchanged.
    pub fn compare(&mut self, a: usize, b: usize) {
        self.push(Action::Compare { a, b });
    }

    /// Exchange `a` and `b` and record the swap.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
        let snapshot = self.snapshot();
        self.push(Action::Swap { a, b, snapshot });
    }

    /// Copy the element at `from` onto `to`, recorded as a swap of the two.
    ///
    /// Insertion sort's shift step: the array briefly holds a duplicate
    /// until the key is written back.
    pub fn shift(&mut self, from: usize, to: usize) {
        self.values[to] = self.values[from];
        let snapshot = self.snapshot();
        self.push(Action::Swap {
            a: from,
            b: to,
            snapshot,
        });
    }

    /// Write `value` at `index` and record the overwrite.
    pub fn write(&mut self, index: usize, value: Value) {
        self.values[index] = value;
        let snapshot = self.snapshot();
        self.push(Action::Overwrite { index, snapshot });
    }

    /// Record that `index` holds its final value.
    pub fn set_sorted(&mut self, index: usize) {
        self.push(Action::SetSorted { index });
    }

    /// Mark every index sorted, in ascending order.
    pub fn mark_all_sorted(&mut self) {
        for index in 0..self.values.len() {
            self.set_sorted(index);
        }
    }

    /// Stop recording and return the log.
    pub fn finish(self) -> ActionLog {
        ActionLog::new(self.kind, self.input_len, self.entries)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::from(self.values.as_slice())
    }

    fn push(&mut self, action: Action) {
        self.totals.count(action.kind());
        self.entries.push(LogEntry {
            action,
            totals: self.totals,
        });
    }
}
