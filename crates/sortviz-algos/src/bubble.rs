//! Bubble sort.
//!
//! Every pass compares each adjacent pair in the unsorted prefix and swaps
//! it when out of order. There is no early exit: a pass over an already
//! sorted prefix still records its comparisons. After pass `i` the index
//! `n - i - 1` is marked sorted.

use sortviz_core::{ActionLog, AlgorithmKind, SortAlgorithm, Value};

use crate::recorder::Recorder;

const PSEUDOCODE: &str = "for i in range n:\n  for j in range n-i-1:\n    compare j and j+1; swap if needed";

/// Bubble sort generator.
///
/// # Examples
///
/// ```
/// use sortviz_algos::BubbleSort;
/// use sortviz_core::SortAlgorithm;
///
/// let log = BubbleSort.generate(&[2, 1]);
/// assert_eq!(log.totals().swaps, 1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bubble
    }

    fn generate(&self, values: &[Value]) -> ActionLog {
        let mut rec = Recorder::new(self.kind(), values);
        let n = rec.len();
        for i in 0..n {
            for j in 0..n - i - 1 {
                rec.compare(j, j + 1);
                if rec.get(j) > rec.get(j + 1) {
                    rec.swap(j, j + 1);
                }
            }
            rec.set_sorted(n - i - 1);
        }
        rec.finish()
    }

    fn pseudocode(&self) -> &'static str {
        PSEUDOCODE
    }
}
