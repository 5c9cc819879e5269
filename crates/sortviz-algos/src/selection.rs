//! Selection sort.

use sortviz_core::{ActionLog, AlgorithmKind, SortAlgorithm, Value};

use crate::recorder::Recorder;

const PSEUDOCODE: &str = "for i in range n:\n  find min in unsorted; swap with i";

/// Selection sort generator.
///
/// Comparisons are recorded as `(current minimum, candidate)`. A swap is
/// recorded only when the minimum is not already at `i`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Selection
    }

    fn generate(&self, values: &[Value]) -> ActionLog {
        let mut rec = Recorder::new(self.kind(), values);
        let n = rec.len();
        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..n {
                rec.compare(min, j);
                if rec.get(j) < rec.get(min) {
                    min = j;
                }
            }
            if min != i {
                rec.swap(i, min);
            }
            rec.set_sorted(i);
        }
        if n > 0 {
            rec.set_sorted(n - 1);
        }
        rec.finish()
    }

    fn pseudocode(&self) -> &'static str {
        PSEUDOCODE
    }
}
